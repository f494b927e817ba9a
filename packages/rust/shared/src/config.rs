//! Application configuration for battlemenu.
//!
//! Config lives in `battlemenu.toml` next to the game project, with a
//! user-level fallback at `~/.battlemenu/battlemenu.toml`. CLI flags override
//! config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BattleMenuError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "battlemenu.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".battlemenu";

// ---------------------------------------------------------------------------
// Config structs (matching battlemenu.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Command-list behaviour.
    #[serde(default)]
    pub commands: CommandsConfig,

    /// Help panel behaviour and placement.
    #[serde(default)]
    pub help: HelpConfig,

    /// Game data location.
    #[serde(default)]
    pub data: DataConfig,
}

/// `[commands]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandsConfig {
    /// When a class defines no command block: `true` uses the engine default
    /// list, `false` falls back to the actor's command block.
    #[serde(default = "default_true")]
    pub force_default: bool,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            force_default: default_true(),
        }
    }
}

/// `[help]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpConfig {
    /// Whether to show the description panel for direct skill/item entries.
    #[serde(default = "default_true")]
    pub show: bool,

    /// Where to place the help panel.
    #[serde(default)]
    pub position: HelpPosition,

    /// X coordinate override for `custom` position. 0 keeps the default.
    #[serde(default)]
    pub x: u32,

    /// Y coordinate override for `custom` position. 0 keeps the default.
    #[serde(default)]
    pub y: u32,

    /// Width override for `custom` position. 0 keeps the default.
    #[serde(default)]
    pub width: u32,

    /// Height override for `custom` position. 0 keeps the default.
    #[serde(default)]
    pub height: u32,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            show: default_true(),
            position: HelpPosition::default(),
            x: 0,
            y: 0,
            width: 0,
            height: 0,
        }
    }
}

/// Help panel placement mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HelpPosition {
    /// Use the `x`/`y`/`width`/`height` overrides from `[help]`.
    Custom,
    /// Keep the host's default help placement untouched.
    GlobalDefault,
    /// Pin the panel directly above the battle status area.
    #[default]
    AboveStatus,
}

/// `[data]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the game's JSON data files.
    #[serde(default = "default_data_dir")]
    pub directory: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            directory: default_data_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_data_dir() -> String {
    "data".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the user config directory (`~/.battlemenu/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| BattleMenuError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the user config file (`~/.battlemenu/battlemenu.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config.
///
/// Checks `./battlemenu.toml` first, then the user config file. Returns
/// defaults if neither exists.
pub fn load_config() -> Result<AppConfig> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return load_config_from(&local);
    }

    let path = config_file_path()?;
    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| BattleMenuError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        BattleMenuError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the user config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| BattleMenuError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| BattleMenuError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| BattleMenuError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
