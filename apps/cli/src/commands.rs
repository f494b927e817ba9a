//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use tracing::info;

use battlemenu_core::{ActorMenu, build_actor_menu_at, build_all_menus, check_database, help_text};
use battlemenu_data::{Database, GameParty};
use battlemenu_menu::MenuBuilder;
use battlemenu_shared::{AppConfig, init_config, load_config, load_config_from};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// battlemenu — preview and check battle command menus.
#[derive(Parser)]
#[command(
    name = "battlemenu",
    version,
    about = "Preview and check battle command menus defined in <Battle Commands> note blocks.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Config file path (defaults to ./battlemenu.toml, then ~/.battlemenu/).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Game data directory (overrides the config's `data.directory`).
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Output format for command results.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Resolve and print battle command menus.
    Show {
        /// Actor id to preview. Omit to show every actor.
        #[arg(short, long)]
        actor: Option<u32>,

        /// Preview at this level instead of the actor's initial level.
        #[arg(short, long)]
        level: Option<u32>,

        /// Restrict the party inventory to these item ids (repeatable).
        /// Defaults to owning every item in the database.
        #[arg(short, long)]
        item: Vec<u32>,

        /// Output format.
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Check every command block for lines that resolve to nothing.
    Check {
        /// Output format.
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List actors and classes and whether they carry a command block.
    List,

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "battlemenu=info",
        1 => "battlemenu=debug",
        _ => "battlemenu=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;

    match cli.command {
        Command::Show {
            actor,
            level,
            ref item,
            format,
        } => cmd_show(&cli, &config, actor, level, item, format),
        Command::Check { format } => cmd_check(&cli, &config, format),
        Command::List => cmd_list(&cli, &config),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(&config),
        },
    }
}

fn resolve_config(cli: &Cli) -> Result<AppConfig> {
    match &cli.config {
        Some(path) => Ok(load_config_from(path)?),
        None => Ok(load_config()?),
    }
}

fn load_db(cli: &Cli, config: &AppConfig) -> Result<Database> {
    let dir = cli
        .data
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data.directory));
    Ok(Database::load(&dir)?)
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_show(
    cli: &Cli,
    config: &AppConfig,
    actor: Option<u32>,
    level: Option<u32>,
    items: &[u32],
    format: OutputFormat,
) -> Result<()> {
    let db = load_db(cli, config)?;
    let party = if items.is_empty() {
        GameParty::with_all_items(&db)
    } else {
        GameParty::with_items(items.iter().copied())
    };
    let builder = MenuBuilder::new(config.commands.force_default);

    let menus = match actor {
        Some(id) => vec![build_actor_menu_at(&db, &party, id, level, &builder)?],
        None => {
            if let Some(level) = level {
                return Err(eyre!("--level {level} requires --actor"));
            }
            build_all_menus(&db, &party, &builder)?
        }
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&menus)?),
        OutputFormat::Text => {
            for menu in &menus {
                print_menu(menu, &db, config.help.show);
            }
        }
    }

    Ok(())
}

fn print_menu(menu: &ActorMenu, db: &Database, show_help: bool) {
    println!("{} (actor {})", menu.actor_name, menu.actor_id);
    if menu.entries.is_empty() {
        println!("  (no commands)");
    }
    for (index, entry) in menu.entries.iter().enumerate() {
        let mut line = format!("  {}. {}", index + 1, entry.label);
        if !entry.enabled {
            line.push_str("  (disabled)");
        }
        if show_help {
            if let Some(help) = help_text(entry, db) {
                line = format!("{line:<28}{help}");
            }
        }
        println!("{line}");
    }
    println!();
}

fn cmd_check(cli: &Cli, config: &AppConfig, format: OutputFormat) -> Result<()> {
    let db = load_db(cli, config)?;

    // Extension handlers are registered by embedding programs; the CLI
    // itself ships none, so every extension line is reported.
    let findings = check_database(&db, &[]);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&findings)?),
        OutputFormat::Text => {
            for finding in &findings {
                println!("{finding}");
            }
        }
    }

    if findings.is_empty() {
        info!("all command blocks are clean");
        Ok(())
    } else {
        Err(eyre!("{} problem(s) found", findings.len()))
    }
}

fn cmd_list(cli: &Cli, config: &AppConfig) -> Result<()> {
    let db = load_db(cli, config)?;

    println!("Classes:");
    for class in db.classes() {
        let mark = if class.command_lines.is_empty() {
            " "
        } else {
            "*"
        };
        println!(
            " {mark} {:>3}  {} ({} command line(s))",
            class.data.id,
            class.data.name,
            class.command_lines.len()
        );
    }

    println!();
    println!("Actors:");
    for actor in db.actors() {
        let mark = if actor.command_lines.is_empty() {
            " "
        } else {
            "*"
        };
        println!(
            " {mark} {:>3}  {} (class {}, {} command line(s))",
            actor.data.id,
            actor.data.name,
            actor.data.class_id,
            actor.command_lines.len()
        );
    }

    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(config: &AppConfig) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    println!("{toml_str}");
    Ok(())
}
