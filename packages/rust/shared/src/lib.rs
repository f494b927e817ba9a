//! Shared types, error model, and configuration for battlemenu.
//!
//! This crate is the foundation depended on by all other battlemenu crates.
//! It provides:
//! - [`BattleMenuError`] — the unified error type
//! - Domain types ([`MenuEntry`], [`MenuAction`], [`MenuPayload`], catalog records)
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, CommandsConfig, DataConfig, HelpConfig, HelpPosition, config_dir,
    config_file_path, init_config, load_config, load_config_from,
};
pub use error::{BattleMenuError, Result};
pub use types::{
    ActorId, ClassId, ItemData, ItemId, MenuAction, MenuEntry, MenuPayload, SkillData, SkillId,
    SkillTypeId, Term,
};
