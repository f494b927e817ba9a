//! Error types for battlemenu.
//!
//! Library crates use [`BattleMenuError`] via `thiserror`.
//! App crates (cli/tui) wrap this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

use crate::types::{ActorId, ClassId};

/// Top-level error type for all battlemenu operations.
#[derive(Debug, thiserror::Error)]
pub enum BattleMenuError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Malformed or unreadable game data file.
    #[error("data error: {message}")]
    Data { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Referenced actor does not exist in the database.
    #[error("unknown actor id {id}")]
    UnknownActor { id: ActorId },

    /// Referenced class does not exist in the database.
    #[error("unknown class id {id}")]
    UnknownClass { id: ClassId },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BattleMenuError>;

impl BattleMenuError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a data error from any displayable message.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = BattleMenuError::config("missing [commands] section");
        assert_eq!(err.to_string(), "config error: missing [commands] section");

        let err = BattleMenuError::UnknownActor { id: 42 };
        assert!(err.to_string().contains("42"));
    }
}
