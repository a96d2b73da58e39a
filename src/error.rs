//! Error types for the alias manager
//!
//! Provides structured error handling with one variant per failure kind so
//! callers can match on the kind instead of string-matching printed output.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the alias manager
#[derive(Error, Debug)]
pub enum AliasError {
    /// The store file could not be opened or created (fatal at startup)
    #[error("failed to open alias store at {path}")]
    StorageOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A storage transaction failed after the store was opened
    #[error("storage error during {operation}")]
    StorageTx {
        operation: String,
        #[source]
        source: rusqlite::Error,
    },

    /// No template is stored under the requested alias
    #[error("alias not found")]
    AliasNotFound { alias: String },

    /// The template was empty or all-whitespace after substitution
    #[error("empty command")]
    EmptyCommand,

    /// The child process failed to spawn or terminated abnormally
    #[error("command `{command}` failed")]
    Spawn {
        command: String,
        exit_code: Option<i32>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl AliasError {
    /// Create a new store-open error
    pub fn storage_open<P: Into<PathBuf>>(path: P, source: rusqlite::Error) -> Self {
        Self::StorageOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a new storage transaction error
    pub fn storage_tx(operation: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::StorageTx {
            operation: operation.into(),
            source,
        }
    }

    /// Create a new alias-not-found error
    pub fn alias_not_found(alias: impl Into<String>) -> Self {
        Self::AliasNotFound {
            alias: alias.into(),
        }
    }

    /// Create a new spawn error
    pub fn spawn(
        command: impl Into<String>,
        exit_code: Option<i32>,
        source: Option<std::io::Error>,
    ) -> Self {
        Self::Spawn {
            command: command.into(),
            exit_code,
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AliasError>;
