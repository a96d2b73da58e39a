//! Configuration for the alias manager
//!
//! Centralizes the store location and logging options derived from the
//! command line.

use crate::{cli::Args, error::AliasError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Path to the alias store database, relative to the working directory
    /// unless given as an absolute path
    pub store_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            store_path: PathBuf::from("cmdex.db"),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, AliasError> {
        let mut config = Self {
            debug: args.debug,
            ..Self::default()
        };

        if let Some(store) = &args.store {
            config.store_path = store.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), AliasError> {
        if self.store_path.as_os_str().is_empty() {
            return Err(AliasError::config("store path must not be empty"));
        }

        if let Some(parent) = self.store_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            return Err(AliasError::config(format!(
                "store directory not found: {}",
                parent.display()
            )));
        }

        Ok(())
    }
}
