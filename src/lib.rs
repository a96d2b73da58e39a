//! # cmdex
//!
//! A CLI tool to store and execute custom commands using short, memorable
//! aliases. Templates may contain positional placeholders (`$1`, `$2`, ...)
//! that are filled in from the arguments supplied at run time.
//!
//! ## Example
//!
//! ```no_run
//! use cmdex::core::{AliasStore, Executor};
//!
//! let store = AliasStore::open("cmdex.db")?;
//! store.put("st", "git status")?;
//!
//! let executor = Executor::new(&store);
//! executor.execute("st", &[])?;
//! # Ok::<(), cmdex::error::AliasError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
