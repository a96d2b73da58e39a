//! Command-line argument parsing and validation

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cmdex - store and execute custom commands under short aliases
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "cmdex")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to the alias store database
    #[arg(long, global = true, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Subcommand to execute; a bare alias is treated as `run <alias>`
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save a command set with an alias
    Save {
        /// Alias to store the command under
        alias: String,

        /// Command words, joined with single spaces before storing
        #[arg(required = true, num_args = 1.., value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// List all saved aliases and their associated commands
    List,

    /// Edit an existing command set
    Edit {
        /// Alias to overwrite; must already exist
        alias: String,

        /// Replacement command words
        #[arg(required = true, num_args = 1.., value_name = "NEW_COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Run a saved command set
    Run {
        /// Alias to execute
        alias: String,

        /// Arguments substituted for $1, $2, ... in the stored template
        #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    // Bare invocation: `cmdex <alias> [args...]` behaves like `run`
    #[command(external_subcommand)]
    External(Vec<String>),
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
