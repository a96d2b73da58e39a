use anyhow::{Context, Result};
use cmdex::{cli, config::Config, core::AliasStore, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // Initialize configuration
    let config = Config::from_args(&args)?;

    // Open the alias store; this is the only fatal error path
    let store = AliasStore::open(&config.store_path).with_context(|| {
        format!("Failed to open alias store at {}", config.store_path.display())
    })?;

    // Execute the appropriate command
    cli::execute_command(&store, &args.command)
}
