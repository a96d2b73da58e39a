//! Command implementations for the CLI
//!
//! Each handler performs at most one store transaction (or one process
//! spawn), prints its outcome, and returns `Ok` — store and execution
//! errors are reported to the user without changing the process exit code.

use crate::{
    cli::{Args, Command},
    core::{AliasStore, Executor},
    error::AliasError,
};
use clap::CommandFactory;
use tracing::instrument;

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(store, command))]
pub fn execute_command(store: &AliasStore, command: &Option<Command>) -> anyhow::Result<()> {
    match command {
        Some(Command::Save { alias, command }) => save_command(store, alias, command),
        Some(Command::List) => list_commands(store),
        Some(Command::Edit { alias, command }) => edit_command(store, alias, command),
        Some(Command::Run { alias, args }) => run_command(store, alias, args),
        Some(Command::External(argv)) => match argv.split_first() {
            Some((alias, rest)) => run_command(store, alias, rest),
            None => print_help(),
        },
        None => print_help(),
    }
}

/// Store a command template under an alias, overwriting any previous entry
#[instrument(skip(store, words))]
fn save_command(store: &AliasStore, alias: &str, words: &[String]) -> anyhow::Result<()> {
    let template = words.join(" ");
    match store.put(alias, &template) {
        Ok(()) => println!("Command saved with alias: {alias}"),
        Err(err) => println!("Error saving command: {err}"),
    }
    Ok(())
}

/// Print every stored alias and its template, one per line
#[instrument(skip(store))]
fn list_commands(store: &AliasStore) -> anyhow::Result<()> {
    if let Err(err) = store.for_each(|alias, template| println!("{alias}: {template}")) {
        println!("Error listing commands: {err}");
    }
    Ok(())
}

/// Overwrite an existing alias; fails if the alias was never saved
#[instrument(skip(store, words))]
fn edit_command(store: &AliasStore, alias: &str, words: &[String]) -> anyhow::Result<()> {
    let template = words.join(" ");
    let result = store.exists(alias).and_then(|found| {
        if !found {
            return Err(AliasError::alias_not_found(alias));
        }
        store.put(alias, &template)
    });
    match result {
        Ok(()) => println!("Command updated for alias: {alias}"),
        Err(err) => println!("Error editing command: {err}"),
    }
    Ok(())
}

/// Resolve an alias and run it, forwarding stdout/stderr to the terminal
#[instrument(skip(store, args))]
fn run_command(store: &AliasStore, alias: &str, args: &[String]) -> anyhow::Result<()> {
    let executor = Executor::new(store);
    match executor.execute(alias, args) {
        Ok(()) => {}
        Err(err @ (AliasError::AliasNotFound { .. } | AliasError::StorageTx { .. })) => {
            println!("Error retrieving command: {err}");
        }
        Err(AliasError::EmptyCommand) => println!("Empty command"),
        Err(err) => println!("Error executing command: {err}"),
    }
    Ok(())
}

fn print_help() -> anyhow::Result<()> {
    Args::command().print_help()?;
    Ok(())
}
