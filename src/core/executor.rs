//! Alias resolution and execution
//!
//! Turns an alias plus call-time arguments into a spawned child process:
//! look up the template, substitute positional placeholders, tokenize, and
//! run the result with stdout/stderr connected to the current process.

use crate::core::store::AliasStore;
use crate::error::{AliasError, Result};
use std::process::{Command, Stdio};
use tracing::debug;

/// A resolved command line, ready to spawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Program name (first whitespace-delimited token)
    pub program: String,
    /// Remaining tokens, passed as the argument vector
    pub args: Vec<String>,
}

impl CommandLine {
    fn display(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Replace positional placeholders in a template with call-time arguments.
///
/// Every literal occurrence of `$1` is replaced by `args[0]`, `$2` by
/// `args[1]`, and so on, in ascending index order. Replacement is plain
/// textual substitution with no quote-awareness or escaping; placeholders
/// with no matching argument are left untouched. Because passes run in
/// ascending order, an argument value that itself contains a higher-numbered
/// `$N` token gets substituted by that later pass. The original tool behaves
/// this way and callers depend on the resolved text being identical.
pub fn substitute(template: &str, args: &[String]) -> String {
    let mut command = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        let placeholder = format!("${}", i + 1);
        command = command.replace(&placeholder, arg);
    }
    command
}

/// Resolves aliases against a store and spawns the result
#[derive(Debug)]
pub struct Executor<'a> {
    store: &'a AliasStore,
}

impl<'a> Executor<'a> {
    /// Create an executor borrowing the given store
    pub fn new(store: &'a AliasStore) -> Self {
        Self { store }
    }

    /// Resolve an alias and arguments into a concrete command line.
    ///
    /// Fails with [`AliasError::AliasNotFound`] if the alias is absent and
    /// [`AliasError::EmptyCommand`] if the substituted template tokenizes to
    /// nothing. Tokenization splits on whitespace with no quoting semantics,
    /// so a field with embedded spaces cannot be expressed.
    pub fn resolve(&self, alias: &str, args: &[String]) -> Result<CommandLine> {
        let template = self
            .store
            .get(alias)?
            .ok_or_else(|| AliasError::alias_not_found(alias))?;

        let command = substitute(&template, args);
        let mut tokens = command.split_whitespace().map(str::to_string);

        let Some(program) = tokens.next() else {
            return Err(AliasError::EmptyCommand);
        };

        Ok(CommandLine {
            program,
            args: tokens.collect(),
        })
    }

    /// Resolve an alias and run it, waiting for the child to finish.
    ///
    /// The child inherits this process's stdout and stderr; nothing is
    /// captured or buffered. Spawn failure and abnormal child termination
    /// both surface as [`AliasError::Spawn`] for the caller to report.
    pub fn execute(&self, alias: &str, args: &[String]) -> Result<()> {
        let command_line = self.resolve(alias, args)?;
        let cmd_str = command_line.display();

        debug!("Running command: {}", cmd_str);

        let status = Command::new(&command_line.program)
            .args(&command_line.args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| AliasError::spawn(cmd_str.clone(), None, Some(e)))?;

        if !status.success() {
            return Err(AliasError::spawn(cmd_str, status.code(), None));
        }

        debug!("Command completed successfully");
        Ok(())
    }
}
