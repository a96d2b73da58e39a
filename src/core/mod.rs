//! Core functionality for the alias manager
//!
//! Contains the durable alias store and the resolver/executor that turns a
//! stored template plus arguments into a spawned process.

pub mod executor;
pub mod store;

pub use executor::{CommandLine, Executor, substitute};
pub use store::AliasStore;
