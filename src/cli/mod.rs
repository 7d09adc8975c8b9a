//! CLI module
//!
//! Command-line interface for fetching identity data.
//!
//! # Commands
//!
//! - `domains` - List all authentication domains
//! - `groups` - List the groups of given authentication domains
//! - `workflow` - List all domains, then the groups of every domain

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
