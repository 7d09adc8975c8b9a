//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// NerdGraph identity extraction CLI
#[derive(Parser, Debug)]
#[command(name = "nerdgraph-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client settings file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter from `RUST_LOG`, falling back to `info` (`debug` with `--verbose`)
    pub fn log_filter(&self) -> EnvFilter {
        self.log_filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
    }

    fn log_filter_from(&self, directives: Option<&str>) -> EnvFilter {
        directives
            .filter(|d| !d.trim().is_empty())
            .and_then(|d| EnvFilter::try_new(d).ok())
            .unwrap_or_else(|| EnvFilter::new(if self.verbose { "debug" } else { "info" }))
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all authentication domains
    Domains,

    /// List the groups of the given authentication domains
    Groups {
        /// Authentication domain id (repeatable)
        #[arg(long = "domain-id", required = true, num_args = 1..)]
        domain_ids: Vec<String>,
    },

    /// List all authentication domains and the groups of each
    Workflow,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
}
