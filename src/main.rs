//! nerdgraph-sync CLI
//!
//! Command-line interface for fetching authentication domains and groups

use clap::Parser;
use nerdgraph_sync::cli::{Cli, Runner};
use tracing::info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(cli.log_filter())
        .init();

    info!("********** Starting nerdgraph-sync **********");

    let runner = Runner::new(cli);
    let result = runner.run().await;

    info!("********** Ending nerdgraph-sync **********");

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
