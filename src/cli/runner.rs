//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ClientSettings;
use crate::error::Result;
use crate::http::NerdGraphClient;
use crate::pagination::Fetcher;
use crate::workflow::run_auth_domain_workflow;
use serde::Serialize;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let fetcher = self.build_fetcher()?;

        let output = match &self.cli.command {
            Commands::Domains => self.render(&fetcher.fetch_auth_domains().await?)?,
            Commands::Groups { domain_ids } => {
                self.render(&fetcher.fetch_groups(domain_ids.clone()).await?)?
            }
            Commands::Workflow => self.render(&run_auth_domain_workflow(&fetcher).await?)?,
        };

        println!("{output}");
        Ok(())
    }

    /// Resolve client settings from the settings file and environment
    fn settings(&self) -> Result<ClientSettings> {
        self.file_settings()?.merge_env()
    }

    /// Settings from the `--config` file, or defaults without one
    fn file_settings(&self) -> Result<ClientSettings> {
        match &self.cli.config {
            Some(path) => {
                info!("Loading client settings from {}", path.display());
                ClientSettings::load(path)
            }
            None => Ok(ClientSettings::default()),
        }
    }

    /// Build a fetcher over the NerdGraph transport
    fn build_fetcher(&self) -> Result<Fetcher> {
        let client = NerdGraphClient::new(&self.settings()?)?;
        info!("Using NerdGraph endpoint {}", client.endpoint());
        Fetcher::builder().executor(client).build()
    }

    /// Serialize output in the selected format
    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ENV_API_KEY, ENV_ENDPOINT};
    use crate::types::Record;
    use clap::Parser;
    use std::io::Write;

    fn runner(args: &[&str]) -> Runner {
        Runner::new(Cli::parse_from(args))
    }

    #[test]
    fn test_render_formats() {
        let records = vec![Record::new("1", "Default")];

        let compact = runner(&["nerdgraph-sync", "domains"]).render(&records).unwrap();
        assert_eq!(compact, r#"[{"id":"1","name":"Default"}]"#);

        let pretty = runner(&["nerdgraph-sync", "-f", "pretty", "domains"])
            .render(&records)
            .unwrap();
        assert!(pretty.contains("\n  {"));
    }

    #[test]
    fn test_settings_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key: from-file\nendpoint: http://localhost:1/graphql").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let runner = runner(&["nerdgraph-sync", "-C", &path, "domains"]);

        let settings = runner.file_settings().unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("from-file"));
        assert_eq!(settings.endpoint.as_deref(), Some("http://localhost:1/graphql"));

        let settings = runner
            .file_settings()
            .and_then(|s| {
                s.merge_vars(|name| (name == ENV_ENDPOINT).then(|| "http://env:2/graphql".to_string()))
            })
            .unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("from-file"));
        assert_eq!(settings.endpoint.as_deref(), Some("http://env:2/graphql"));
    }

    #[test]
    fn test_settings_without_file() {
        let settings = runner(&["nerdgraph-sync", "domains"])
            .file_settings()
            .and_then(|s| s.merge_vars(|name| (name == ENV_API_KEY).then(|| "from-env".to_string())))
            .unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("from-env"));
        assert!(settings.endpoint.is_none());
    }

    #[test]
    fn test_missing_settings_file() {
        let result = runner(&["nerdgraph-sync", "-C", "/nonexistent.yaml", "domains"])
            .file_settings();
        assert!(result.is_err());
    }
}
