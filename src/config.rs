//! Client configuration
//!
//! Settings for reaching the NerdGraph API, loaded from a YAML or JSON
//! file and overridden by environment variables.

use crate::error::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Environment variable holding the user API key
pub const ENV_API_KEY: &str = "NEW_RELIC_API_KEY";
/// Environment variable selecting the region
pub const ENV_REGION: &str = "NEW_RELIC_REGION";
/// Environment variable overriding the endpoint URL
pub const ENV_ENDPOINT: &str = "NEW_RELIC_ENDPOINT";

// ============================================================================
// Region
// ============================================================================

/// NerdGraph data center region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// United States
    #[default]
    Us,
    /// European Union
    Eu,
}

impl Region {
    /// GraphQL endpoint for this region
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Us => "https://api.newrelic.com/graphql",
            Self::Eu => "https://api.eu.newrelic.com/graphql",
        }
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "us" => Ok(Self::Us),
            "eu" => Ok(Self::Eu),
            other => Err(Error::invalid_value(
                "region",
                format!("unknown region '{other}', expected 'us' or 'eu'"),
            )),
        }
    }
}

// ============================================================================
// Client Settings
// ============================================================================

/// Settings for the NerdGraph transport
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientSettings {
    /// User API key sent in the `API-Key` header
    #[serde(default)]
    pub api_key: Option<String>,

    /// Region used to pick the default endpoint
    #[serde(default)]
    pub region: Region,

    /// Explicit endpoint, overriding the region default
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("nerdgraph-sync/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            region: Region::default(),
            endpoint: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientSettings {
    /// Load settings from a YAML or JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Parse settings from YAML (JSON is accepted as a YAML subset)
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Override fields with values from the process environment
    pub fn merge_env(self) -> Result<Self> {
        self.merge_vars(|name| std::env::var(name).ok())
    }

    /// Override fields with values from `lookup`, keyed by variable name
    pub fn merge_vars<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY).filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(region) = lookup(ENV_REGION).filter(|r| !r.is_empty()) {
            self.region = region.parse()?;
        }
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|e| !e.is_empty()) {
            self.endpoint = Some(endpoint);
        }
        Ok(self)
    }

    /// Check that the settings can build a working client
    pub fn validate(&self) -> Result<()> {
        if self.api_key.as_deref().map_or(true, str::is_empty) {
            return Err(Error::missing_field("api_key"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be greater than 0"));
        }
        self.endpoint_url()?;
        Ok(())
    }

    /// Resolve the endpoint, validating it as a URL
    pub fn endpoint_url(&self) -> Result<String> {
        let endpoint = self
            .endpoint
            .as_deref()
            .unwrap_or_else(|| self.region.endpoint());
        let url = Url::parse(endpoint)?;
        match url.scheme() {
            "http" | "https" => Ok(url.to_string()),
            scheme => Err(Error::invalid_value(
                "endpoint",
                format!("unsupported scheme '{scheme}'"),
            )),
        }
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = ClientSettings::default();
        assert_eq!(settings.region, Region::Us);
        assert_eq!(settings.timeout_secs, 30);
        assert!(settings.api_key.is_none());
        assert_eq!(
            settings.endpoint_url().unwrap(),
            "https://api.newrelic.com/graphql"
        );
    }

    #[test]
    fn test_region_parse() {
        assert_eq!("EU".parse::<Region>().unwrap(), Region::Eu);
        assert_eq!(" us ".parse::<Region>().unwrap(), Region::Us);
        assert!("apac".parse::<Region>().is_err());
        assert_eq!(Region::Eu.endpoint(), "https://api.eu.newrelic.com/graphql");
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key: NRAK-TEST\nregion: eu\ntimeout_secs: 5").unwrap();

        let settings = ClientSettings::load(file.path()).unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("NRAK-TEST"));
        assert_eq!(settings.region, Region::Eu);
        assert_eq!(settings.timeout(), Duration::from_secs(5));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"api_key": "k", "endpoint": "http://localhost:9000/graphql"}}"#
        )
        .unwrap();

        let settings = ClientSettings::load(file.path()).unwrap();
        assert_eq!(
            settings.endpoint_url().unwrap(),
            "http://localhost:9000/graphql"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = ClientSettings::load("/nonexistent/settings.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_merge_vars_overrides_file_values() {
        let settings = ClientSettings::from_yaml_str("api_key: from-file\nregion: us")
            .unwrap()
            .merge_vars(vars(&[(ENV_API_KEY, "from-env"), (ENV_REGION, "eu")]))
            .unwrap();

        assert_eq!(settings.api_key.as_deref(), Some("from-env"));
        assert_eq!(settings.region, Region::Eu);
    }

    #[test]
    fn test_merge_vars_ignores_empty_values() {
        let settings = ClientSettings::from_yaml_str("api_key: from-file")
            .unwrap()
            .merge_vars(vars(&[(ENV_API_KEY, ""), (ENV_ENDPOINT, "")]))
            .unwrap();

        assert_eq!(settings.api_key.as_deref(), Some("from-file"));
        assert!(settings.endpoint.is_none());
    }

    #[test]
    fn test_merge_vars_rejects_bad_region() {
        let err = ClientSettings::default()
            .merge_vars(vars(&[(ENV_REGION, "mars")]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_validate() {
        let settings = ClientSettings::default();
        assert_eq!(
            settings.validate().unwrap_err().to_string(),
            "Missing required config field: api_key"
        );

        let settings = ClientSettings {
            api_key: Some("key".to_string()),
            endpoint: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate().unwrap_err(),
            Error::InvalidUrl(_)
        ));

        let settings = ClientSettings {
            api_key: Some("key".to_string()),
            endpoint: Some("ftp://example.com/graphql".to_string()),
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = ClientSettings {
            api_key: Some("key".to_string()),
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_debug_masks_api_key() {
        let settings = ClientSettings {
            api_key: Some("NRAK-SECRET".to_string()),
            ..Default::default()
        };
        let debug = format!("{settings:?}");
        assert!(!debug.contains("NRAK-SECRET"));
        assert!(debug.contains("***"));
    }
}
