//! NerdGraph transport
//!
//! Posts `{"query", "variables"}` to the NerdGraph endpoint and hands back
//! the raw response body.

use super::client::{HttpClient, HttpClientConfig};
use crate::config::ClientSettings;
use crate::error::{Error, Result};
use crate::executor::QueryExecutor;
use crate::types::{JsonValue, Variables};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

/// Header carrying the user API key
pub const API_KEY_HEADER: &str = "API-Key";

/// One entry of a GraphQL `errors` array
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    /// Error message
    pub message: String,
    /// Response path the error applies to
    #[serde(default)]
    pub path: Option<Vec<Value>>,
}

/// GraphQL client for the NerdGraph API
#[derive(Debug)]
pub struct NerdGraphClient {
    http: HttpClient,
    endpoint: String,
}

impl NerdGraphClient {
    /// Create a client from resolved settings
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        settings.validate()?;
        let endpoint = settings.endpoint_url()?;

        let config = HttpClientConfig::builder()
            .timeout(settings.timeout())
            .user_agent(settings.user_agent.clone())
            .header(API_KEY_HEADER, settings.api_key.clone().unwrap_or_default())
            .build();

        Ok(Self {
            http: HttpClient::with_config(config)?,
            endpoint,
        })
    }

    /// The GraphQL endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl QueryExecutor for NerdGraphClient {
    async fn execute_query(&self, query: &str, variables: &Variables) -> Result<JsonValue> {
        let body = json!({
            "query": query,
            "variables": variables,
        });
        let response: Value = self.http.post_json(&self.endpoint, &body).await?;
        check_graphql_errors(response)
    }
}

/// Fail on a GraphQL error envelope that carries no data.
///
/// Errors alongside data are logged and the body is returned as is.
fn check_graphql_errors(response: Value) -> Result<Value> {
    let errors: Vec<GraphQlError> = match response.get("errors") {
        Some(errors @ Value::Array(_)) => serde_json::from_value(errors.clone())?,
        _ => return Ok(response),
    };
    if errors.is_empty() {
        return Ok(response);
    }

    let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
    let has_data = response.get("data").is_some_and(|data| !data.is_null());
    if !has_data {
        return Err(Error::GraphQl { messages });
    }

    warn!("GraphQL response carried partial errors: {}", messages.join("; "));
    Ok(response)
}
