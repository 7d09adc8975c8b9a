//! Query execution capability
//!
//! The pagination driver depends only on this narrow request/response
//! contract. [`NerdGraphClient`](crate::http::NerdGraphClient) is the
//! HTTP implementation; tests plug in scripted executors.

use crate::error::Result;
use crate::types::{JsonValue, Variables};
use async_trait::async_trait;
use std::sync::Arc;

/// Executes a GraphQL query and returns the raw response body
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Execute `query` with `variables`.
    ///
    /// Returns the full response (including the top-level `data` key) or an
    /// error on transport or protocol failure.
    async fn execute_query(&self, query: &str, variables: &Variables) -> Result<JsonValue>;
}

#[async_trait]
impl<T: QueryExecutor + ?Sized> QueryExecutor for Arc<T> {
    async fn execute_query(&self, query: &str, variables: &Variables) -> Result<JsonValue> {
        (**self).execute_query(query, variables).await
    }
}
