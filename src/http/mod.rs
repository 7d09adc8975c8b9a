//! HTTP transport module
//!
//! Provides the GraphQL transport the pagination driver runs against.
//!
//! # Features
//!
//! - **JSON POST**: Fixed headers, user agent, and a request timeout
//! - **Error Classification**: Non-2xx statuses and timeouts map to typed errors
//! - **GraphQL Envelope**: `errors` arrays are surfaced as [`Error::GraphQl`](crate::Error::GraphQl)

mod client;
mod graphql;

pub use client::{HttpClient, HttpClientConfig};
pub use graphql::{GraphQlError, NerdGraphClient, API_KEY_HEADER};

#[cfg(test)]
mod tests;
