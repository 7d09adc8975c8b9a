//! # nerdgraph-sync
//!
//! Paginated extraction of authentication domains and their groups from the
//! NerdGraph user-management API.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nerdgraph_sync::{ClientSettings, Fetcher, NerdGraphClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let settings = ClientSettings::default().merge_env()?;
//!     let fetcher = Fetcher::new(NerdGraphClient::new(&settings)?);
//!
//!     let domains = fetcher.fetch_auth_domains().await?;
//!     let ids: Vec<String> = domains.iter().map(|d| d.id.clone()).collect();
//!     let groups = fetcher.fetch_groups(ids).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                    Fetcher (pagination)                   │
//! │   fetch_all(kind, parents) → Vec<Record>                  │
//! └───────────────────────────────────────────────────────────┘
//!                  │                            │
//! ┌────────────────┴───────────┐   ┌────────────┴──────────────┐
//! │   FetchKind (kinds)        │   │   QueryExecutor           │
//! ├─────────────┬──────────────┤   ├───────────────────────────┤
//! │ QueryBuilder│ResponseExtr. │   │ NerdGraphClient (http)    │
//! │ templates   │ cursor       │   │ POST query + variables    │
//! │ variables   │ records      │   │ API-Key header            │
//! └─────────────┴──────────────┘   └───────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Query execution capability
pub mod executor;

/// GraphQL query builders
pub mod query;

/// Response extraction
pub mod extract;

/// Authentication domain and group fetch kinds
pub mod kinds;

/// Pagination driver
pub mod pagination;

/// HTTP transport
pub mod http;

/// Domain and group workflow
pub mod workflow;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{ClientSettings, Region};
pub use error::{Error, Result};
pub use executor::QueryExecutor;
pub use http::NerdGraphClient;
pub use kinds::{AuthDomainsQuery, GroupsQuery};
pub use pagination::{Fetcher, FetcherBuilder};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
