//! Fetch kinds
//!
//! Supports: authentication domains, groups per authentication domain
//!
//! Each kind pairs a [`QueryBuilder`](crate::query::QueryBuilder) with a
//! [`ResponseExtractor`](crate::extract::ResponseExtractor) and plugs into
//! the pagination driver as a [`FetchKind`](crate::pagination::FetchKind).

mod auth_domains;
mod groups;

pub use auth_domains::AuthDomainsQuery;
pub use groups::{GroupsQuery, AUTH_DOMAIN_ID_VAR};
