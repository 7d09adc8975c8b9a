//! Response extraction module
//!
//! Pulls the continuation cursor and the page's records out of a raw
//! GraphQL response.
//!
//! # Overview
//!
//! The two halves fail differently. Cursor lookup never errors: any missing
//! or mistyped step reads as "no more pages". Record extraction errors with
//! [`Error::MalformedBody`](crate::Error::MalformedBody) when the expected
//! container is absent, because an empty body on a page that should carry
//! records is a contract break, not the end of the data.

mod path;
mod types;

pub use path::{lookup, require_array, scalar_field, string_at};
pub use types::ResponseExtractor;
