//! Query builder module
//!
//! Produces GraphQL query text and its variable mapping for a page state.
//!
//! # Overview
//!
//! Each fetch kind carries two fixed templates that differ only in whether
//! a `$cursor` variable is declared and passed to the paginated field.
//! Variables never carry a null cursor: the key is left out entirely on
//! the first page.

mod types;

pub use types::{identifier_array, insert_cursor, QueryBuilder, CURSOR_VAR};
