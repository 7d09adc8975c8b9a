//! Pagination module
//!
//! Drives a fetch kind across a full result set.
//!
//! # Overview
//!
//! The [`Fetcher`] runs one cursor loop per scope: a single loop for
//! unscoped kinds such as authentication domains, one loop per parent
//! identifier for groups. A failed page stops only its own scope; records
//! from earlier pages and from other scopes are kept.

mod driver;
mod logger;
mod types;

pub use driver::{Fetcher, FetcherBuilder};
pub use logger::{FetchLogger, LogLevel, NoopLogger, TracingLogger};
pub use types::{
    FetchKind, FetchReport, FetchState, FetchStats, PageFailure, PageOutcome, ParentScope,
};
