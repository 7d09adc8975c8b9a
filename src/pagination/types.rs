//! Pagination types and traits
//!
//! Defines the fetch-kind strategy and the per-page and per-scope states
//! the driver moves through.

use crate::error::Error;
use crate::extract::ResponseExtractor;
use crate::query::QueryBuilder;
use crate::types::{Cursor, Record};

/// Whether a fetch kind paginates once overall or once per parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentScope {
    /// One page sequence, no parent identifiers accepted
    Unscoped,
    /// One page sequence per parent identifier
    PerParent,
}

/// A query-builder and response-extractor pair for one kind of record
pub trait FetchKind: QueryBuilder + ResponseExtractor {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// How parent identifiers are handled
    fn parent_scope(&self) -> ParentScope;

    /// Which entry of a page carries the cursor
    fn page_scope_index(&self) -> usize {
        0
    }
}

/// State of a single scope's pagination loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    /// Nothing requested yet
    Start,
    /// Requesting the page addressed by this cursor (`None` on the first page)
    Fetching(Option<Cursor>),
    /// All pages retrieved
    Done,
    /// Stopped on a failed page
    Failed,
}

impl FetchState {
    /// Check if the loop has finished, successfully or not
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

/// Why a page could not be used
#[derive(Debug)]
pub enum PageFailure {
    /// The executor returned an error
    Execution(Error),
    /// The response did not carry the expected record container
    MalformedBody(Error),
}

impl PageFailure {
    /// Classify an extraction error
    pub fn from_extraction(error: Error) -> Self {
        if error.is_malformed_body() {
            Self::MalformedBody(error)
        } else {
            Self::Execution(error)
        }
    }

    /// The underlying error
    pub fn error(&self) -> &Error {
        match self {
            Self::Execution(e) | Self::MalformedBody(e) => e,
        }
    }
}

/// Result of requesting and processing one page
#[derive(Debug)]
pub enum PageOutcome {
    /// Page processed
    Page {
        /// Records flattened from this page
        records: Vec<Record>,
        /// Cursor for the following page, if any
        next_cursor: Option<Cursor>,
    },
    /// Page failed; the scope stops here
    Failed(PageFailure),
}

/// Statistics from a fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchStats {
    /// Total records accumulated
    pub records: usize,
    /// Pages successfully processed
    pub pages: usize,
    /// Scopes that ran to completion
    pub scopes_completed: usize,
    /// Scopes stopped by a failed page
    pub scopes_failed: usize,
}

impl FetchStats {
    /// Add a processed page
    pub fn add_page(&mut self, records: usize) {
        self.pages += 1;
        self.records += records;
    }

    /// Record how a scope ended
    pub fn finish_scope(&mut self, state: &FetchState) {
        match state {
            FetchState::Failed => self.scopes_failed += 1,
            _ => self.scopes_completed += 1,
        }
    }

    /// Merge another scope's stats into this one
    pub fn merge(&mut self, other: &FetchStats) {
        self.records += other.records;
        self.pages += other.pages;
        self.scopes_completed += other.scopes_completed;
        self.scopes_failed += other.scopes_failed;
    }
}

/// Records and statistics from one `fetch_all` call
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    /// Concatenated records in scope order, then page order
    pub records: Vec<Record>,
    /// Aggregate statistics
    pub stats: FetchStats,
}
