//! Response extractor trait

use crate::error::Result;
use crate::types::{Cursor, JsonValue, Record};

/// Extracts pagination state and records from a raw response
pub trait ResponseExtractor: Send + Sync {
    /// Read the next cursor for the entry at `page_scope_index`.
    ///
    /// Returns `None` for any missing, mistyped, or out-of-range step.
    fn extract_cursor(&self, response: &JsonValue, page_scope_index: usize) -> Option<Cursor>;

    /// Whether the response points at another page
    fn has_next_page(&self, response: &JsonValue, page_scope_index: usize) -> bool {
        self.extract_cursor(response, page_scope_index)
            .is_some_and(|cursor| !cursor.is_empty())
    }

    /// Flatten every entry of the page into records
    fn format_results(&self, response: &JsonValue) -> Result<Vec<Record>>;
}
