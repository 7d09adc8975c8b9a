//! Query builder trait and variable helpers

use crate::types::{Parents, Variables};
use serde_json::Value;

/// Variable name used for the pagination cursor in every template
pub const CURSOR_VAR: &str = "cursor";

/// Builds the query text and variables for one page request
pub trait QueryBuilder: Send + Sync {
    /// Select the query template.
    ///
    /// `with_cursor` picks the template that declares `$cursor`; it is the
    /// only thing that varies between the two.
    fn build_query(&self, with_cursor: bool) -> &'static str;

    /// Build the variable mapping for a page.
    ///
    /// The cursor key is present only when `cursor` is non-empty.
    fn build_variables(&self, parents: Option<&Parents>, cursor: Option<&str>) -> Variables;
}

/// Insert the cursor variable when a non-empty cursor is present
pub fn insert_cursor(variables: &mut Variables, cursor: Option<&str>) {
    if let Some(cursor) = cursor.filter(|c| !c.is_empty()) {
        variables.insert(CURSOR_VAR.to_string(), Value::String(cursor.to_string()));
    }
}

/// Render parents as a JSON array of identifiers, passed through verbatim
pub fn identifier_array(parents: &Parents) -> Value {
    Value::Array(
        parents
            .ids()
            .into_iter()
            .map(|id| Value::String(id.to_string()))
            .collect(),
    )
}
