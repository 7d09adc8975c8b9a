//! Common types used throughout nerdgraph-sync
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// GraphQL variables sent alongside a query
pub type Variables = JsonObject;

/// Opaque authentication domain identifier
pub type Identifier = String;

/// Opaque pagination continuation token
pub type Cursor = String;

// ============================================================================
// Record
// ============================================================================

/// Flattened output unit for both authentication domains and groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
}

impl Record {
    /// Create a new record
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// ============================================================================
// Parents
// ============================================================================

/// Parent identifiers for a scoped fetch.
///
/// Callers may hand over one identifier or a list; both are normalized
/// into the same ordered sequence by [`Parents::into_ids`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parents {
    /// A single identifier
    Single(Identifier),
    /// An ordered list of identifiers
    List(Vec<Identifier>),
}

impl Parents {
    /// Normalize into an ordered identifier sequence
    pub fn into_ids(self) -> Vec<Identifier> {
        match self {
            Self::Single(id) => vec![id],
            Self::List(ids) => ids,
        }
    }

    /// Borrowing variant of [`Parents::into_ids`]
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Self::Single(id) => vec![id.as_str()],
            Self::List(ids) => ids.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for Parents {
    fn from(id: &str) -> Self {
        Self::Single(id.to_string())
    }
}

impl From<String> for Parents {
    fn from(id: String) -> Self {
        Self::Single(id)
    }
}

impl From<Vec<String>> for Parents {
    fn from(ids: Vec<String>) -> Self {
        Self::List(ids)
    }
}

impl From<Vec<&str>> for Parents {
    fn from(ids: Vec<&str>) -> Self {
        Self::List(ids.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Parents {
    fn from(ids: &[&str]) -> Self {
        Self::List(ids.iter().map(|id| (*id).to_string()).collect())
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_parent_normalizes_to_one_element() {
        let parents = Parents::from("abc");
        assert_eq!(parents.ids(), vec!["abc"]);
        assert_eq!(parents.into_ids(), vec!["abc".to_string()]);
    }

    #[test]
    fn test_parent_list_keeps_order() {
        let parents = Parents::from(vec!["b", "a", "c"]);
        assert_eq!(parents.ids(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_record_serde() {
        let record = Record::new("1", "Admins");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"id": "1", "name": "Admins"}));
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("test".to_string()).none_if_empty(),
            Some("test".to_string())
        );
        assert_eq!(Some(String::new()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
    }
}
