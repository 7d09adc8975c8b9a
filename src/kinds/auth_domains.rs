//! Authentication domains
//!
//! Paginates over the organization's authentication domain collection.
//! The cursor sits beside the domain list, not inside an entry.

use crate::error::Result;
use crate::extract::{require_array, scalar_field, string_at, ResponseExtractor};
use crate::pagination::{FetchKind, ParentScope};
use crate::query::{insert_cursor, QueryBuilder};
use crate::types::{Cursor, JsonValue, Parents, Record, Variables};

const QUERY: &str = r"
query GetAuthenticationDomains {
  actor {
    organization {
      authorizationManagement {
        authenticationDomains {
          authenticationDomains {
            id
            name
          }
          nextCursor
        }
      }
    }
  }
}
";

const QUERY_WITH_CURSOR: &str = r"
query GetAuthenticationDomains($cursor: String) {
  actor {
    organization {
      authorizationManagement {
        authenticationDomains(cursor: $cursor) {
          authenticationDomains {
            id
            name
          }
          nextCursor
        }
      }
    }
  }
}
";

const CURSOR_PATH: [&str; 6] = [
    "data",
    "actor",
    "organization",
    "authorizationManagement",
    "authenticationDomains",
    "nextCursor",
];

const ENTRIES_PATH: [&str; 6] = [
    "data",
    "actor",
    "organization",
    "authorizationManagement",
    "authenticationDomains",
    "authenticationDomains",
];

/// Fetches every authentication domain in the organization
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthDomainsQuery;

impl AuthDomainsQuery {
    /// Create the fetch kind
    pub fn new() -> Self {
        Self
    }
}

impl QueryBuilder for AuthDomainsQuery {
    fn build_query(&self, with_cursor: bool) -> &'static str {
        if with_cursor {
            QUERY_WITH_CURSOR
        } else {
            QUERY
        }
    }

    fn build_variables(&self, _parents: Option<&Parents>, cursor: Option<&str>) -> Variables {
        let mut variables = Variables::new();
        insert_cursor(&mut variables, cursor);
        variables
    }
}

impl ResponseExtractor for AuthDomainsQuery {
    fn extract_cursor(&self, response: &JsonValue, _page_scope_index: usize) -> Option<Cursor> {
        string_at(response, &CURSOR_PATH)
    }

    fn format_results(&self, response: &JsonValue) -> Result<Vec<Record>> {
        let entries = require_array(response, &ENTRIES_PATH)?;
        let context = ENTRIES_PATH.join(".");

        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let context = format!("{context}[{i}]");
                Ok(Record {
                    id: scalar_field(entry, "id", &context)?,
                    name: scalar_field(entry, "name", &context)?,
                })
            })
            .collect()
    }
}

impl FetchKind for AuthDomainsQuery {
    fn name(&self) -> &'static str {
        "authentication domains"
    }

    fn parent_scope(&self) -> ParentScope {
        ParentScope::Unscoped
    }
}
