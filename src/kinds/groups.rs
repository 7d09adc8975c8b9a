//! Groups within authentication domains
//!
//! Each request targets one authentication domain id; the cursor lives on
//! the domain entry's `groups` connection.

use crate::error::{Error, Result};
use crate::extract::{lookup, require_array, scalar_field, string_at, ResponseExtractor};
use crate::pagination::{FetchKind, ParentScope};
use crate::query::{identifier_array, insert_cursor, QueryBuilder};
use crate::types::{Cursor, JsonValue, Parents, Record, Variables};
use serde_json::Value;
use tracing::debug;

/// Variable carrying the authentication domain identifiers
pub const AUTH_DOMAIN_ID_VAR: &str = "authDomainId";

const QUERY: &str = r"
query GetGroups($authDomainId: [ID!]!) {
  actor {
    organization {
      userManagement {
        authenticationDomains(id: $authDomainId) {
          authenticationDomains {
            groups {
              groups {
                displayName
                id
              }
              nextCursor
            }
          }
        }
      }
    }
  }
}
";

const QUERY_WITH_CURSOR: &str = r"
query GetGroups($authDomainId: [ID!]!, $cursor: String) {
  actor {
    organization {
      userManagement {
        authenticationDomains(id: $authDomainId) {
          authenticationDomains {
            groups(cursor: $cursor) {
              groups {
                displayName
                id
              }
              nextCursor
            }
          }
        }
      }
    }
  }
}
";

const ENTRIES_PATH: [&str; 6] = [
    "data",
    "actor",
    "organization",
    "userManagement",
    "authenticationDomains",
    "authenticationDomains",
];

/// Fetches the groups of one or more authentication domains
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupsQuery;

impl GroupsQuery {
    /// Create the fetch kind
    pub fn new() -> Self {
        Self
    }
}

impl QueryBuilder for GroupsQuery {
    fn build_query(&self, with_cursor: bool) -> &'static str {
        if with_cursor {
            QUERY_WITH_CURSOR
        } else {
            QUERY
        }
    }

    fn build_variables(&self, parents: Option<&Parents>, cursor: Option<&str>) -> Variables {
        let mut variables = Variables::new();
        if let Some(parents) = parents {
            variables.insert(AUTH_DOMAIN_ID_VAR.to_string(), identifier_array(parents));
        }
        insert_cursor(&mut variables, cursor);
        variables
    }
}

impl ResponseExtractor for GroupsQuery {
    fn extract_cursor(&self, response: &JsonValue, page_scope_index: usize) -> Option<Cursor> {
        let entry = lookup(response, &ENTRIES_PATH)?
            .as_array()?
            .get(page_scope_index)?;
        string_at(entry, &["groups", "nextCursor"])
    }

    fn format_results(&self, response: &JsonValue) -> Result<Vec<Record>> {
        let entries = require_array(response, &ENTRIES_PATH)?;
        let context = ENTRIES_PATH.join(".");
        let mut records = Vec::new();

        for (i, entry) in entries.iter().enumerate() {
            // Domains without a groups connection contribute nothing
            let Some(connection) = entry.get("groups").filter(|c| c.is_object()) else {
                debug!("Skipping {context}[{i}]: no groups connection");
                continue;
            };
            let Some(groups) = connection.get("groups") else {
                debug!("Skipping {context}[{i}].groups: no groups list");
                continue;
            };

            let list_context = format!("{context}[{i}].groups.groups");
            let Value::Array(groups) = groups else {
                return Err(Error::malformed(list_context, "expected an array"));
            };

            for (j, group) in groups.iter().enumerate() {
                let group_context = format!("{list_context}[{j}]");
                records.push(Record {
                    id: scalar_field(group, "id", &group_context)?,
                    name: scalar_field(group, "displayName", &group_context)?,
                });
            }
        }

        Ok(records)
    }
}

impl FetchKind for GroupsQuery {
    fn name(&self) -> &'static str {
        "groups"
    }

    fn parent_scope(&self) -> ParentScope {
        ParentScope::PerParent
    }
}
