//! Authentication domain workflow
//!
//! Fetches every authentication domain, then the groups of all of them.

use crate::error::Result;
use crate::pagination::Fetcher;
use crate::types::{Identifier, Record};
use serde::Serialize;
use tracing::info;

/// Output of [`run_auth_domain_workflow`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkflowReport {
    /// Every authentication domain
    pub domains: Vec<Record>,
    /// Groups across all domains, in domain order
    pub groups: Vec<Record>,
}

/// Fetch all authentication domains and the groups they contain
pub async fn run_auth_domain_workflow(fetcher: &Fetcher) -> Result<WorkflowReport> {
    let domains = fetcher.fetch_auth_domains().await?;
    info!("Fetched {} authentication domains", domains.len());

    let domain_ids: Vec<Identifier> = domains.iter().map(|d| d.id.clone()).collect();
    let groups = if domain_ids.is_empty() {
        Vec::new()
    } else {
        fetcher.fetch_groups(domain_ids).await?
    };
    info!("Fetched {} groups", groups.len());

    Ok(WorkflowReport { domains, groups })
}
