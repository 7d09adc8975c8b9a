//! Pagination driver
//!
//! Runs the cursor loop for each scope of a fetch and concatenates the
//! results.

use super::logger::{FetchLogger, LogLevel, TracingLogger};
use super::types::{
    FetchKind, FetchReport, FetchState, FetchStats, PageFailure, PageOutcome, ParentScope,
};
use crate::error::{Error, Result};
use crate::executor::QueryExecutor;
use crate::kinds::{AuthDomainsQuery, GroupsQuery};
use crate::types::{OptionStringExt, Parents, Record};
use serde_json::Value;
use std::sync::Arc;

/// Builder for [`Fetcher`]
#[derive(Default)]
pub struct FetcherBuilder {
    executor: Option<Arc<dyn QueryExecutor>>,
    logger: Option<Arc<dyn FetchLogger>>,
}

impl FetcherBuilder {
    /// Set the query executor
    #[must_use]
    pub fn executor(mut self, executor: impl QueryExecutor + 'static) -> Self {
        self.executor = Some(Arc::new(executor));
        self
    }

    /// Set a shared query executor
    #[must_use]
    pub fn shared_executor(mut self, executor: Arc<dyn QueryExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Set the logger (defaults to [`TracingLogger`])
    #[must_use]
    pub fn logger(mut self, logger: impl FetchLogger + 'static) -> Self {
        self.logger = Some(Arc::new(logger));
        self
    }

    /// Set a shared logger
    #[must_use]
    pub fn shared_logger(mut self, logger: Arc<dyn FetchLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Build the fetcher. Fails if no executor was supplied.
    pub fn build(self) -> Result<Fetcher> {
        let executor = self.executor.ok_or_else(|| Error::missing_field("executor"))?;
        let logger = self
            .logger
            .unwrap_or_else(|| Arc::new(TracingLogger) as Arc<dyn FetchLogger>);
        Ok(Fetcher { executor, logger })
    }
}

/// Paginates fetch kinds against a query executor
#[derive(Clone)]
pub struct Fetcher {
    executor: Arc<dyn QueryExecutor>,
    logger: Arc<dyn FetchLogger>,
}

impl Fetcher {
    /// Create a fetcher that logs through `tracing`
    pub fn new(executor: impl QueryExecutor + 'static) -> Self {
        Self {
            executor: Arc::new(executor),
            logger: Arc::new(TracingLogger),
        }
    }

    /// Create a builder
    pub fn builder() -> FetcherBuilder {
        FetcherBuilder::default()
    }

    /// Fetch every authentication domain
    pub async fn fetch_auth_domains(&self) -> Result<Vec<Record>> {
        self.fetch_all(&AuthDomainsQuery, None).await
    }

    /// Fetch every group of the given authentication domains
    pub async fn fetch_groups(&self, parents: impl Into<Parents>) -> Result<Vec<Record>> {
        self.fetch_all(&GroupsQuery, Some(parents.into())).await
    }

    /// Fetch all records of `kind`.
    ///
    /// Page failures are logged and end only the affected scope, so the
    /// returned records may be partial. `Err` is reserved for passing
    /// parents to an unscoped kind or omitting them for a scoped one.
    pub async fn fetch_all<K>(&self, kind: &K, parents: Option<Parents>) -> Result<Vec<Record>>
    where
        K: FetchKind + ?Sized,
    {
        self.fetch_all_with_stats(kind, parents)
            .await
            .map(|report| report.records)
    }

    /// Like [`Fetcher::fetch_all`], also returning statistics
    pub async fn fetch_all_with_stats<K>(
        &self,
        kind: &K,
        parents: Option<Parents>,
    ) -> Result<FetchReport>
    where
        K: FetchKind + ?Sized,
    {
        let scopes: Vec<Option<Parents>> = match (kind.parent_scope(), parents) {
            (ParentScope::Unscoped, None) => vec![None],
            (ParentScope::Unscoped, Some(_)) => {
                return Err(Error::usage(format!(
                    "{} fetch does not take parent identifiers",
                    kind.name()
                )));
            }
            (ParentScope::PerParent, None) => {
                return Err(Error::usage(format!(
                    "{} fetch requires parent identifiers",
                    kind.name()
                )));
            }
            (ParentScope::PerParent, Some(parents)) => parents
                .into_ids()
                .into_iter()
                .map(|id| Some(Parents::Single(id)))
                .collect(),
        };

        self.log(
            LogLevel::Info,
            format!("Fetching {} across {} scope(s)", kind.name(), scopes.len()),
        );

        let mut report = FetchReport::default();
        for parent in &scopes {
            let (records, stats) = self.fetch_scope(kind, parent.as_ref()).await;
            report.records.extend(records);
            report.stats.merge(&stats);
        }

        self.log(
            LogLevel::Info,
            format!(
                "Completed {}: {} records in {} pages ({} scope(s) failed)",
                kind.name(),
                report.stats.records,
                report.stats.pages,
                report.stats.scopes_failed
            ),
        );

        Ok(report)
    }

    /// Run the cursor loop for one scope until it is done or a page fails
    async fn fetch_scope<K>(&self, kind: &K, parent: Option<&Parents>) -> (Vec<Record>, FetchStats)
    where
        K: FetchKind + ?Sized,
    {
        let label = scope_label(parent);
        let mut records = Vec::new();
        let mut stats = FetchStats::default();
        let mut state = FetchState::Start;

        while !state.is_terminal() {
            state = match state {
                FetchState::Start => FetchState::Fetching(None),
                FetchState::Fetching(cursor) => {
                    match self.fetch_page(kind, parent, cursor.as_deref()).await {
                        PageOutcome::Page {
                            records: page,
                            next_cursor,
                        } => {
                            stats.add_page(page.len());
                            records.extend(page);
                            match next_cursor {
                                Some(next) => FetchState::Fetching(Some(next)),
                                None => FetchState::Done,
                            }
                        }
                        PageOutcome::Failed(failure) => {
                            self.report_failure(kind.name(), &label, &failure);
                            FetchState::Failed
                        }
                    }
                }
                terminal => terminal,
            };
        }

        stats.finish_scope(&state);
        self.log(
            LogLevel::Debug,
            format!(
                "Finished {} for {label}: {} records in {} pages",
                kind.name(),
                stats.records,
                stats.pages
            ),
        );

        (records, stats)
    }

    /// Request one page and turn it into a typed outcome
    async fn fetch_page<K>(
        &self,
        kind: &K,
        parent: Option<&Parents>,
        cursor: Option<&str>,
    ) -> PageOutcome
    where
        K: FetchKind + ?Sized,
    {
        let cursor = cursor.filter(|c| !c.is_empty());
        let query = kind.build_query(cursor.is_some());
        let variables = kind.build_variables(parent, cursor);

        self.log(
            LogLevel::Info,
            format!(
                "Executing {} query with variables: {}",
                kind.name(),
                Value::Object(variables.clone())
            ),
        );

        let response = match self.executor.execute_query(query, &variables).await {
            Ok(response) => response,
            Err(e) => return PageOutcome::Failed(PageFailure::Execution(e)),
        };
        self.log(LogLevel::Debug, format!("Query response: {response}"));

        let records = match kind.format_results(&response) {
            Ok(records) => records,
            Err(e) => return PageOutcome::Failed(PageFailure::from_extraction(e)),
        };

        let next_cursor = kind
            .extract_cursor(&response, kind.page_scope_index())
            .none_if_empty();

        self.log(
            LogLevel::Debug,
            format!(
                "Page yielded {} records, next cursor: {}",
                records.len(),
                next_cursor.as_deref().unwrap_or("<none>")
            ),
        );

        PageOutcome::Page {
            records,
            next_cursor,
        }
    }

    fn report_failure(&self, kind: &str, label: &str, failure: &PageFailure) {
        match failure {
            PageFailure::Execution(e) => self.log(
                LogLevel::Warn,
                format!("Error executing {kind} query for {label}: {e}"),
            ),
            PageFailure::MalformedBody(e) => self.log(
                LogLevel::Error,
                format!("Error processing {kind} response for {label}: {e}"),
            ),
        }
    }

    fn log(&self, level: LogLevel, message: String) {
        self.logger.log(level, &message);
    }
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher").finish_non_exhaustive()
    }
}

fn scope_label(parent: Option<&Parents>) -> String {
    match parent {
        Some(parents) => format!("authentication domain {}", parents.ids().join(",")),
        None => "organization".to_string(),
    }
}
