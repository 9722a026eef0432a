use crate::ports::QuerySource;
use dnsload_domain::{DomainError, QueryRecord};
use std::sync::Arc;
use tracing::info;

pub struct LoadQueriesUseCase {
    source: Arc<dyn QuerySource>,
}

impl LoadQueriesUseCase {
    pub fn new(source: Arc<dyn QuerySource>) -> Self {
        Self { source }
    }

    /// Loads the query list once and freezes it for sharing across workers.
    pub async fn execute(&self) -> Result<Arc<[QueryRecord]>, DomainError> {
        let records = self.source.load().await?;
        if records.is_empty() {
            return Err(DomainError::EmptyQueryList);
        }

        info!(queries = records.len(), "Query list loaded");
        Ok(records.into())
    }
}
