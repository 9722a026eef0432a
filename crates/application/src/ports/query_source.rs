use async_trait::async_trait;
use dnsload_domain::{DomainError, QueryRecord};

/// Supplies the ordered query list for a run.
///
/// Implementations drop rows with unsupported record types themselves; every
/// returned record is ready to be sent.
#[async_trait]
pub trait QuerySource: Send + Sync {
    async fn load(&self) -> Result<Vec<QueryRecord>, DomainError>;
}
