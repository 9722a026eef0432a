use super::RecordType;
use std::sync::Arc;

/// One line of the query file: what to ask for and which answers count as
/// correct.
///
/// Records are built once when the query list is loaded and then shared
/// read-only by every worker for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRecord {
    pub record_type: RecordType,
    pub name: Arc<str>,
    pub expected: Vec<String>,
}

impl QueryRecord {
    pub fn new(record_type: RecordType, name: impl Into<Arc<str>>, expected: Vec<String>) -> Self {
        Self {
            record_type,
            name: name.into(),
            expected,
        }
    }

    /// Case-insensitive exact match against the expected set.
    pub fn expects(&self, observed: &str) -> bool {
        self.expected
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(observed))
    }
}
