#![allow(dead_code)]

use async_trait::async_trait;
use dnsload_application::ports::QuerySource;
use dnsload_domain::{DomainError, QueryRecord, RecordType};

pub struct MockQuerySource {
    records: Vec<QueryRecord>,
    fail: bool,
}

impl MockQuerySource {
    pub fn with_records(records: Vec<QueryRecord>) -> Self {
        Self {
            records,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            records: vec![],
            fail: true,
        }
    }
}

#[async_trait]
impl QuerySource for MockQuerySource {
    async fn load(&self) -> Result<Vec<QueryRecord>, DomainError> {
        if self.fail {
            return Err(DomainError::QueryFileRead {
                path: "mock.csv".to_string(),
                reason: "unreadable".to_string(),
            });
        }
        Ok(self.records.clone())
    }
}

pub fn a_record(name: &str, expected: &[&str]) -> QueryRecord {
    QueryRecord::new(
        RecordType::A,
        name,
        expected.iter().map(|s| s.to_string()).collect(),
    )
}
