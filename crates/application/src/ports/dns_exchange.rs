use async_trait::async_trait;
use dnsload_domain::{Answer, DomainError, QueryRecord};
use std::time::Duration;

/// A response that made it back from the target server.
#[derive(Debug, Clone)]
pub struct ExchangeOutcome {
    /// Answer section, in wire order.
    pub answers: Vec<Answer>,
    /// Time from sending the query to receiving the response.
    pub rtt: Duration,
}

impl ExchangeOutcome {
    pub fn new(answers: Vec<Answer>, rtt: Duration) -> Self {
        Self { answers, rtt }
    }
}

/// Sends one query to the configured target and returns what came back.
///
/// Any failure to obtain a well-formed response (timeout, refused
/// connection, undecodable message) is an `Err`; the load loop counts it and
/// moves on.
#[async_trait]
pub trait DnsExchangePort: Send + Sync {
    async fn exchange(&self, query: &QueryRecord) -> Result<ExchangeOutcome, DomainError>;
}
