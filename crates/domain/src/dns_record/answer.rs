use std::net::Ipv4Addr;
use std::sync::Arc;

/// One record from the answer section of a response, reduced to what the
/// load test compares against.
///
/// Names are kept in fully-qualified form with the trailing dot, the same
/// form used in query files (`mail.example.com.`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    A(Ipv4Addr),
    Cname(Arc<str>),
    Mx { preference: u16, exchange: Arc<str> },
    /// Any record the validator has no comparable value for, keyed by its
    /// wire type code.
    Other(u16),
}

impl Answer {
    /// The value checked against a query's expected set.
    ///
    /// Record types without a defined primary value yield an empty string,
    /// which never matches a non-empty expectation.
    pub fn primary_value(&self) -> String {
        match self {
            Answer::A(addr) => addr.to_string(),
            Answer::Cname(target) => target.to_string(),
            Answer::Mx { exchange, .. } => exchange.to_string(),
            Answer::Other(_) => String::new(),
        }
    }
}
