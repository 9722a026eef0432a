mod dns_exchange;
mod query_source;

pub use dns_exchange::{DnsExchangePort, ExchangeOutcome};
pub use query_source::QuerySource;

// Re-export for convenience
pub use dnsload_domain::{Answer, QueryRecord};
