//! Domain layer for the dnsload harness: query records, answers, statistics
//! and run configuration.
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod query_record;
pub mod run_report;
pub mod statistic;

pub use config::{CliOverrides, Config, ConfigError, RunConfig, RunMode, TransportProtocol};
pub use dns_record::{Answer, RecordType};
pub use errors::DomainError;
pub use query_record::QueryRecord;
pub use run_report::RunReport;
pub use statistic::{Statistic, RTT_UNSET};
