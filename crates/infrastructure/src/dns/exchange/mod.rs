pub mod message_builder;
pub mod record_type_map;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use record_type_map::RecordTypeMapper;
pub use response_parser::{ParsedResponse, ResponseParser};

use super::transport::Transport;
use async_trait::async_trait;
use dnsload_application::ports::{DnsExchangePort, ExchangeOutcome};
use dnsload_domain::{DomainError, QueryRecord};
use std::time::Duration;
use tracing::debug;

/// `DnsExchangePort` backed by hickory-proto message encoding and a UDP or
/// TCP transport.
///
/// RTT is the transport's write-to-read window; building the query, opening
/// the socket or connection, and parsing the response are outside it.
/// Response codes are not errors here: an NXDOMAIN or SERVFAIL simply comes
/// back without answers.
pub struct HickoryExchange {
    transport: Transport,
    timeout: Duration,
}

impl HickoryExchange {
    pub fn new(transport: Transport, timeout: Duration) -> Self {
        Self { transport, timeout }
    }
}

#[async_trait]
impl DnsExchangePort for HickoryExchange {
    async fn exchange(&self, query: &QueryRecord) -> Result<ExchangeOutcome, DomainError> {
        let (id, message) = MessageBuilder::build_query_with_id(&query.name, &query.record_type)?;

        let response = self.transport.send(&message, self.timeout).await?;
        let rtt = response.rtt;

        let parsed = ResponseParser::parse(&response.bytes)?;
        if parsed.id != id {
            return Err(DomainError::ResponseIdMismatch {
                expected: id,
                received: parsed.id,
            });
        }

        debug!(
            name = %query.name,
            record_type = %query.record_type,
            protocol = response.protocol_used,
            status = ResponseParser::rcode_to_status(parsed.rcode),
            truncated = parsed.truncated,
            rtt_us = rtt.as_micros() as u64,
            "DNS exchange completed"
        );

        Ok(ExchangeOutcome::new(parsed.answers, rtt))
    }
}
