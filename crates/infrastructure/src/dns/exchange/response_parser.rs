use dnsload_domain::{Answer, DomainError};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub answers: Vec<Answer>,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<ParsedResponse, DomainError> {
        if response_bytes.len() < 12 {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response too short: {} bytes",
                response_bytes.len()
            )));
        }
        let id = u16::from_be_bytes([response_bytes[0], response_bytes[1]]);

        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();
        let answers: Vec<Answer> = message.answers().iter().map(Self::to_answer).collect();

        debug!(
            id,
            rcode = ?rcode,
            answers = answers.len(),
            truncated,
            "DNS response parsed"
        );

        Ok(ParsedResponse {
            id,
            rcode,
            truncated,
            answers,
        })
    }

    fn to_answer(record: &Record) -> Answer {
        match record.data() {
            RData::A(a) => Answer::A(a.0),
            RData::CNAME(canonical) => Answer::Cname(Arc::from(canonical.to_utf8())),
            RData::MX(mx) => Answer::Mx {
                preference: mx.preference(),
                exchange: Arc::from(mx.exchange().to_utf8()),
            },
            _ => Answer::Other(u16::from(record.record_type())),
        }
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
