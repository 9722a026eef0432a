use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("DNS response ID {received} does not match query ID {expected}")]
    ResponseIdMismatch { expected: u16, received: u16 },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport connection reset by {server}")]
    TransportConnectionReset { server: String },

    #[error("Invalid server address: {0}")]
    InvalidServerAddress(String),

    #[error("Failed to read query file {path}: {reason}")]
    QueryFileRead { path: String, reason: String },

    #[error("Query list is empty")]
    EmptyQueryList,

    #[error("Client count must be at least 1")]
    NoClients,

    #[error("{missing} of {expected} workers exited without reporting results")]
    WorkerLost { expected: usize, missing: usize },
}
