pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use dnsload_domain::{DomainError, TransportProtocol};
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,

    /// From the first byte written to the last byte read. Socket setup and
    /// connection establishment are not included.
    pub rtt: Duration,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            Self::Udp(_) => "UDP",
            Self::Tcp(_) => "TCP",
        }
    }

    pub fn server_addr(&self) -> SocketAddr {
        match self {
            Self::Udp(t) => t.server_addr(),
            Self::Tcp(t) => t.server_addr(),
        }
    }
}

pub fn create_transport(protocol: TransportProtocol, server_addr: SocketAddr) -> Transport {
    match protocol {
        TransportProtocol::Udp => Transport::Udp(udp::UdpTransport::new(server_addr)),
        TransportProtocol::Tcp => Transport::Tcp(tcp::TcpTransport::new(server_addr)),
    }
}

/// Maps socket errors onto the transport variants of `DomainError`.
pub(crate) fn io_error(server: SocketAddr, context: &str, e: io::Error) -> DomainError {
    let server = server.to_string();
    match e.kind() {
        io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused { server },
        io::ErrorKind::ConnectionReset | io::ErrorKind::ConnectionAborted => {
            DomainError::TransportConnectionReset { server }
        }
        io::ErrorKind::TimedOut => DomainError::TransportTimeout { server },
        _ => DomainError::IoError(format!("{} {}: {}", context, server, e)),
    }
}

pub(crate) fn timeout_error(server: SocketAddr) -> DomainError {
    DomainError::TransportTimeout {
        server: server.to_string(),
    }
}
