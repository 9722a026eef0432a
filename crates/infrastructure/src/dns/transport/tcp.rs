//! TCP Transport for DNS queries (RFC 1035 §4.2.2)
//!
//! Every message is framed with a two-byte big-endian length prefix. A fresh
//! connection is opened per query.

use super::{io_error, timeout_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use dnsload_domain::DomainError;
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    async fn connect(&self, timeout: Duration) -> Result<TcpStream, DomainError> {
        let stream = tokio::time::timeout(timeout, TcpStream::connect(self.server_addr))
            .await
            .map_err(|_| timeout_error(self.server_addr))?
            .map_err(|e| io_error(self.server_addr, "Failed to connect to", e))?;

        stream
            .set_nodelay(true)
            .map_err(|e| io_error(self.server_addr, "Failed to set TCP_NODELAY on", e))?;

        Ok(stream)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let mut stream = self.connect(timeout).await?;

        let started = Instant::now();
        tokio::time::timeout(timeout, send_with_length_prefix(&mut stream, message_bytes))
            .await
            .map_err(|_| timeout_error(self.server_addr))?
            .map_err(|e| io_error(self.server_addr, "Failed to send TCP query to", e))?;

        debug!(
            server = %self.server_addr,
            message_len = message_bytes.len(),
            "TCP query sent"
        );

        let response_bytes = tokio::time::timeout(timeout, read_with_length_prefix(&mut stream))
            .await
            .map_err(|_| timeout_error(self.server_addr))?
            .map_err(|e| io_error(self.server_addr, "Failed to read TCP response from", e))?;
        let rtt = started.elapsed();

        debug!(
            server = %self.server_addr,
            response_len = response_bytes.len(),
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes,
            protocol_used: "TCP",
            rtt,
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> std::io::Result<()>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("DNS message too large for TCP: {} bytes", message_bytes.len()),
        )
    })?;

    stream.write_all(&length.to_be_bytes()).await?;
    stream.write_all(message_bytes).await?;
    stream.flush().await
}

pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> std::io::Result<Vec<u8>>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await?;

    let response_len = u16::from_be_bytes(len_buf) as usize;

    let mut response = vec![0u8; response_len];
    stream.read_exact(&mut response).await?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_length_prefix_framing() {
        let (mut client, mut server) = tokio::io::duplex(1024);

        send_with_length_prefix(&mut client, &[1, 2, 3, 4, 5])
            .await
            .unwrap();
        let received = read_with_length_prefix(&mut server).await.unwrap();

        assert_eq!(received, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_short_read_is_an_error() {
        let (mut client, mut server) = tokio::io::duplex(1024);
        client.write_all(&[0x00, 0x10, 0xAA]).await.unwrap();
        drop(client);

        let result = read_with_length_prefix(&mut server).await;

        assert!(result.is_err());
    }

    #[test]
    fn test_tcp_transport_creation() {
        let addr: SocketAddr = "1.1.1.1:53".parse().unwrap();
        let transport = TcpTransport::new(addr);
        assert_eq!(transport.protocol_name(), "TCP");
        assert_eq!(transport.server_addr(), addr);
    }
}
