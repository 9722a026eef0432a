#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// What the mock server sends back for every query.
#[derive(Debug, Clone, Copy)]
pub enum MockMode {
    /// One A record pointing at the given address.
    Answer([u8; 4]),
    /// NOERROR with an empty answer section.
    Empty,
    /// Bytes that do not form a DNS message.
    Garbage,
    /// A valid answer carrying a different transaction ID.
    WrongId,
    /// Reads the query and never replies.
    Silent,
    /// One A record, sent after holding the query for the given milliseconds.
    Delayed([u8; 4], u64),
}

impl MockMode {
    fn hold(&self) -> Option<std::time::Duration> {
        match self {
            MockMode::Delayed(_, ms) => Some(std::time::Duration::from_millis(*ms)),
            _ => None,
        }
    }
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn udp(mode: MockMode) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = Self::build_mock_response(&buf[..len], mode) {
                                if let Some(hold) = mode.hold() {
                                    tokio::time::sleep(hold).await;
                                }
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub async fn tcp(mode: MockMode) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        let Ok((mut stream, _)) = accepted else { continue };
                        tokio::spawn(async move {
                            let Ok(len) = stream.read_u16().await else { return };
                            let mut query = vec![0u8; len as usize];
                            if stream.read_exact(&mut query).await.is_err() {
                                return;
                            }
                            match Self::build_mock_response(&query, mode) {
                                Some(response) => {
                                    if let Some(hold) = mode.hold() {
                                        tokio::time::sleep(hold).await;
                                    }
                                    let _ = stream.write_u16(response.len() as u16).await;
                                    let _ = stream.write_all(&response).await;
                                    let _ = stream.flush().await;
                                }
                                None => {
                                    tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                                }
                            }
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_mock_response(query: &[u8], mode: MockMode) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        let (answer_count, rdata) = match mode {
            MockMode::Silent => return None,
            MockMode::Garbage => return Some(vec![0xde, 0xad, 0xbe, 0xef]),
            MockMode::Empty => (0u8, None),
            MockMode::Answer(ip) | MockMode::Delayed(ip, _) => (1, Some(ip)),
            MockMode::WrongId => (1, Some([10, 0, 0, 1])),
        };

        let mut response = Vec::with_capacity(512);

        let id = u16::from_be_bytes([query[0], query[1]]);
        let id = match mode {
            MockMode::WrongId => id.wrapping_add(1),
            _ => id,
        };
        response.extend_from_slice(&id.to_be_bytes());

        response.push(0x81);
        response.push(0x80);
        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&[0x00, answer_count]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);

        // Echo the question section only; drop any EDNS OPT record.
        response.extend_from_slice(&query[12..question_end(query)]);

        if let Some(ip) = rdata {
            response.extend_from_slice(&[
                0xc0, 0x0c, // pointer to question name
                0x00, 0x01, // A
                0x00, 0x01, // IN
                0x00, 0x00, 0x00, 0x3c, // TTL 60
                0x00, 0x04,
            ]);
            response.extend_from_slice(&ip);
        }

        Some(response)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Offset just past the first question (name, type, class).
fn question_end(query: &[u8]) -> usize {
    let mut pos = 12;
    while pos < query.len() && query[pos] != 0 {
        pos += query[pos] as usize + 1;
    }
    (pos + 5).min(query.len())
}
