pub mod exchange;
pub mod transport;

pub use exchange::{HickoryExchange, MessageBuilder, RecordTypeMapper, ResponseParser};
pub use transport::{create_transport, DnsTransport, Transport, TransportResponse};
