pub mod mock_exchange;
pub mod mock_query_source;

pub use mock_exchange::*;
pub use mock_query_source::*;
