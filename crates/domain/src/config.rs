pub mod errors;
pub mod logging;
pub mod root;
pub mod run;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use run::{RunConfig, RunMode, TransportProtocol};
