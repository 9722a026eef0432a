//! Application layer: the load-test engine and the ports it drives.
pub mod ports;
pub mod services;
pub mod use_cases;
