//! Adapters for the application ports: a hickory-backed DNS exchange over
//! UDP or TCP and a CSV query-file reader.
pub mod dns;
pub mod input;
