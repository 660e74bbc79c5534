/// Environment variable helpers
pub mod config;
/// cURL rendering of outgoing requests
pub mod curl;
/// Identifiers and generated test data
pub mod id;
/// Module containing logging utilities
pub mod logger;

pub use id::*;
pub use logger::*;
