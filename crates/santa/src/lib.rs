//! Library surface of the `santa` binary, exposed for integration tests.

pub mod app;
pub mod config;
pub mod errors;
