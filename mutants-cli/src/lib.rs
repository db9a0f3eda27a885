//! CLI and HTTP server for the `mutants` DNA classifier.
//!
//! The binary entry point lives in `main.rs`; the modules are exposed as
//! a library so integration tests can drive the router directly.

pub mod cli;
pub mod logging;
pub mod server;
