//! Logging utilities.
//!
//! Centralizes logger initialization for binaries built on the engine. The
//! engine itself only talks to the `log` facade and never logs failures it
//! returns to the caller.

mod init;

pub use init::{init_logging, LoggingConfig};
