//! Logging setup for programs that report timings.
//!
//! Timers never log; this module only wires the `log` facade to an
//! `env_logger` backend for the binaries that use them.

mod init;

pub use init::{init_logging, LoggingConfig};
