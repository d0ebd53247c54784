//! Logging utilities.
//!
//! Centralizes logger initialization. The engine itself only uses the `log`
//! facade; `env_logger` is wired up here for binaries and tools.

mod init;

pub use init::{init_logging, LoggingConfig};
