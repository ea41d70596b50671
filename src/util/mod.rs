//! Utility modules for distro-base
//!
//! Currently this is the structured logging setup used by binaries and tests
//! that embed the crate.

pub mod logging;

pub use logging::{init_default, init_from_env, init_logging, LoggingConfig};
