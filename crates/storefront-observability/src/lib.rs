//! Logging setup for the storefront.
//!
//! This crate provides:
//! - `LogLevel` / `LogFormat` - serializable logging knobs
//! - `LoggingConfig` - the `[logging]` section of the storefront config
//! - `init_logging` - installs a `tracing` subscriber on stderr

mod logging;

pub use logging::*;
