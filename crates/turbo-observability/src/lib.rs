//! Observability for the TurboCommerce storefront.
//!
//! Library crates only emit `tracing` events; binaries call
//! [`init_logging`] once to decide where they go and how they look.

pub mod logging;

pub use logging::{init_logging, LogConfig, LogFormat, LogLevel, ObservabilityError};
