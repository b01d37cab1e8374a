//! Error types. Data-level problems are reported as validation issues,
//! never as errors; `Result` is reserved for caller contract violations.

mod config_error;

pub use config_error::ConfigError;
