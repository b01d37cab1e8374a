//! Configuration errors.

/// Errors raised while parsing or validating an [`crate::EngineConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {message}")]
    Parse { message: String },

    #[error("{field} must be within [0, 1], got {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("suggestion_cap must be at least 1")]
    ZeroCap,
}
