//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Dataset delimiter must be a single ASCII character, got '{0}'")]
    InvalidDelimiter(String),

    #[error("Invalid AI base URL: {0}")]
    InvalidAiBaseUrl(String),

    #[error("AI max_retries exceeds maximum allowed (5)")]
    TooManyRetries,

    #[error("Request timeout of {request_secs}s does not cover the AI completion budget of {budget_secs}s")]
    TimeoutBelowAiBudget { request_secs: u64, budget_secs: u64 },
}
