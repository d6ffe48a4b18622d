//! Application configuration module
//!
//! Configuration is read from environment variables using the `config` and
//! `dotenvy` crates. Variables carry the `COMMUNITY_FINDER` prefix and nested
//! values are separated with double underscores. Every value has a default,
//! so an empty environment yields a runnable development setup.
//!
//! # Example
//!
//! ```no_run
//! use community_finder::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod data;
mod error;
mod server;

pub use ai::AiConfig;
pub use data::DataConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Dataset, model artifact and community metadata locations
    #[serde(default)]
    pub data: DataConfig,

    /// LLM endpoint settings
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` when present, then reads `COMMUNITY_FINDER__*` variables:
    ///
    /// - `COMMUNITY_FINDER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `COMMUNITY_FINDER__DATA__MODEL_DIR=models` -> `data.model_dir = "models"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COMMUNITY_FINDER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.data.validate()?;
        self.ai.validate()?;

        // A meetup plan makes one completion, so it must fit inside one request.
        let budget = self.ai.completion_budget();
        if self.server.request_timeout() <= budget {
            return Err(ValidationError::TimeoutBelowAiBudget {
                request_secs: self.server.request_timeout_secs,
                budget_secs: budget.as_secs(),
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
