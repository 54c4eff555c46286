//! Deployment configuration for a bot front-end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration handed to the embedding front-end at startup.
///
/// The transport credential lives here so the front-end receives it
/// explicitly instead of reading a hardcoded global; the core itself
/// never uses it.
#[derive(Debug, Clone, Default, Getters, Serialize, Deserialize)]
pub struct BotConfig {
    /// Credential for the chat platform, if the front-end needs one.
    #[serde(default)]
    token: Option<String>,

    /// Seed for the bot's move picker; unset means fresh entropy.
    #[serde(default)]
    seed: Option<u64>,
}

impl BotConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            token_present = config.token.is_some(),
            seeded = config.seed.is_some(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Builds configuration from the environment: `TG_TOKEN` for the
    /// transport credential, `TICBOT_SEED` for the picker seed.
    #[instrument]
    pub fn from_env() -> Self {
        let config = Self {
            token: std::env::var("TG_TOKEN").ok(),
            seed: std::env::var("TICBOT_SEED")
                .ok()
                .and_then(|s| s.parse().ok()),
        };
        debug!(
            token_present = config.token.is_some(),
            seeded = config.seed.is_some(),
            "Config read from environment"
        );
        config
    }
}

/// Error raised when configuration cannot be loaded.
#[derive(Debug, Display, Error)]
#[display("{message}")]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn new(message: String) -> Self {
        Self { message }
    }
}
