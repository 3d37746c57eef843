//! Configuration management

use anyhow::Result;
use serde::Deserialize;
use thiserror::Error;

use crate::app::routes::{RouteTable, APP_ROOT};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "EMONOTATE_CONFIG";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Where `GET /` sends the browser
    #[serde(default = "default_application_url")]
    pub application_url: String,
}

fn default_application_url() -> String {
    APP_ROOT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            application_url: default_application_url(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("application_url {0:?} does not resolve to any page")]
    UnroutedApplicationUrl(String),
}

impl Config {
    /// Check the configuration against the client route table.
    pub fn validate(&self, table: &RouteTable) -> Result<(), ConfigError> {
        match table.resolve_view(&self.application_url) {
            Some(_) => Ok(()),
            None => Err(ConfigError::UnroutedApplicationUrl(
                self.application_url.clone(),
            )),
        }
    }
}

pub fn load_config() -> Result<Config> {
    let file = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "emonotate".to_string());

    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("application_url", APP_ROOT)?
        // Load from config file if it exists
        .add_source(::config::File::with_name(&file).required(false))
        // Override with environment variables (EMONOTATE_APPLICATION_URL, etc.)
        .add_source(
            ::config::Environment::with_prefix("EMONOTATE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}
