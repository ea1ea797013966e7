use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid max_iterations: {0}. Must be between 1 and 20")]
    InvalidMaxIterations(u32),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Output directory cannot be empty")]
    EmptyOutputDir,

    #[error("Anthropic model cannot be empty")]
    EmptyModel,

    #[error("Invalid max_tokens: {0}. Must be at least 1")]
    InvalidMaxTokens(u32),

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .tandem/config.yaml (project config)
    /// 3. .tandem/local.yaml (project local overrides, optional)
    /// 4. Environment variables (TANDEM_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".tandem/config.yaml"))
            .merge(Yaml::file(".tandem/local.yaml"))
            .merge(Env::prefixed("TANDEM_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.max_iterations == 0 || config.max_iterations > 20 {
            return Err(ConfigError::InvalidMaxIterations(config.max_iterations));
        }

        if config.output_dir.is_empty() {
            return Err(ConfigError::EmptyOutputDir);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if config.anthropic.model.is_empty() {
            return Err(ConfigError::EmptyModel);
        }

        if config.anthropic.max_tokens == 0 {
            return Err(ConfigError::InvalidMaxTokens(config.anthropic.max_tokens));
        }

        if config.anthropic.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.anthropic.timeout_secs));
        }

        Ok(())
    }
}
