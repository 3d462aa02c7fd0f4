//! Configuration loading — TOML file, then environment variables, then flags.
//!
//! Looks for `pushlight.toml` in the working directory (or the `--config`
//! path). Every section has defaults so the file is optional. Environment
//! variables take precedence over file values, and flags over both.

use std::path::Path;

use serde::Deserialize;

use pushlight_adapter_milight::MilightConfig;
use pushlight_adapter_pushbullet::PushbulletConfig;
use pushlight_domain::config::AlertConfig;
use pushlight_domain::error::ValidationError;
use pushlight_domain::light::Group;

use crate::cli::Cli;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Notification stream settings.
    pub pushbullet: PushbulletConfig,
    /// Bridge settings.
    pub milight: MilightConfig,
    /// When and how to flash.
    pub alert: AlertConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,tungstenite=warn,tokio_tungstenite=warn".to_string(),
        }
    }
}

impl Config {
    /// Load the config file named by `cli`, then apply environment and flag
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if the merged values are invalid.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(&cli.config)?;
        config.apply_env_overrides();
        config.apply_cli_overrides(cli)?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("PUSHLIGHT_API_KEY") {
            self.pushbullet.api_key = val;
        }
        if let Ok(val) = std::env::var("PUSHLIGHT_MILIGHT_HOST") {
            self.milight.host = val;
        }
        if let Ok(val) = std::env::var("PUSHLIGHT_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) -> Result<(), ConfigError> {
        if let Some(api_key) = &cli.api_key {
            self.pushbullet.api_key.clone_from(api_key);
        }
        if let Some(host) = &cli.milight_host {
            self.milight.host.clone_from(host);
        }
        if let Some(group) = cli.group {
            self.alert.group = Group::new(group)?;
        }
        if cli.start_hour.is_some() {
            self.alert.window.start_hour = cli.start_hour;
        }
        if cli.end_hour.is_some() {
            self.alert.window.end_hour = cli.end_hour;
        }
        if cli.state_file.is_some() {
            self.alert.state_file.clone_from(&cli.state_file);
        }
        if cli.grace_period.is_some() {
            self.alert.grace_period_secs = cli.grace_period;
        }
        if cli.color.is_some() {
            self.alert.color = cli.color;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.alert.validate()?;
        Ok(())
    }

    /// Names of required settings that are still empty after merging.
    ///
    /// The bridge address is not required for a dry run.
    #[must_use]
    pub fn missing_required(&self, dry_run: bool) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.pushbullet.api_key.is_empty() {
            missing.push("--pushbullet <APIKEY>");
        }
        if self.milight.host.is_empty() && !dry_run {
            missing.push("--milight <IPADDR>");
        }
        missing
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration")]
    Validation(#[from] ValidationError),
}
