use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::run::{RunConfig, TransportProtocol};

const DEFAULT_CONFIG_FILE: &str = "dnsload.toml";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Load-test run parameters
    #[serde(default)]
    pub run: RunConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsload.toml in current directory
    /// 3. Default configuration
    ///
    /// Command-line overrides are applied on top of whichever source won.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(clients) = overrides.clients {
            self.run.clients = clients;
        }
        if let Some(server) = overrides.server {
            self.run.server = server;
        }
        if let Some(duration) = overrides.duration_ms {
            self.run.duration_ms = duration;
        }
        if let Some(delay) = overrides.delay_ms {
            self.run.delay_ms = delay;
        }
        if overrides.validate {
            self.run.validate = true;
        }
        if let Some(timeout) = overrides.timeout_ms {
            self.run.timeout_ms = timeout;
        }
        if let Some(protocol) = overrides.protocol {
            self.run.protocol = protocol;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.run.clients == 0 {
            return Err(ConfigError::Validation(
                "Client count must be at least 1".to_string(),
            ));
        }

        if self.run.server.trim().is_empty() {
            return Err(ConfigError::Validation(
                "No target server configured".to_string(),
            ));
        }

        if self.run.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub clients: Option<usize>,
    pub server: Option<String>,
    pub duration_ms: Option<i64>,
    pub delay_ms: Option<u64>,
    pub validate: bool,
    pub timeout_ms: Option<u64>,
    pub protocol: Option<TransportProtocol>,
    pub log_level: Option<String>,
}
