use clap::ValueEnum;
use ledger_common::{BindingError, Identifier};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration for the ledger-values command line tool
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Values used to complete partially written enum identifiers
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Output and logging preferences
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DefaultsConfig {
    pub package_id: Option<String>,
    pub module_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// How decoded values are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable display form
    #[default]
    Text,
    /// Pretty printed JSON
    Json,
}

pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("No default {0} configured to complete the enum identifier")]
    MissingDefault(&'static str),

    #[error("Binding error: {0}")]
    Binding(#[from] BindingError),
}

impl ClientConfig {
    /// Load configuration from the default locations, falling back to
    /// built-in defaults when no file exists
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_config_path() {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn default_config_path() -> Option<PathBuf> {
        // Check environment variable first
        if let Ok(path) = env::var("LEDGER_CLIENT_CONFIG") {
            return Some(PathBuf::from(path));
        }

        let config_dir = PathBuf::from("config");

        // Check environment-specific config
        let env = env::var("LEDGER_ENV").unwrap_or_else(|_| "development".to_string());
        let env_specific_path = config_dir.join(format!("client.{}.toml", env));
        if env_specific_path.exists() {
            return Some(env_specific_path);
        }

        let default_path = config_dir.join("client.toml");
        default_path.exists().then_some(default_path)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if matches!(&self.defaults.package_id, Some(p) if p.is_empty()) {
            return Err(ConfigError::ValidationError(
                "Default package ID cannot be empty".to_string(),
            ));
        }

        if matches!(&self.defaults.module_name, Some(m) if m.is_empty()) {
            return Err(ConfigError::ValidationError(
                "Default module name cannot be empty".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.output.log_level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Unknown log level '{}'",
                self.output.log_level
            )));
        }

        Ok(())
    }

    /// Expands `Entity` or `Module:Entity` with the configured defaults;
    /// a full `package:Module:Entity` is parsed as is
    pub fn resolve_enum_id(&self, raw: &str) -> Result<Identifier, ConfigError> {
        let parts: Vec<&str> = raw.split(':').collect();
        let full = match parts.as_slice() {
            [entity] => format!(
                "{}:{}:{}",
                self.default_package()?,
                self.default_module()?,
                entity
            ),
            [module, entity] => format!("{}:{}:{}", self.default_package()?, module, entity),
            _ => raw.to_string(),
        };

        Ok(full.parse::<Identifier>()?)
    }

    fn default_package(&self) -> Result<&str, ConfigError> {
        self.defaults
            .package_id
            .as_deref()
            .ok_or(ConfigError::MissingDefault("package ID"))
    }

    fn default_module(&self) -> Result<&str, ConfigError> {
        self.defaults
            .module_name
            .as_deref()
            .ok_or(ConfigError::MissingDefault("module name"))
    }
}
