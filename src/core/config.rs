//! Configuration management

use clap::Parser;
use config::{Config as ConfigBuilder, ConfigError as BuilderError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid server configuration: {0}")]
    InvalidServer(String),

    #[error("Invalid store configuration: {0}")]
    InvalidStores(String),

    #[error("Invalid openFDA configuration: {0}")]
    InvalidOpenFda(String),

    #[error("Invalid warning-letter configuration: {0}")]
    InvalidWarningLetters(String),

    #[error("Invalid logging configuration: {0}")]
    InvalidLogging(String),

    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),
}

impl From<BuilderError> for ConfigError {
    fn from(err: BuilderError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub stores: StoreConfig,
    pub openfda: OpenFdaConfig,
    pub warning_letters: WarningLetterConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration with precedence: CLI args > Environment variables > Config file > Defaults
    pub fn load() -> Result<Self, ConfigError> {
        // Parse command-line arguments
        let cli_args = CliArgs::parse();

        let mut builder = Self::default_builder()?;

        // Load from config file if specified (medium priority)
        if let Some(config_path) = &cli_args.config {
            if !config_path.exists() {
                return Err(ConfigError::FileNotFound(config_path.display().to_string()));
            }
            builder = builder.add_source(File::from(config_path.as_path()));
        }

        // Override with environment variables (higher priority)
        // Environment variables are prefixed with MEDREG_ and use __ for nesting
        // Example: MEDREG_OPENFDA__API_KEY=abc123
        builder = builder.add_source(
            Environment::with_prefix("MEDREG")
                .separator("__")
                .try_parsing(true),
        );

        // Override with CLI arguments (highest priority)
        if let Some(host) = &cli_args.host {
            builder = builder.set_override("server.host", host.clone())?;
        }
        if let Some(port) = cli_args.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(contacts_db) = &cli_args.contacts_db {
            builder =
                builder.set_override("stores.contacts_path", contacts_db.display().to_string())?;
        }
        if let Some(documents_db) = &cli_args.documents_db {
            builder = builder
                .set_override("stores.documents_path", documents_db.display().to_string())?;
        }
        if let Some(api_key) = &cli_args.api_key {
            builder = builder.set_override("openfda.api_key", api_key.clone())?;
        }
        if let Some(log_level) = &cli_args.log_level {
            builder = builder.set_override("logging.level", log_level.clone())?;
        }

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file path
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let config: Config = Self::default_builder()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from defaults and environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let config: Config = Self::default_builder()?
            .add_source(
                Environment::with_prefix("MEDREG")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn default_builder(
    ) -> Result<config::builder::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5001)?
            .set_default("server.request_timeout", 30)?
            .set_default("server.allowed_origins", vec!["*"])?
            .set_default("stores.contacts_path", "./data/contact_info.db")?
            .set_default("stores.documents_path", "./data/historical_documents.db")?
            .set_default("stores.pool_size", 4)?
            .set_default("stores.busy_timeout", 5000)?
            .set_default("openfda.api_key", "")?
            .set_default(
                "openfda.enforcement_url",
                "https://api.fda.gov/device/enforcement.json",
            )?
            .set_default("openfda.event_url", "https://api.fda.gov/device/event.json")?
            .set_default("openfda.result_limit", 100)?
            .set_default("openfda.request_timeout", 30)?
            .set_default(
                "warning_letters.search_url",
                "https://www.fda.gov/inspections-compliance-enforcement-and-criminal-investigations/compliance-actions-and-activities/warning-letters",
            )?
            .set_default("warning_letters.user_agent", "Mozilla/5.0")?
            .set_default("warning_letters.request_timeout", 30)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "text")?
            .set_default("logging.output", "stdout")?;
        Ok(builder)
    }

    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.stores.validate()?;
        self.openfda.validate()?;
        self.warning_letters.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Command-line arguments for configuration override
#[derive(Debug, Parser)]
#[command(name = "medreg-gateway")]
#[command(about = "Regulatory data gateway for medical-device compliance research", long_about = None)]
pub struct CliArgs {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Server host address
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Contacts database file path
    #[arg(long, value_name = "PATH")]
    pub contacts_db: Option<PathBuf>,

    /// Historical-documents database file path
    #[arg(long, value_name = "PATH")]
    pub documents_db: Option<PathBuf>,

    /// openFDA API key
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout: u64, // seconds
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::InvalidServer("host cannot be empty".to_string()));
        }

        if self.port == 0 {
            return Err(ConfigError::InvalidServer(
                "port must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::InvalidServer(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        if self.allowed_origins.is_empty() {
            return Err(ConfigError::InvalidServer(
                "allowed_origins cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Locations and pool settings for the two read-only SQLite stores.
///
/// Both stores are provisioned and maintained outside this service; the
/// gateway only ever reads them.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub contacts_path: PathBuf,
    pub documents_path: PathBuf,
    pub pool_size: u32,
    pub busy_timeout: u64, // milliseconds
}

impl StoreConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.contacts_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidStores(
                "contacts_path cannot be empty".to_string(),
            ));
        }

        if self.documents_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidStores(
                "documents_path cannot be empty".to_string(),
            ));
        }

        if self.pool_size == 0 {
            return Err(ConfigError::InvalidStores(
                "pool_size must be greater than 0".to_string(),
            ));
        }

        if self.busy_timeout == 0 {
            return Err(ConfigError::InvalidStores(
                "busy_timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Upstream openFDA endpoints and credentials.
///
/// An empty `api_key` passes validation: the key's absence is surfaced as a
/// per-request configuration error by the endpoints that need it, not as a
/// startup failure.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenFdaConfig {
    pub api_key: String,
    pub enforcement_url: String,
    pub event_url: String,
    pub result_limit: u32,
    pub request_timeout: u64, // seconds
}

impl OpenFdaConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enforcement_url.is_empty() {
            return Err(ConfigError::InvalidOpenFda(
                "enforcement_url cannot be empty".to_string(),
            ));
        }

        if self.event_url.is_empty() {
            return Err(ConfigError::InvalidOpenFda(
                "event_url cannot be empty".to_string(),
            ));
        }

        if self.result_limit == 0 {
            return Err(ConfigError::InvalidOpenFda(
                "result_limit must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::InvalidOpenFda(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WarningLetterConfig {
    pub search_url: String,
    pub user_agent: String,
    pub request_timeout: u64, // seconds
}

impl WarningLetterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_url.is_empty() {
            return Err(ConfigError::InvalidWarningLetters(
                "search_url cannot be empty".to_string(),
            ));
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::InvalidWarningLetters(
                "user_agent cannot be empty".to_string(),
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::InvalidWarningLetters(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub output: String,
    pub log_file: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.as_str()) {
            return Err(ConfigError::InvalidLogging(format!(
                "level must be one of: {:?}",
                valid_levels
            )));
        }

        let valid_formats = ["json", "text"];
        if !valid_formats.contains(&self.format.as_str()) {
            return Err(ConfigError::InvalidLogging(format!(
                "format must be one of: {:?}",
                valid_formats
            )));
        }

        let valid_outputs = ["stdout", "file"];
        if !valid_outputs.contains(&self.output.as_str()) {
            return Err(ConfigError::InvalidLogging(format!(
                "output must be one of: {:?}",
                valid_outputs
            )));
        }

        if self.output == "file" && self.log_file.is_none() {
            return Err(ConfigError::InvalidLogging(
                "log_file must be specified when output is 'file'".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5001,
                request_timeout: 30,
                allowed_origins: vec!["*".to_string()],
            },
            stores: StoreConfig {
                contacts_path: PathBuf::from("./data/contact_info.db"),
                documents_path: PathBuf::from("./data/historical_documents.db"),
                pool_size: 4,
                busy_timeout: 5000,
            },
            openfda: OpenFdaConfig {
                api_key: String::new(),
                enforcement_url: "https://api.fda.gov/device/enforcement.json".to_string(),
                event_url: "https://api.fda.gov/device/event.json".to_string(),
                result_limit: 100,
                request_timeout: 30,
            },
            warning_letters: WarningLetterConfig {
                search_url: "https://www.fda.gov/warning-letters".to_string(),
                user_agent: "Mozilla/5.0".to_string(),
                request_timeout: 30,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "text".to_string(),
                output: "stdout".to_string(),
                log_file: None,
            },
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::from_env().expect("defaults should load");
        assert_eq!(config.server.port, 5001);
        assert_eq!(config.openfda.result_limit, 100);
        assert!(config
            .openfda
            .enforcement_url
            .starts_with("https://api.fda.gov/"));
        config.validate().expect("defaults should validate");
    }

    #[test]
    fn test_empty_api_key_is_allowed() {
        let config = base_config();
        assert!(config.openfda.api_key.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_server_config() {
        let mut config = base_config();
        config.server.host = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidServer(_))
        ));
    }

    #[test]
    fn test_invalid_store_config() {
        let mut config = base_config();
        config.stores.pool_size = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidStores(_))
        ));
    }

    #[test]
    fn test_invalid_logging_config() {
        let mut config = base_config();
        config.logging.output = "file".to_string();
        config.logging.log_file = None;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLogging(_))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let result = Config::from_file(Path::new("/nonexistent/medreg.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
