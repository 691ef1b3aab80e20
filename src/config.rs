use serde::Deserialize;
use crate::v_info;
use reqwest::header::HeaderValue;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AirwaysConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    /// File this configuration was read from, if any
    #[serde(skip)]
    pub loaded_from: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root of the REST API, including the trailing slash
    pub base_url: String,
    /// First page of the pilot collection, relative to `base_url`
    pub people_path: String,
    /// First page of the starship collection, relative to `base_url`
    pub starships_path: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 0 = quiet, 1 = progress, 2 = every request and skipped item
    pub verbosity: u8,
    /// Append one line per API call to this file when set
    pub api_log_path: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: crate::API_BASE_URL.to_string(),
            people_path: "people/?page=1".to_string(),
            starships_path: "starships/?page=1".to_string(),
            user_agent: format!("intergalactic_airways/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            api_log_path: None,
        }
    }
}

impl Default for AirwaysConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
            loaded_from: None,
        }
    }
}

impl AirwaysConfig {
    /// Load configuration from a TOML file. Missing keys fall back to defaults.
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config_path = config_path.as_ref();
        let config_str = fs::read_to_string(config_path).map_err(|source| ConfigError::Io {
            path: config_path.display().to_string(),
            source,
        })?;
        let mut config = Self::from_toml(&config_str)?;
        config.loaded_from = Some(config_path.to_path_buf());
        Ok(config)
    }

    pub fn from_toml(config_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(config_str)?)
    }

    pub fn people_url(&self) -> String {
        format!("{}{}", self.api.base_url, self.api.people_path)
    }

    pub fn starships_url(&self) -> String {
        format!("{}{}", self.api.base_url, self.api.starships_path)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = &self.api.base_url;
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "base_url must be an http(s) URL, got '{}'",
                base
            )));
        }
        if !base.ends_with('/') {
            return Err(ConfigError::Invalid("base_url must end with '/'".to_string()));
        }
        if self.api.people_path.trim().is_empty() {
            return Err(ConfigError::Invalid("people_path must not be empty".to_string()));
        }
        if self.api.starships_path.trim().is_empty() {
            return Err(ConfigError::Invalid("starships_path must not be empty".to_string()));
        }
        if let Err(e) = HeaderValue::from_str(&self.api.user_agent) {
            return Err(ConfigError::Invalid(format!(
                "user_agent is not a valid header value: {}",
                e
            )));
        }
        if self.logging.verbosity > crate::verbosity::MAX_VERBOSITY {
            return Err(ConfigError::Invalid(format!(
                "verbosity must be between 0 and {}",
                crate::verbosity::MAX_VERBOSITY
            )));
        }
        Ok(())
    }

    /// Print configuration summary
    pub fn print_summary(&self) {
        match &self.loaded_from {
            Some(path) => {
                v_info!("📋 Configuration Summary ({}):", path.display());
            }
            None => {
                v_info!("📋 Configuration Summary (defaults):");
            }
        }
        v_info!("   🌐 API: {}", self.api.base_url);
        v_info!("   👤 Pilots: {}", self.people_url());
        v_info!("   🚀 Starships: {}", self.starships_url());
        if let Some(path) = &self.logging.api_log_path {
            v_info!("   📝 API log: {}", path.display());
        }
    }
}

/// Command line arguments. Flags override values from `--config`.
#[derive(Debug, clap::Parser)]
#[command(name = "intergalactic_airways", version, about = "Find ship and pilot pairs that can carry your passengers")]
pub struct Cli {
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the API base URL (must end with '/')
    #[arg(long)]
    pub base_url: Option<String>,

    /// Increase diagnostic output (-v progress, -vv full)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Append every API call to this file
    #[arg(long)]
    pub api_log: Option<PathBuf>,
}

impl Cli {
    /// Resolve the effective configuration: file (if any), then flags, then validation.
    pub fn resolve_config(&self) -> Result<AirwaysConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => AirwaysConfig::load(path)?,
            None => AirwaysConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if self.verbose > 0 {
            config.logging.verbosity = self.verbose.min(crate::verbosity::MAX_VERBOSITY);
        }
        if let Some(path) = &self.api_log {
            config.logging.api_log_path = Some(path.clone());
        }

        config.validate()?;
        Ok(config)
    }
}
