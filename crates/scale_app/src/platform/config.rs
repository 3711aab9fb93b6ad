use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use scale_core::StatusClassifier;
use scale_engine::BackendConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::{LogConfig, LogDestination};

const DEFAULT_CONFIG_FILENAME: &str = "scale_terminal.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Deployment settings, read from RON and overridable on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    /// Backend base address. Unset falls back to a local development address.
    pub backend_url: Option<String>,
    pub poll_interval_ms: u64,
    /// Directory backing the persistent credential store.
    pub storage_dir: PathBuf,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: Option<u64>,
    /// Extra words that mark a commit reply as successful.
    pub success_terms: Vec<String>,
    pub log: LogConfig,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            poll_interval_ms: 1000,
            storage_dir: PathBuf::from("./.scale_terminal"),
            connect_timeout_ms: 10_000,
            request_timeout_ms: None,
            success_terms: Vec::new(),
            log: LogConfig::default(),
        }
    }
}

impl ScaleConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn backend_config(&self) -> BackendConfig {
        BackendConfig {
            base_url: self
                .backend_url
                .clone()
                .unwrap_or_else(|| BackendConfig::DEFAULT_BASE_URL.to_string()),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: self.request_timeout_ms.map(Duration::from_millis),
        }
    }

    pub fn classifier(&self) -> StatusClassifier {
        self.success_terms
            .iter()
            .fold(StatusClassifier::default(), |classifier, term| {
                classifier.with_success_term(term.as_str())
            })
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "poll_interval_ms must be positive".to_string(),
            ));
        }
        if matches!(self.backend_url.as_deref(), Some(url) if url.trim().is_empty()) {
            return Err(ConfigError::Invalid("backend_url is empty".to_string()));
        }
        Ok(self)
    }
}

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "scale_terminal")]
#[command(about = "Operator terminal for the AI digital scale")]
pub struct Cli {
    /// RON config file (defaults to ./scale_terminal.ron when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Backend base address, e.g. http://10.0.0.5:4000
    #[arg(long, env = "SCALE_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Telemetry poll interval in milliseconds
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,

    /// Directory holding the persistent `token` and `client_id` files
    #[arg(long)]
    pub storage_dir: Option<PathBuf>,

    /// Where logs go
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Loads the config file and applies command line overrides.
pub fn resolve(cli: Cli) -> Result<ScaleConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => ScaleConfig::load(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILENAME);
            if default_path.exists() {
                ScaleConfig::load(default_path)?
            } else {
                ScaleConfig::default()
            }
        }
    };

    if let Some(url) = cli.backend_url {
        config.backend_url = Some(url);
    }
    if let Some(interval) = cli.poll_interval_ms {
        config.poll_interval_ms = interval;
    }
    if let Some(dir) = cli.storage_dir {
        config.storage_dir = dir;
    }
    if let Some(destination) = cli.log {
        config.log.destination = destination;
    }
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }

    config.validate()
}
