//! # Configuration System
//!
//! Typed configuration for the task summarizer service. Values come from
//! defaults overridden by `TASKSUM_`-prefixed environment variables
//! (`TASKSUM_DATABASE__URL`, `TASKSUM_SUMMARIZER__ENDPOINT`, ...), with a
//! `DATABASE_URL` fallback for the store connection string.
//!
//! The engine never reads configuration itself: bootstrap loads this struct
//! and passes each section to the component that owns it.

use config::{Config, Environment};
use serde::{Deserialize, Serialize};

use crate::error::{TasksumError, TasksumResult};

/// Database connection and pooling configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Postgres connection string
    #[serde(default)]
    pub url: String,
    /// Connection pool size
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Pool acquire timeout in milliseconds
    #[serde(default = "default_acquire_timeout_ms")]
    pub acquire_timeout_ms: u64,
}

/// Summarization service endpoint configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummarizerConfig {
    /// Endpoint URL of the external summarization service
    #[serde(default = "default_summarizer_endpoint")]
    pub endpoint: String,
    /// Bearer credential for the summarization service
    #[serde(default)]
    pub api_key: String,
    /// Request timeout in milliseconds
    #[serde(default = "default_summarizer_timeout_ms")]
    pub timeout_ms: u64,
}

/// Web server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebConfig {
    /// Address the HTTP listener binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

/// Root configuration for the service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TasksumConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub summarizer: SummarizerConfig,
    #[serde(default)]
    pub web: WebConfig,
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout_ms() -> u64 {
    5_000
}

fn default_summarizer_endpoint() -> String {
    "http://localhost:8000/summarize".to_string()
}

fn default_summarizer_timeout_ms() -> u64 {
    30_000
}

fn default_bind_address() -> String {
    "0.0.0.0:3000".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            acquire_timeout_ms: default_acquire_timeout_ms(),
        }
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_summarizer_endpoint(),
            api_key: String::new(),
            timeout_ms: default_summarizer_timeout_ms(),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

impl Default for TasksumConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            summarizer: SummarizerConfig::default(),
            web: WebConfig::default(),
        }
    }
}

impl TasksumConfig {
    /// Load configuration from environment variables over defaults.
    pub fn load() -> TasksumResult<Self> {
        let source = Config::builder()
            .add_source(Environment::with_prefix("TASKSUM").separator("__"))
            .build()
            .map_err(|e| TasksumError::ConfigurationError(e.to_string()))?;

        let mut cfg: TasksumConfig = source
            .try_deserialize()
            .map_err(|e| TasksumError::ConfigurationError(e.to_string()))?;

        // Conventional fallback for the store connection string
        if cfg.database.url.is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                cfg.database.url = url;
            }
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate the loaded configuration before any component consumes it.
    pub fn validate(&self) -> TasksumResult<()> {
        if self.database.url.is_empty() {
            return Err(TasksumError::ConfigurationError(
                "database.url is required (set TASKSUM_DATABASE__URL or DATABASE_URL)".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(TasksumError::ConfigurationError(
                "database.max_connections must be greater than zero".to_string(),
            ));
        }
        if self.summarizer.endpoint.is_empty() {
            return Err(TasksumError::ConfigurationError(
                "summarizer.endpoint is required".to_string(),
            ));
        }
        if self.summarizer.timeout_ms == 0 {
            return Err(TasksumError::ConfigurationError(
                "summarizer.timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.web.bind_address.is_empty() {
            return Err(TasksumError::ConfigurationError(
                "web.bind_address is required".to_string(),
            ));
        }
        Ok(())
    }
}
