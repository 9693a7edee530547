//! Advisor configuration management
//!
//! Handles configuration from environment variables and config files with
//! sensible defaults for development. All values are fixed at startup and
//! passed by reference to the components that need them.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// LLM backend configuration
    pub llm: LlmConfig,

    /// Recommendation service configuration
    pub recommendation: RecommendationConfig,

    /// Document index configuration
    pub index: IndexConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Server
        if let Ok(host) = std::env::var("API_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("API_PORT") {
            config.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "API_PORT".to_string(),
                value: port,
            })?;
        }

        // LLM
        if let Ok(url) = std::env::var("OLLAMA_URL") {
            config.llm.ollama_url = url;
        }
        if let Ok(model) = std::env::var("LLM_MODEL") {
            config.llm.model = model;
        }

        // Recommendation service
        if let Ok(url) = std::env::var("RECOMMENDATION_URL") {
            config.recommendation.url = url;
        }

        // Index
        if let Ok(path) = std::env::var("DOCUMENTS_PATH") {
            config.index.documents_path = Some(PathBuf::from(path));
        }

        // Logging
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
    }

    /// Load from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::FileReadError {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path,
            message: e.to_string(),
        })
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// LLM backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Ollama server URL
    pub ollama_url: String,

    /// Model name to use
    pub model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            ollama_url: "http://127.0.0.1:7869".to_string(),
            model: "gemma2:9b".to_string(),
        }
    }
}

/// Recommendation service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// URL the startup details are POSTed to
    pub url: String,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8809/recommendations".to_string(),
        }
    }
}

/// Document index configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Optional JSON file of document records to ingest at startup.
    /// When unset the index starts empty.
    pub documents_path: Option<PathBuf>,

    /// Number of documents retrieved per query
    pub top_k: usize,

    /// Maximum context length for the prompt (in characters)
    pub max_context_length: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            documents_path: None,
            top_k: 5,
            max_context_length: 8000,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
