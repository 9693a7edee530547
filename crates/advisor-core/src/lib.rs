//! Advisor Core - Domain models, traits, and shared types
//!
//! This crate defines the core abstractions used throughout the advisor
//! service:
//! - Document model and ingestion-record conversion
//! - Common error types
//! - Capability traits for the answer engine, the recommendation source,
//!   and the LLM client
//! - Configuration management

pub mod config;

pub use config::{AppConfig, ConfigError, IndexConfig, LlmConfig, RecommendationConfig, ServerConfig};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

// ============================================================================
// Error Types
// ============================================================================

/// Core error types for advisor operations
#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Query error: {0}")]
    Query(String),

    #[error("Recommendation error: {0}")]
    Recommendation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;

// ============================================================================
// Document Model
// ============================================================================

/// A titled text unit held by the document index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier, assigned at ingestion
    pub id: Uuid,

    /// Document title
    pub title: String,

    /// Document body
    pub content: String,
}

impl Document {
    /// Create a new document with a fresh id
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Text indexed for retrieval: title and content joined by a newline
    pub fn full_text(&self) -> String {
        format!("{}\n{}", self.title, self.content)
    }
}

/// A generic key-value record as produced by an external ingestion step.
///
/// Missing `title` or `content` keys default to the empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,
}

impl From<DocumentRecord> for Document {
    fn from(record: DocumentRecord) -> Self {
        Document::new(record.title, record.content)
    }
}

// ============================================================================
// Capability Traits
// ============================================================================

/// Trait for the retrieval-plus-generation engine behind `/query`
#[async_trait::async_trait]
pub trait AnswerEngine: Send + Sync {
    /// Answer a question against the current document corpus
    async fn answer(&self, question: &str) -> Result<String>;
}

/// Trait for the downstream recommendation lookup
#[async_trait::async_trait]
pub trait RecommendationSource: Send + Sync {
    /// Forward `payload` to the recommendation service and return the
    /// ordered sequence it produced
    async fn fetch(&self, payload: &Value) -> Result<Vec<Value>>;
}

/// Trait for LLM clients
#[async_trait::async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate a response
    async fn generate(&self, prompt: &str) -> Result<String>;
}

// ============================================================================
// Tests
// ============================================================================
