//! Advisor RAG - retrieval-augmented answer engine
//!
//! This crate implements the query side of the service: an immutable
//! in-memory document index built once at startup, a prompt assembled from
//! the retrieved context, and a call to the LLM backend to generate the
//! final answer.

use advisor_core::{AdvisorError, AnswerEngine, Document, DocumentRecord, IndexConfig, LlmClient, Result};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

pub mod llm;

pub use llm::OllamaClient;

// ============================================================================
// Configuration
// ============================================================================

/// Answer engine configuration
#[derive(Debug, Clone)]
pub struct RagConfig {
    /// Number of documents retrieved per query
    pub top_k: usize,

    /// Maximum context length for the prompt (in characters)
    pub max_context_length: usize,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            max_context_length: 8000,
        }
    }
}

impl From<&IndexConfig> for RagConfig {
    fn from(config: &IndexConfig) -> Self {
        Self {
            top_k: config.top_k,
            max_context_length: config.max_context_length,
        }
    }
}

// ============================================================================
// Document Index
// ============================================================================

/// Immutable in-memory retrieval index over a document collection.
///
/// Built once before the server starts accepting requests; concurrent reads
/// need no locking.
pub struct DocumentIndex {
    documents: Vec<Document>,
}

/// A retrieved document with its relevance score
#[derive(Debug, Clone)]
pub struct RetrievedDocument<'a> {
    pub document: &'a Document,
    pub score: f32,
}

impl DocumentIndex {
    /// Build an index from a (possibly empty) document collection
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Retrieve the `top_k` documents most relevant to `question`,
    /// ranked by term overlap with the indexed text
    pub fn search(&self, question: &str, top_k: usize) -> Vec<RetrievedDocument<'_>> {
        let keywords = extract_keywords(question);
        if keywords.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<RetrievedDocument<'_>> = self
            .documents
            .iter()
            .filter_map(|doc| {
                let score = overlap_score(&keywords, &doc.full_text());
                (score > 0.0).then_some(RetrievedDocument { document: doc, score })
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());
        scored.truncate(top_k);
        scored
    }
}

/// Extract lowercased keywords, filtering stopwords and single characters
fn extract_keywords(text: &str) -> Vec<String> {
    let stopwords = [
        "the", "a", "an", "is", "are", "was", "were", "what", "how", "why", "who", "which",
        "do", "does", "can", "of", "to", "in", "on", "for", "and", "or",
    ];
    text.split(|c: char| !c.is_alphanumeric())
        .map(|w| w.to_lowercase())
        .filter(|w| w.len() > 1 && !stopwords.contains(&w.as_str()))
        .collect()
}

/// Fraction of query keywords present in the document text
fn overlap_score(keywords: &[String], text: &str) -> f32 {
    let terms: HashSet<String> = extract_keywords(text).into_iter().collect();
    let hits = keywords.iter().filter(|k| terms.contains(*k)).count();
    hits as f32 / keywords.len() as f32
}

// ============================================================================
// Ingestion
// ============================================================================

/// Load document records from a JSON file (an array of objects with
/// `title` and `content` keys)
pub fn load_documents(path: impl AsRef<Path>) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| AdvisorError::Config(format!("Failed to read {}: {e}", path.display())))?;

    let records: Vec<DocumentRecord> = serde_json::from_str(&content)
        .map_err(|e| AdvisorError::Config(format!("Failed to parse {}: {e}", path.display())))?;

    Ok(records.into_iter().map(Document::from).collect())
}

// ============================================================================
// Query Engine
// ============================================================================

/// Retrieval-plus-generation engine behind `/query`
pub struct QueryEngine {
    /// Immutable document index
    index: DocumentIndex,

    /// LLM client
    llm_client: Arc<dyn LlmClient>,

    /// Configuration
    config: RagConfig,
}

impl QueryEngine {
    /// Create a new engine over an already-built index
    pub fn new(index: DocumentIndex, llm_client: Arc<dyn LlmClient>, config: RagConfig) -> Self {
        Self {
            index,
            llm_client,
            config,
        }
    }

    /// Assemble the generation prompt from the retrieved context
    fn build_prompt(&self, question: &str, results: &[RetrievedDocument<'_>]) -> String {
        let mut prompt = String::new();

        prompt.push_str("<s>\n");
        prompt.push_str("You are a knowledgeable startup advisor.\n");
        prompt.push_str("Answer the question using only the provided context.\n");
        prompt.push_str(
            "If the context does not contain the answer, say so instead of guessing.\n",
        );
        prompt.push_str("</s>\n\n");

        prompt.push_str("<context>\n");
        let mut total_length = 0;
        for (i, result) in results.iter().enumerate() {
            let text = result.document.full_text();
            if total_length + text.len() > self.config.max_context_length {
                break;
            }

            prompt.push_str(&format!("[{}] {}\n", i + 1, result.document.title));
            prompt.push_str(&text);
            prompt.push_str("\n\n");

            total_length += text.len();
        }
        prompt.push_str("</context>\n\n");

        prompt.push_str("<question>\n");
        prompt.push_str(question);
        prompt.push_str("\n</question>\n");

        prompt
    }
}

#[async_trait::async_trait]
impl AnswerEngine for QueryEngine {
    async fn answer(&self, question: &str) -> Result<String> {
        let start = Instant::now();

        let results = self.index.search(question, self.config.top_k);
        tracing::debug!("Retrieved {} documents for question", results.len());

        let prompt = self.build_prompt(question, &results);
        tracing::info!("Calling LLM with prompt length: {} chars", prompt.len());

        let answer = self.llm_client.generate(&prompt).await?;
        tracing::info!(
            "LLM response received: {} chars in {}ms",
            answer.len(),
            start.elapsed().as_millis()
        );

        Ok(answer)
    }
}

// ============================================================================
// Tests
// ============================================================================
