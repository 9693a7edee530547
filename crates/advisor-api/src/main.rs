//! Advisor API server
//!
//! Wires the document index, the Ollama-backed query engine, and the
//! recommendation client together and serves the HTTP surface.

use advisor_api::{create_router, state::AppState};
use advisor_core::AppConfig;
use advisor_rag::{DocumentIndex, OllamaClient, QueryEngine, RagConfig};
use advisor_recommend::RecommendationClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so the configured log level can serve as
    // the tracing filter fallback. A TOML file wins over the environment
    // when CONFIG_PATH is set.
    let config = match std::env::var("CONFIG_PATH") {
        Ok(path) => AppConfig::from_file(path)?,
        Err(_) => AppConfig::from_env()?,
    };

    // Initialize tracing; RUST_LOG still takes precedence when set
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(filter_directives(&config.logging.level))
            }),
        )
        .init();

    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Build the document index once, before any request is served.
    // Ingestion is an external input: a JSON file of records, or nothing.
    let documents = match &config.index.documents_path {
        Some(path) => {
            let docs = advisor_rag::load_documents(path)?;
            tracing::info!("Loaded {} documents from {}", docs.len(), path.display());
            docs
        }
        None => {
            tracing::warn!("No documents path configured; index starts empty");
            Vec::new()
        }
    };
    let index = DocumentIndex::from_documents(documents);

    let llm_client = Arc::new(OllamaClient::from_config(&config.llm));
    let engine = QueryEngine::new(index, llm_client, RagConfig::from(&config.index));
    let recommendations = RecommendationClient::from_config(&config.recommendation);

    // Create application state
    let state = Arc::new(AppState::new(
        config,
        Arc::new(engine),
        Arc::new(recommendations),
    ));

    // Create router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Advisor API server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Default tracing directives for the configured log level
fn filter_directives(level: &str) -> String {
    format!("advisor_api={level},tower_http={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives_use_configured_level() {
        assert_eq!(filter_directives("warn"), "advisor_api=warn,tower_http=warn");
        assert_eq!(
            filter_directives(&advisor_core::AppConfig::default().logging.level),
            "advisor_api=info,tower_http=info"
        );
    }
}
