//! Advisor Recommend - downstream recommendation lookup
//!
//! Performs a single HTTP POST to a fixed URL, forwarding the caller's
//! payload verbatim and extracting the `recommendations` key from the JSON
//! response. No retries and no timeout beyond the reqwest defaults.

use advisor_core::{AdvisorError, RecommendationConfig, RecommendationSource, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Client for the external recommendation service
pub struct RecommendationClient {
    client: Client,
    url: String,
}

impl RecommendationClient {
    /// Create a new client for a fixed service URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Create from config
    pub fn from_config(config: &RecommendationConfig) -> Self {
        Self::new(config.url.clone())
    }
}

#[async_trait]
impl RecommendationSource for RecommendationClient {
    async fn fetch(&self, payload: &Value) -> Result<Vec<Value>> {
        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| AdvisorError::Recommendation(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AdvisorError::Recommendation(format!(
                "Service returned status {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AdvisorError::Recommendation(format!("Failed to parse response: {e}")))?;

        // Missing or non-array `recommendations` is an empty result, not an error
        let recommendations = body
            .get("recommendations")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        tracing::debug!("Fetched {} recommendations", recommendations.len());

        Ok(recommendations)
    }
}
