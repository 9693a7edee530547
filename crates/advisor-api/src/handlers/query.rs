//! RAG query handler

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use utoipa::ToSchema;

/// Query request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct QueryRequest {
    /// User's question. Any text, including the empty string, is valid.
    #[schema(example = "How should an early-stage startup approach hiring?")]
    pub question: String,

    /// Arbitrary JSON object forwarded verbatim to the recommendation
    /// service; its schema is owned by that service
    #[schema(value_type = Object)]
    pub startup_details: Map<String, Value>,
}

/// Query response body
#[derive(Debug, Serialize, ToSchema)]
pub struct QueryResponse {
    /// Generated answer
    pub answer: String,

    /// Recommendations exactly as returned by the downstream service,
    /// order preserved
    #[schema(value_type = Vec<Object>)]
    pub recommendations: Vec<Value>,
}

/// Answer a question using RAG, then fetch recommendations for the
/// caller-supplied startup details. The two downstream calls are strictly
/// sequential; failure of either one fails the whole request.
#[utoipa::path(
    post,
    path = "/query",
    tag = "query",
    request_body = QueryRequest,
    responses(
        (status = 200, description = "Query successful", body = QueryResponse),
        (status = 500, description = "Downstream failure", body = crate::error::ErrorBody)
    )
)]
pub async fn query_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QueryRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.increment_requests();

    let answer = state
        .engine
        .answer(&req.question)
        .await
        .map_err(|e| AppError::Query(e.to_string()))?;

    let payload = Value::Object(req.startup_details);
    let recommendations = state
        .recommendations
        .fetch(&payload)
        .await
        .map_err(|e| AppError::Recommendation(e.to_string()))?;

    Ok((
        StatusCode::OK,
        Json(QueryResponse {
            answer,
            recommendations,
        }),
    ))
}
