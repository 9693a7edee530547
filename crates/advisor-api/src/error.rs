//! API error handling
//!
//! Every failure surfaces to the caller as HTTP 500 with a JSON body
//! carrying a single `detail` field, mirroring the upstream contract.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use utoipa::ToSchema;

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error description
    pub detail: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Index/query failure (retrieval or generation)
    Query(String),
    /// Downstream recommendation failure
    Recommendation(String),
    /// Anything else
    Unexpected(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let detail = match self {
            AppError::Query(msg) => format!("Error processing query: {msg}"),
            AppError::Recommendation(msg) => format!("Error fetching recommendations: {msg}"),
            AppError::Unexpected(msg) => format!("Unexpected error: {msg}"),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { detail })).into_response()
    }
}

/// Convert a panic escaping a handler into the same JSON 500 shape.
/// Wired into the router via `CatchPanicLayer`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let msg = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Handler panicked: {msg}");

    AppError::Unexpected(msg).into_response()
}
