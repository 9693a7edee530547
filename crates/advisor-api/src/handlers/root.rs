//! Root/welcome handler

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Welcome message body
#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeResponse {
    /// Fixed welcome message
    #[schema(example = "Welcome to the RAG REST API")]
    pub message: String,
}

/// Welcome endpoint, independent of index or downstream-service state
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeResponse)
    )
)]
pub async fn root_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the RAG REST API".to_string(),
    })
}
