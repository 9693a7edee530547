//! API route definitions

use crate::handlers::{health, query, root};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Create API routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root::root_handler))
        .route("/health", get(health::health_handler))
        .route("/query", post(query::query_handler))
}
