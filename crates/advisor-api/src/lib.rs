//! Advisor API - REST server
//!
//! Exposes the RAG query endpoint and the welcome route, with permissive
//! CORS and a catch-all panic handler so every failure reaches the caller
//! as a JSON 500.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::root::root_handler,
        handlers::health::health_handler,
        handlers::query::query_handler,
    ),
    components(schemas(
        handlers::root::WelcomeResponse,
        handlers::health::HealthResponse,
        handlers::query::QueryRequest,
        handlers::query::QueryResponse,
        error::ErrorBody,
    )),
    tags(
        (name = "query", description = "RAG query endpoints"),
        (name = "root", description = "Service information")
    )
)]
pub struct ApiDoc;

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // Wildcard origins with credentials is not expressible in CORS, so the
    // request's own origin/method/headers are mirrored back instead.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .merge(routes::api_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
