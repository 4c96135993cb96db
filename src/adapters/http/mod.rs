//! HTTP adapters - REST API implementations.
//!
//! `build_router` assembles the analytics routes with the health check,
//! a JSON 404 fallback and the tower-http layers.

pub mod analytics;

pub use analytics::{analytics_routes, AnalyticsAppState, ErrorResponse};

use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::domain::foundation::ErrorCode;
use analytics::HealthResponse;

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(ErrorCode::RouteNotFound, "No such route")),
    )
}

/// Builds the CORS layer from the configured origins.
///
/// No configured origins allows any origin.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}

/// Creates the full application router.
pub fn build_router(state: AnalyticsAppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(analytics_routes(state))
        .fallback(route_not_found)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}
