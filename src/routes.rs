//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`        - Short link redirect
//! - `GET  /health`        - Health check
//! - `POST /api/shorten`   - Create a short link
//!
//! # Middleware (outermost first)
//!
//! - **Path normalization** - Trailing slash handling
//! - **Request id** - `x-request-id` assigned and echoed
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Panics become `500` responses

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{recover, request_id, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware, without path normalization.
///
/// Path normalization has to wrap the router from the outside, which changes
/// its type; tests drive this router directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(recover::layer())
        .layer(tracing::layer())
        .layer(request_id::propagate_layer())
        .layer(request_id::set_layer())
}

/// Constructs the application service served by [`crate::server::run`].
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
