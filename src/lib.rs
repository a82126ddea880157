use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;

use config::Config;

/// Build the service router around an already loaded config
///
/// Request bodies over `max_content_length` are rejected with 413 on every route,
/// whether or not the handler reads the body.
pub fn app(config: Arc<Config>) -> Router {
    let body_limit = config.max_content_length;

    Router::new()
        .route("/api/health", get(handlers::health))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}
