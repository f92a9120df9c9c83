//! Axum router configuration for all endpoints

use std::sync::Arc;

use axum::{
  middleware,
  routing::get,
  Router,
};

use crate::server::handlers::{articles, logs, search, status};
use crate::server::middleware::request_context_middleware;
use crate::server::state::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    // Status and version endpoints
    .route("/", get(status::health))
    .route("/version", get(status::version))
    // Search endpoints (body query or ?q=)
    .route("/search", get(search::search_get).post(search::search))
    // Article count endpoint
    .route("/articles", get(articles::count))
    // Logs endpoint
    .route("/logs", get(logs::get_logs))
    .layer(middleware::from_fn(request_context_middleware))
    .with_state(Arc::new(state))
}
