//! Health and version endpoint handlers

use axum::response::Json as ResponseJson;

use crate::server::types::{EndpointList, HealthResponse, VersionResponse};

/// GET / - Health check describing the available operations
pub async fn health() -> ResponseJson<HealthResponse> {
  ResponseJson(HealthResponse {
    status: "ok".to_string(),
    message: "Article search API is running".to_string(),
    endpoints: EndpointList {
      search: "POST /search with {\"query\": ...} or GET /search?q=... - rank articles by similarity"
        .to_string(),
      articles: "GET /articles - total number of scraped articles".to_string(),
      logs: "GET /logs - recent request log entries".to_string(),
    },
  })
}

/// GET /version - Returns the running server version
pub async fn version() -> ResponseJson<VersionResponse> {
  ResponseJson(VersionResponse { version: env!("CARGO_PKG_VERSION").to_string() })
}
