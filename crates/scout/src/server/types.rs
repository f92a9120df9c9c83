//! Typed request and response bodies for the REST API

use serde::{Deserialize, Serialize};

use crate::ranking::RankedArticle;

// Health & Version
// ================

/// Response for `GET /` - describes the service and its operations
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
  /// Always "ok" when the process is serving
  pub status: String,

  /// Human-readable service banner
  pub message: String,

  /// Route summaries for discoverability
  pub endpoints: EndpointList,
}

/// Human-readable route summaries for the health payload
#[derive(Debug, Serialize, Deserialize)]
pub struct EndpointList {
  pub search: String,
  pub articles: String,
  pub logs: String,
}

/// Response for `GET /version`
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResponse {
  pub version: String,
}

// Search
// ======

/// Body for `POST /search`
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchRequest {
  /// Free text or keywords to match articles against
  #[serde(default)]
  pub query: String,
}

/// Query-string form for `GET /search`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
  #[serde(default)]
  pub q: String,
}

/// Response for both search routes
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
  /// The query as received
  pub query: String,

  /// How many articles the store produced
  pub total_articles: usize,

  /// How many of them matched
  pub results_count: usize,

  /// Ranked result summaries, best first
  pub results: Vec<RankedArticle>,
}

// Articles
// ========

/// Response for `GET /articles`
#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
  pub total_articles: usize,
  pub csv_file: String,
  pub file_exists: bool,
}

// Logs
// ====

/// Query parameters for `GET /logs`
#[derive(Debug, Deserialize)]
pub struct LogsParams {
  pub limit: Option<usize>,
  pub level: Option<String>,
}

/// Response for `GET /logs`
#[derive(Debug, Serialize, Deserialize)]
pub struct LogsResponse {
  pub logs: Vec<herald::request_logs::LogEntry>,
}

// Errors
// ======

/// Error payload carried by every non-2xx response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
  /// Human readable error message
  pub error: String,

  /// Present (and empty) on search misses so clients can always read
  /// `results` off a search response
  #[serde(skip_serializing_if = "Option::is_none")]
  pub results: Option<Vec<RankedArticle>>,
}

impl ErrorResponse {
  /// Create a new error payload
  pub fn new(message: &str) -> Self {
    Self { error: message.to_string(), results: None }
  }

  /// Search-shaped error carrying an empty result list
  pub fn with_empty_results(message: &str) -> Self {
    Self { error: message.to_string(), results: Some(Vec::new()) }
  }
}
