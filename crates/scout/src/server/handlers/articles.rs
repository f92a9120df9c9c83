//! Article count endpoint handler

use std::sync::Arc;

use axum::{
  extract::{Extension, State},
  response::Json as ResponseJson,
};

use crate::server::middleware::RequestContext;
use crate::server::state::AppState;
use crate::server::types::CountResponse;
use crate::store;

/// GET /articles - Total article count and store presence
pub async fn count(
  State(state): State<Arc<AppState>>,
  Extension(context): Extension<RequestContext>,
) -> ResponseJson<CountResponse> {
  let articles = store::load_articles(&state.config.csv_path);

  context
    .log_info(&format!("Counted {} articles in the store", articles.len()), "articles-api")
    .await;

  ResponseJson(CountResponse {
    total_articles: articles.len(),
    csv_file: state.config.csv_path.display().to_string(),
    file_exists: state.config.csv_path.exists(),
  })
}
