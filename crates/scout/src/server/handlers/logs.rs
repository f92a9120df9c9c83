//! Logs endpoint handler

use std::sync::Arc;

use axum::{
  extract::{Extension, Query, State},
  http::StatusCode,
  response::Json as ResponseJson,
};

use crate::server::middleware::RequestContext;
use crate::server::state::AppState;
use crate::server::types::{ErrorResponse, LogsParams, LogsResponse};

/// Entries returned when the client does not say how many it wants
const DEFAULT_LOG_LIMIT: usize = 50;

/// GET /logs - Recent request log entries
pub async fn get_logs(
  State(state): State<Arc<AppState>>,
  Extension(context): Extension<RequestContext>,
  Query(params): Query<LogsParams>,
) -> Result<ResponseJson<LogsResponse>, (StatusCode, ResponseJson<ErrorResponse>)> {
  let limit = params.limit.unwrap_or(DEFAULT_LOG_LIMIT);

  match state.logs.get_logs(Some(limit), params.level.as_deref()).await {
    Ok(logs) => {
      context.log_info(&format!("Retrieved {} log entries", logs.len()), "logs-api").await;
      Ok(ResponseJson(LogsResponse { logs }))
    }
    Err(e) => {
      context.log_error(&format!("Failed to read logs: {e}"), "logs-api").await;
      Err((
        StatusCode::INTERNAL_SERVER_ERROR,
        ResponseJson(ErrorResponse::new(&format!("Failed to read logs: {e}"))),
      ))
    }
  }
}
