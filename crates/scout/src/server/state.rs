use herald::request_logs::RequestLogs;

use crate::config::SearchConfig;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
  pub config: SearchConfig,
  pub logs: RequestLogs,
}
