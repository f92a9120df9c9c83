//! REST server startup and configuration

use std::net::SocketAddr;

use anyhow::Result;
use axum::serve;
use herald::request_logs::RequestLogs;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::{self, SearchConfig};
use crate::server::middleware::init_global_logs;
use crate::server::routing::create_router;
use crate::server::state::AppState;

/// Start the REST server
pub async fn start_server(addr: SocketAddr, config: SearchConfig) -> Result<()> {
  // Persistent request logging shared by the middleware and /logs
  let logs = RequestLogs::new(config::server_logs_path())?;
  let _ = init_global_logs(logs.clone());

  logs
    .info(
      &format!("Starting article search server on {addr} (store: {})", config.csv_path.display()),
      "scout-server",
    )
    .await;

  let app = create_router(AppState { config, logs: logs.clone() }).layer(
    ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive()),
  );

  let listener = TcpListener::bind(addr).await?;
  logs.info(&format!("Server listening on {addr}"), "scout-server").await;

  match serve(listener, app).await {
    Ok(_) => {
      logs.info("Server shutdown gracefully", "scout-server").await;
      Ok(())
    }
    Err(e) => {
      logs.error(&format!("Server error: {e}"), "scout-server").await;
      Err(anyhow::anyhow!("Server error: {e}"))
    }
  }
}
