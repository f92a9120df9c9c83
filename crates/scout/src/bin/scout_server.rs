//! Scout REST Server
//!
//! HTTP API for searching scraped articles by textual similarity.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use scout::config::SearchConfig;
use scout::server::startup::start_server;

#[derive(Parser)]
#[command(name = "scout_server")]
#[command(about = "Scout REST API Server")]
#[command(version)]
struct Args {
  /// Server bind address
  #[arg(long, env = "SCOUT_BIND", default_value = "127.0.0.1:3000")]
  bind: SocketAddr,

  /// Path to the scraped article CSV
  #[arg(long, env = "SCOUT_ARTICLES_CSV")]
  csv: Option<PathBuf>,

  /// Number of results a search returns
  #[arg(long, env = "SCOUT_TOP_N")]
  top_n: Option<usize>,

  /// Enable verbose logging
  #[arg(short, long)]
  verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let filter = if args.verbose {
    EnvFilter::new("debug,hyper=info")
  } else {
    EnvFilter::new("scout=info,tower_http=info,warn")
  };

  tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

  herald::info!(&format!("Starting scout server v{}", env!("CARGO_PKG_VERSION")));
  herald::info!(&format!("Binding to address: {}", args.bind));

  start_server(args.bind, SearchConfig::resolve(args.csv, args.top_n)).await?;

  Ok(())
}
