//! Process-wide configuration, fixed at startup
//!
//! There is deliberately no config file: the CSV path and result count
//! come from CLI flags (with env fallbacks wired through clap) and
//! everything else has a default.

use std::env;
use std::path::PathBuf;

use crate::ranking::DEFAULT_TOP_N;

/// Name the scraping job writes its output under
pub const DEFAULT_CSV_FILE: &str = "scrapping_results.csv";

/// Environment variable overriding the server log location
pub const LOGS_PATH_ENV: &str = "SCOUT_LOGS_PATH";

/// Search-time configuration shared by the CLI and the server
#[derive(Debug, Clone)]
pub struct SearchConfig {
  /// Path to the scraped article CSV
  pub csv_path: PathBuf,
  /// Number of results a search returns
  pub top_n: usize,
}

impl Default for SearchConfig {
  fn default() -> Self {
    Self { csv_path: PathBuf::from(DEFAULT_CSV_FILE), top_n: DEFAULT_TOP_N }
  }
}

impl SearchConfig {
  /// Build a config from optional flag values, falling back to defaults
  pub fn resolve(csv_path: Option<PathBuf>, top_n: Option<usize>) -> Self {
    let mut config = Self::default();
    if let Some(path) = csv_path {
      config.csv_path = path;
    }
    if let Some(top_n) = top_n {
      config.top_n = top_n;
    }
    config
  }
}

/// Where the server writes its JSONL request log
pub fn server_logs_path() -> PathBuf {
  if let Ok(path) = env::var(LOGS_PATH_ENV) {
    if !path.is_empty() {
      return PathBuf::from(path);
    }
  }

  dirs::home_dir()
    .unwrap_or_else(|| PathBuf::from("/tmp"))
    .join(".scout")
    .join("server.logs.jsonl")
}
