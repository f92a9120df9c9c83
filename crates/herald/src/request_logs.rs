//! Structured request log storage
//!
//! JSONL-on-disk log storage shared between the REST server (which appends
//! an entry per request event) and anything that wants to read the history
//! back, like the `/logs` endpoint or the CLI `logs` command. Writes are
//! serialized through an internal async lock so concurrent handlers can
//! share one instance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A structured log entry for server operations
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogEntry {
  pub timestamp: DateTime<Utc>,
  pub level: String,
  pub message: String,
  pub component: String,
}

/// Internal log storage implementation
struct RequestLogsInner {
  log_file_path: std::path::PathBuf,
  silent: bool,
}

/// Thread-safe disk-based log storage using JSONL format
#[derive(Clone)]
pub struct RequestLogs {
  inner: std::sync::Arc<tokio::sync::Mutex<RequestLogsInner>>,
}

impl RequestLogsInner {
  /// Create a new log storage that writes to the specified file path
  fn new<P: AsRef<std::path::Path>>(log_file_path: P, silent: bool) -> std::io::Result<Self> {
    let log_file_path = log_file_path.as_ref().to_path_buf();

    if let Some(parent) = log_file_path.parent() {
      std::fs::create_dir_all(parent)?;
    }

    // Create the file if it doesn't exist, but never truncate an existing one
    if !log_file_path.exists() {
      std::fs::File::create(&log_file_path)?;
    }

    Ok(Self { log_file_path, silent })
  }

  /// Append an entry to the JSONL file
  fn add_log(&mut self, level: &str, message: &str, component: &str) -> std::io::Result<()> {
    let entry = LogEntry {
      timestamp: Utc::now(),
      level: level.to_string(),
      message: message.to_string(),
      component: component.to_string(),
    };

    let json_line = serde_json::to_string(&entry)
      .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    use std::fs::OpenOptions;
    use std::io::Write;

    let mut file = OpenOptions::new().create(true).append(true).open(&self.log_file_path)?;

    writeln!(file, "{json_line}")?;
    file.flush()?;

    Ok(())
  }

  /// Read entries back with optional level filtering and limiting
  fn get_logs(
    &self,
    limit: Option<usize>,
    level_filter: Option<&str>,
  ) -> std::io::Result<Vec<LogEntry>> {
    use std::fs::File;
    use std::io::{BufRead, BufReader};

    if !self.log_file_path.exists() {
      return Ok(Vec::new());
    }

    let file = File::open(&self.log_file_path)?;
    let reader = BufReader::new(file);

    let mut logs = Vec::new();

    for line_result in reader.lines() {
      let line = line_result?;
      if line.trim().is_empty() {
        continue;
      }

      // Skip malformed lines rather than failing the whole read
      let Ok(entry) = serde_json::from_str::<LogEntry>(&line) else {
        continue;
      };

      let matches_level =
        level_filter.is_none_or(|filter| filter == "all" || entry.level == filter);

      if matches_level {
        logs.push(entry);
      }
    }

    // Newest first for the limit, then back to oldest-first display order
    logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    if let Some(limit) = limit {
      logs.truncate(limit);
    }

    logs.reverse();

    Ok(logs)
  }

  fn has_logs(&self) -> bool {
    self.log_file_path.exists()
      && std::fs::metadata(&self.log_file_path).map(|m| m.len() > 0).unwrap_or(false)
  }
}

impl RequestLogs {
  /// Create a new thread-safe log storage
  pub fn new<P: AsRef<std::path::Path>>(log_file_path: P) -> std::io::Result<Self> {
    Self::new_with_silent(log_file_path, false)
  }

  /// Create a new thread-safe log storage with silent option
  pub fn new_with_silent<P: AsRef<std::path::Path>>(
    log_file_path: P,
    silent: bool,
  ) -> std::io::Result<Self> {
    let inner = RequestLogsInner::new(log_file_path, silent)?;
    Ok(Self { inner: std::sync::Arc::new(tokio::sync::Mutex::new(inner)) })
  }

  /// Add a log entry (handles locking internally)
  pub async fn add_log(&self, level: &str, message: &str, component: &str) -> std::io::Result<()> {
    let mut guard = self.inner.lock().await;
    guard.add_log(level, message, component)
  }

  /// Add a log entry (fire-and-forget, ignores errors)
  pub async fn log(&self, level: &str, message: &str, component: &str) {
    let _ = self.add_log(level, message, component).await;
  }

  /// Retrieve logs with optional filtering and limiting
  pub async fn get_logs(
    &self,
    limit: Option<usize>,
    level_filter: Option<&str>,
  ) -> std::io::Result<Vec<LogEntry>> {
    let guard = self.inner.lock().await;
    guard.get_logs(limit, level_filter)
  }

  /// Check if the log file exists and has content
  pub async fn has_logs(&self) -> bool {
    let guard = self.inner.lock().await;
    guard.has_logs()
  }

  /// Get the path to the log file
  pub async fn log_file_path(&self) -> std::path::PathBuf {
    let guard = self.inner.lock().await;
    guard.log_file_path.clone()
  }

  /// Log an info message (to disk + console unless silent)
  pub async fn info(&self, message: &str, component: &str) {
    self.log("info", message, component).await;

    let guard = self.inner.lock().await;
    if !guard.silent {
      crate::info!(message);
    }
  }

  /// Log a warning message (to disk + console unless silent)
  pub async fn warn(&self, message: &str, component: &str) {
    self.log("warn", message, component).await;

    let guard = self.inner.lock().await;
    if !guard.silent {
      crate::warn!(message);
    }
  }

  /// Log an error message (to disk + console unless silent)
  pub async fn error(&self, message: &str, component: &str) {
    self.log("error", message, component).await;

    let guard = self.inner.lock().await;
    if !guard.silent {
      crate::error!(message);
    }
  }

  /// Log a success message (to disk + console unless silent)
  pub async fn success(&self, message: &str, component: &str) {
    self.log("success", message, component).await;

    let guard = self.inner.lock().await;
    if !guard.silent {
      crate::success!(message);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  fn temp_log_path() -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("test.logs.jsonl");
    (temp_dir, log_path)
  }

  #[tokio::test]
  async fn test_new_creates_file_and_parents() {
    let temp_dir = TempDir::new().unwrap();
    let nested_path = temp_dir.path().join("nested").join("server.logs.jsonl");

    let logs = RequestLogs::new(&nested_path).unwrap();

    assert!(nested_path.exists());
    assert_eq!(logs.log_file_path().await, nested_path);
  }

  #[tokio::test]
  async fn test_add_log_writes_jsonl() {
    let (_temp_dir, log_path) = temp_log_path();
    let logs = RequestLogs::new_with_silent(&log_path, true).unwrap();

    logs.add_log("info", "Test message", "test_component").await.unwrap();

    let content = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = content.trim().split('\n').collect();
    assert_eq!(lines.len(), 1);

    let entry: LogEntry = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(entry.message, "Test message");
    assert_eq!(entry.level, "info");
    assert_eq!(entry.component, "test_component");
  }

  #[tokio::test]
  async fn test_get_logs_empty_file() {
    let (_temp_dir, log_path) = temp_log_path();
    let logs = RequestLogs::new_with_silent(&log_path, true).unwrap();

    let result = logs.get_logs(None, None).await.unwrap();
    assert!(result.is_empty());
    assert!(!logs.has_logs().await);
  }

  #[tokio::test]
  async fn test_get_logs_with_level_filter() {
    let (_temp_dir, log_path) = temp_log_path();
    let logs = RequestLogs::new_with_silent(&log_path, true).unwrap();

    logs.add_log("info", "Info message", "comp").await.unwrap();
    logs.add_log("warn", "Warn message", "comp").await.unwrap();
    logs.add_log("error", "Error message", "comp").await.unwrap();
    logs.add_log("info", "Another info", "comp").await.unwrap();

    let info_logs = logs.get_logs(None, Some("info")).await.unwrap();
    assert_eq!(info_logs.len(), 2);
    for entry in &info_logs {
      assert_eq!(entry.level, "info");
    }

    let all_logs = logs.get_logs(None, Some("all")).await.unwrap();
    assert_eq!(all_logs.len(), 4);
  }

  #[tokio::test]
  async fn test_get_logs_with_limit() {
    let (_temp_dir, log_path) = temp_log_path();
    let logs = RequestLogs::new_with_silent(&log_path, true).unwrap();

    for i in 1..=5 {
      logs.add_log("info", &format!("Message {i}"), "comp").await.unwrap();
    }

    let limited = logs.get_logs(Some(3), None).await.unwrap();
    assert_eq!(limited.len(), 3);

    let all = logs.get_logs(Some(10), None).await.unwrap();
    assert_eq!(all.len(), 5);
  }

  #[tokio::test]
  async fn test_get_logs_skips_malformed_lines() {
    let (_temp_dir, log_path) = temp_log_path();

    fs::write(
      &log_path,
      r#"{"timestamp":"2026-01-01T12:00:00Z","level":"info","message":"Valid","component":"test"}
not json at all
{"timestamp":"2026-01-01T12:01:00Z","level":"warn","message":"Also valid","component":"test"}
"#,
    )
    .unwrap();

    let logs = RequestLogs::new_with_silent(&log_path, true).unwrap();

    let result = logs.get_logs(None, None).await.unwrap();
    assert_eq!(result.len(), 2);

    let messages: Vec<_> = result.iter().map(|e| e.message.as_str()).collect();
    assert!(messages.contains(&"Valid"));
    assert!(messages.contains(&"Also valid"));
  }

  #[tokio::test]
  async fn test_concurrent_writes() {
    let (_temp_dir, log_path) = temp_log_path();
    let logs = RequestLogs::new_with_silent(&log_path, true).unwrap();

    let mut handles = vec![];
    for i in 0..10 {
      let logs_clone = logs.clone();
      let handle = tokio::spawn(async move {
        logs_clone.add_log("info", &format!("Message {i}"), "concurrent").await.unwrap();
      });
      handles.push(handle);
    }

    for handle in handles {
      handle.await.unwrap();
    }

    let result = logs.get_logs(None, None).await.unwrap();
    assert_eq!(result.len(), 10);
  }

  #[tokio::test]
  async fn test_level_wrappers_log_to_disk() {
    let (_temp_dir, log_path) = temp_log_path();
    let logs = RequestLogs::new_with_silent(&log_path, true).unwrap();

    logs.info("Info test", "comp").await;
    logs.warn("Warn test", "comp").await;
    logs.error("Error test", "comp").await;
    logs.success("Success test", "comp").await;

    let result = logs.get_logs(None, None).await.unwrap();
    assert_eq!(result.len(), 4);

    let levels: std::collections::HashSet<_> = result.iter().map(|e| e.level.as_str()).collect();
    for expected in ["info", "warn", "error", "success"] {
      assert!(levels.contains(expected), "Missing level: {expected}");
    }
  }
}
