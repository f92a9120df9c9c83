//! Article store loader
//!
//! Reads the scraper's CSV output into memory. The store is reloaded in
//! full on every search so a running server always sees the scraper's
//! latest output without any reload protocol between the two processes.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// One scraped article row.
///
/// Fields the scraper left blank deserialize to empty strings; `claps`
/// tolerates any malformed value by falling back to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
  #[serde(default)]
  pub url: String,
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub subtitle: String,
  #[serde(default)]
  pub text: String,
  #[serde(default)]
  pub keywords: String,
  #[serde(default, deserialize_with = "claps_or_zero")]
  pub claps: u64,
}

/// Failure kinds when reading the article store
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("CSV error: {0}")]
  Csv(#[from] csv::Error),
}

/// Load every article from the CSV store.
///
/// A missing file is not an error - the scraper simply has not produced
/// output yet. Any other failure is logged and surfaced as "no articles"
/// so a broken store degrades to an empty search instead of a crash.
pub fn load_articles<P: AsRef<Path>>(path: P) -> Vec<Article> {
  let path = path.as_ref();

  if !path.exists() {
    return Vec::new();
  }

  match read_csv(path) {
    Ok(articles) => articles,
    Err(e) => {
      herald::error!(&format!("Error loading articles from {}: {e}", path.display()));
      Vec::new()
    }
  }
}

fn read_csv(path: &Path) -> Result<Vec<Article>, StoreError> {
  let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

  let mut articles = Vec::new();
  for row in reader.deserialize::<Article>() {
    match row {
      Ok(article) => articles.push(article),
      Err(e) => herald::warn!(&format!("Skipping malformed article row: {e}")),
    }
  }

  Ok(articles)
}

/// The claps column arrives as free text from the scraper; anything that
/// does not parse as a non-negative integer counts as zero.
fn claps_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = String::deserialize(deserializer).unwrap_or_default();
  Ok(raw.trim().parse().unwrap_or(0))
}
