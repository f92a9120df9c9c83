use anyhow::Result;
use colored::*;
use herald::request_logs::RequestLogs;

use crate::cli::display;
use crate::config::{self, SearchConfig};
use crate::ranking;
use crate::store;

/// Search the article store and print ranked matches
pub fn search(terms: &[String], config: &SearchConfig) -> Result<()> {
  let query = terms.join(" ");
  let articles = store::load_articles(&config.csv_path);

  if articles.is_empty() {
    println!(
      "No articles loaded from {} - has the scraper run yet?",
      config.csv_path.display().to_string().yellow()
    );
    return Ok(());
  }

  let results = ranking::rank(&query, &articles, config.top_n);
  display::search_results(&results, &query, articles.len());

  Ok(())
}

/// Print how many articles the store currently holds
pub fn count(config: &SearchConfig) -> Result<()> {
  let articles = store::load_articles(&config.csv_path);

  if config.csv_path.exists() {
    println!(
      "{} articles in {}",
      articles.len().to_string().green().bold(),
      config.csv_path.display()
    );
  } else {
    println!("{} ({} does not exist)", "0 articles".yellow(), config.csv_path.display());
  }

  Ok(())
}

/// Print recent server request logs
pub async fn logs(limit: usize, level: &str) -> Result<()> {
  let logs = RequestLogs::new_with_silent(config::server_logs_path(), true)?;
  let entries = logs.get_logs(Some(limit), Some(level)).await?;

  if entries.is_empty() {
    println!("No logs found.");
    return Ok(());
  }

  display::log_entries(&entries);

  Ok(())
}
