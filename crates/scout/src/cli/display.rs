//! Terminal rendering for search results and log entries

use colored::*;
use herald::request_logs::LogEntry;

use crate::ranking::RankedArticle;

/// Print ranked search results, best first
pub fn search_results(results: &[RankedArticle], query: &str, total_articles: usize) {
  if results.is_empty() {
    println!("No matches found for: {}", query.yellow());
    return;
  }

  println!(
    "{} of {} articles matched {}\n",
    results.len().to_string().green().bold(),
    total_articles,
    query.yellow()
  );

  for (index, result) in results.iter().enumerate() {
    println!(
      "{} {} {}",
      format!("{:>2}.", index + 1).cyan(),
      result.title.bold(),
      format!("(score {:.3}, {} claps)", result.similarity_score, result.claps).dimmed()
    );
    println!("    {}", result.url.blue());
  }
}

/// Print log entries with level-colored markers
pub fn log_entries(entries: &[LogEntry]) {
  for entry in entries {
    let level = match entry.level.as_str() {
      "error" => entry.level.red().bold(),
      "warn" => entry.level.yellow().bold(),
      "success" => entry.level.bright_green().bold(),
      "debug" => entry.level.green(),
      _ => entry.level.blue().bold(),
    };

    println!("{} [{}] {}", entry.timestamp.to_string().cyan(), level, entry.message);
  }
}
