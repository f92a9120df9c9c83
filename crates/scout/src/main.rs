use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use scout::cli::commands;
use scout::config::SearchConfig;

#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "Scout - Article Similarity Search\nRanks scraped articles against free-text queries")]
#[command(version)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Search the scraped articles for matching content
  Search {
    /// Search terms (space-separated)
    #[arg(required = true)]
    terms: Vec<String>,
    /// Number of results to return
    #[arg(short = 'n', long, env = "SCOUT_TOP_N")]
    top: Option<usize>,
    /// Path to the scraped article CSV
    #[arg(long, env = "SCOUT_ARTICLES_CSV")]
    csv: Option<PathBuf>,
  },
  /// Show how many articles the store holds
  Count {
    /// Path to the scraped article CSV
    #[arg(long, env = "SCOUT_ARTICLES_CSV")]
    csv: Option<PathBuf>,
  },
  /// Query server request logs
  Logs {
    /// Maximum number of log entries to return
    #[arg(short, long, default_value = "50")]
    limit: usize,
    /// Filter by log level (info, warn, error, all)
    #[arg(long, default_value = "all")]
    level: String,
  },
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Command::Search { terms, top, csv } => commands::search(&terms, &SearchConfig::resolve(csv, top)),
    Command::Count { csv } => commands::count(&SearchConfig::resolve(csv, None)),
    Command::Logs { limit, level } => commands::logs(limit, &level).await,
  }
}
