//! Token-overlap similarity scoring and ranking
//!
//! Scoring is a Jaccard overlap between the query's and the article's
//! token sets, with a flat boost per query word found in the article's
//! keyword field. Tokens are lowercased maximal alphabetic runs of at
//! least three letters; shorter runs carry too little signal.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::store::Article;

/// Default number of results returned by a search
pub const DEFAULT_TOP_N: usize = 10;

/// Added to the score for every distinct query word found in the keyword field
const KEYWORD_BOOST: f64 = 0.1;

static WORD_PATTERN: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"[a-z]{3,}").expect("word pattern is valid"));

/// Externally visible projection of a scored article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedArticle {
  pub url: String,
  pub title: String,
  pub claps: u64,
  pub similarity_score: f64,
}

/// Transient pairing of an article with its score, alive only during
/// ranking of a single query.
struct Scored<'a> {
  score: f64,
  article: &'a Article,
}

/// Extract the scoring token set from free text
pub fn extract_words(text: &str) -> HashSet<String> {
  let lowered = text.to_lowercase();
  WORD_PATTERN.find_iter(&lowered).map(|m| m.as_str().to_string()).collect()
}

/// Score an article against a query. Always in [0, 1].
pub fn similarity(query: &str, article: &Article) -> f64 {
  let query_words = extract_words(query);
  if query_words.is_empty() {
    return 0.0;
  }

  let article_text = format!(
    "{} {} {} {}",
    article.text, article.title, article.subtitle, article.keywords
  );
  let article_words = extract_words(&article_text);

  let intersection = query_words.intersection(&article_words).count();
  let union = query_words.union(&article_words).count();
  if union == 0 {
    return 0.0;
  }

  let mut score = intersection as f64 / union as f64;

  // The boost is substring containment against the raw keyword field, not
  // token membership: the query word "learn" matches an article tagged
  // "learning".
  let article_keywords = article.keywords.to_lowercase();
  if !article_keywords.is_empty() {
    let keyword_matches =
      query_words.iter().filter(|word| article_keywords.contains(word.as_str())).count();
    score += keyword_matches as f64 * KEYWORD_BOOST;
  }

  score.min(1.0)
}

/// Rank articles against a query, best first.
///
/// Articles scoring exactly zero are dropped. Ordering is by similarity,
/// then claps, both descending; the sort is stable so equal rows keep
/// their store order.
pub fn rank(query: &str, articles: &[Article], top_n: usize) -> Vec<RankedArticle> {
  if articles.is_empty() {
    return Vec::new();
  }

  let mut scored: Vec<Scored> = articles
    .iter()
    .map(|article| Scored { score: similarity(query, article), article })
    .filter(|candidate| candidate.score > 0.0)
    .collect();

  scored.sort_by(|a, b| {
    b.score
      .partial_cmp(&a.score)
      .unwrap_or(std::cmp::Ordering::Equal)
      .then_with(|| b.article.claps.cmp(&a.article.claps))
  });

  scored
    .into_iter()
    .take(top_n)
    .map(|candidate| RankedArticle {
      url: candidate.article.url.clone(),
      title: candidate.article.title.clone(),
      claps: candidate.article.claps,
      similarity_score: round3(candidate.score),
    })
    .collect()
}

fn round3(value: f64) -> f64 {
  (value * 1000.0).round() / 1000.0
}
