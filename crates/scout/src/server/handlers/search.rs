//! Search endpoint handlers

use std::sync::Arc;

use anyhow::Result;
use axum::{
  extract::{Extension, Query, State},
  http::StatusCode,
  response::Json as ResponseJson,
  Json,
};

use crate::config::SearchConfig;
use crate::ranking;
use crate::server::middleware::RequestContext;
use crate::server::state::AppState;
use crate::server::types::{ErrorResponse, SearchParams, SearchRequest, SearchResponse};
use crate::store;

/// Outcome of running a search against the store, independent of HTTP
pub enum SearchOutcome {
  /// The store produced no articles at all
  NoArticles { message: String },
  /// Ranked results (possibly none matched)
  Ranked(SearchResponse),
}

/// POST /search - Rank articles against the body's `query` field
pub async fn search(
  State(state): State<Arc<AppState>>,
  Extension(context): Extension<RequestContext>,
  Json(request): Json<SearchRequest>,
) -> Result<ResponseJson<SearchResponse>, (StatusCode, ResponseJson<ErrorResponse>)> {
  let query = request.query.trim().to_string();

  if query.is_empty() {
    return Err((
      StatusCode::BAD_REQUEST,
      ResponseJson(ErrorResponse::new("Query parameter is required")),
    ));
  }

  respond(&state, &context, &query).await
}

/// GET /search?q= - Query-string variant of the search endpoint
pub async fn search_get(
  State(state): State<Arc<AppState>>,
  Extension(context): Extension<RequestContext>,
  Query(params): Query<SearchParams>,
) -> Result<ResponseJson<SearchResponse>, (StatusCode, ResponseJson<ErrorResponse>)> {
  let query = params.q.trim().to_string();

  if query.is_empty() {
    return Err((
      StatusCode::BAD_REQUEST,
      ResponseJson(ErrorResponse::new("Query parameter \"q\" is required")),
    ));
  }

  respond(&state, &context, &query).await
}

/// Shared request flow for both search routes
async fn respond(
  state: &AppState,
  context: &RequestContext,
  query: &str,
) -> Result<ResponseJson<SearchResponse>, (StatusCode, ResponseJson<ErrorResponse>)> {
  match execute_search(&state.config, query) {
    Ok(SearchOutcome::NoArticles { message }) => {
      context
        .log_warn(&format!("Search for {query:?} found no articles loaded"), "search-api")
        .await;

      Err((StatusCode::NOT_FOUND, ResponseJson(ErrorResponse::with_empty_results(&message))))
    }
    Ok(SearchOutcome::Ranked(response)) => {
      context
        .log_success(
          &format!(
            "Search for {query:?}: {} of {} articles matched",
            response.results_count, response.total_articles
          ),
          "search-api",
        )
        .await;

      Ok(ResponseJson(response))
    }
    Err(e) => {
      context.log_error(&format!("Search for {query:?} failed: {e}"), "search-api").await;

      Err((StatusCode::INTERNAL_SERVER_ERROR, ResponseJson(ErrorResponse::new(&e.to_string()))))
    }
  }
}

/// Reload the store, score everything against the query and rank the
/// matches. Kept free of axum types so the request flow is testable
/// without a listening server.
pub fn execute_search(config: &SearchConfig, query: &str) -> Result<SearchOutcome> {
  let articles = store::load_articles(&config.csv_path);

  if articles.is_empty() {
    return Ok(SearchOutcome::NoArticles {
      message: format!(
        "No articles found. Please ensure {} exists and contains data.",
        config.csv_path.display()
      ),
    });
  }

  let results = ranking::rank(query, &articles, config.top_n);

  Ok(SearchOutcome::Ranked(SearchResponse {
    query: query.to_string(),
    total_articles: articles.len(),
    results_count: results.len(),
    results,
  }))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use std::path::PathBuf;
  use tempfile::TempDir;

  fn config_for(dir: &TempDir, csv: &str) -> SearchConfig {
    SearchConfig { csv_path: dir.path().join(csv), top_n: 10 }
  }

  fn write_sample_store(dir: &TempDir) -> SearchConfig {
    let config = config_for(dir, "articles.csv");
    fs::write(
      &config.csv_path,
      "url,title,subtitle,text,keywords,claps\n\
       https://m.example/ml,ML intro,Basics,a machine learning primer,\"machine,learning,ai\",500\n\
       https://m.example/cook,Learning to cook,Pasta,learning the basics of pasta,,10000\n\
       https://m.example/flowers,Gardening,Soil,flowers and soil care,,9999\n",
    )
    .unwrap();
    config
  }

  #[test]
  fn test_execute_search_missing_store() {
    let temp = TempDir::new().unwrap();
    let config =
      SearchConfig { csv_path: PathBuf::from(temp.path().join("missing.csv")), top_n: 10 };

    let outcome = execute_search(&config, "anything").unwrap();
    match outcome {
      SearchOutcome::NoArticles { message } => {
        assert!(message.contains("missing.csv"));
        assert!(message.contains("No articles found"));
      }
      SearchOutcome::Ranked(_) => panic!("expected NoArticles"),
    }
  }

  #[test]
  fn test_execute_search_ranks_matches() {
    let temp = TempDir::new().unwrap();
    let config = write_sample_store(&temp);

    let outcome = execute_search(&config, "machine learning").unwrap();
    let response = match outcome {
      SearchOutcome::Ranked(response) => response,
      SearchOutcome::NoArticles { .. } => panic!("expected ranked results"),
    };

    assert_eq!(response.query, "machine learning");
    assert_eq!(response.total_articles, 3);
    assert_eq!(response.results_count, 2);
    // Keyword-tagged article wins over the far more popular one
    assert_eq!(response.results[0].title, "ML intro");
    assert_eq!(response.results[1].title, "Learning to cook");
  }

  #[test]
  fn test_execute_search_no_matches_is_empty_not_error() {
    let temp = TempDir::new().unwrap();
    let config = write_sample_store(&temp);

    let outcome = execute_search(&config, "quantum chromodynamics").unwrap();
    let response = match outcome {
      SearchOutcome::Ranked(response) => response,
      SearchOutcome::NoArticles { .. } => panic!("expected ranked results"),
    };

    assert_eq!(response.total_articles, 3);
    assert_eq!(response.results_count, 0);
    assert!(response.results.is_empty());
  }
}
