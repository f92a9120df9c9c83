//! REST API module for the article search service
//!
//! Provides the HTTP endpoints for searching and counting scraped
//! articles. Uses axum for routing.

pub mod handlers;
pub mod middleware;
pub mod routing;
pub mod startup;
pub mod state;
pub mod types;
