//! Route definitions
//!
//! All API routes are mounted under /api.

use axum::{
    routing::{get, head},
    Router,
};

use crate::handlers::{categories, health, tools, upvotes};
use crate::state::AppState;

/// Create the main API router with catalog and health routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", catalog_routes().merge(health_routes()))
}

/// Catalog routes (subject to rate limiting)
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/tools", get(tools::list_tools))
        .route("/tools/:name", get(tools::get_tool))
        .route(
            "/tools/:name/upvote",
            head(upvotes::check_upvote).post(upvotes::toggle_upvote),
        )
        .route("/categories", get(categories::list_categories))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
