//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod currencies;
pub mod health;
pub mod jobs;
pub mod salary_ranges;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(currencies::routes())
        .merge(jobs::routes())
        .merge(salary_ranges::routes())
}
