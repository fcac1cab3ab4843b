//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST routes for currencies, job listings, and salary filter buckets
//! - The in-memory job catalog those routes read from
//! - Currency validation at the request boundary

pub mod catalog;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use topskyll_core::currency::CurrencyTable;
use topskyll_shared::{AppError, CurrencyCode};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use catalog::{JobCatalog, JobListing, StoredJob};
pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Supported currencies and rates.
    pub currencies: Arc<CurrencyTable>,
    /// Job listings.
    pub catalog: Arc<JobCatalog>,
    /// Reject unknown currency codes instead of using the base currency.
    pub strict_codes: bool,
}

impl AppState {
    /// Creates application state.
    pub fn new(currencies: Arc<CurrencyTable>, catalog: Arc<JobCatalog>, strict_codes: bool) -> Self {
        Self {
            currencies,
            catalog,
            strict_codes,
        }
    }

    /// Validates a `currency` query parameter.
    ///
    /// A missing parameter means the base currency. An unsupported one is
    /// rejected in strict mode and replaced by the base currency otherwise.
    pub fn resolve_currency(&self, raw: Option<&str>) -> Result<CurrencyCode, AppError> {
        match self.currencies.resolve(raw) {
            Ok(code) => Ok(code),
            Err(err) if self.strict_codes => Err(err.into()),
            Err(err) => {
                warn!(
                    requested = ?raw,
                    fallback = %self.currencies.base(),
                    error = %err,
                    "Unsupported currency, using base currency"
                );
                Ok(self.currencies.base())
            }
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_currency_lenient() {
        let state = test_support::state(false);
        assert_eq!(state.resolve_currency(None).unwrap(), CurrencyCode::USD);
        assert_eq!(state.resolve_currency(Some("inr")).unwrap(), CurrencyCode::INR);
        assert_eq!(state.resolve_currency(Some("XYZ")).unwrap(), CurrencyCode::USD);
        assert_eq!(state.resolve_currency(Some("dollars")).unwrap(), CurrencyCode::USD);
    }

    #[test]
    fn test_resolve_currency_strict() {
        let state = test_support::state(true);
        assert_eq!(state.resolve_currency(None).unwrap(), CurrencyCode::USD);
        assert_eq!(state.resolve_currency(Some("eur")).unwrap(), CurrencyCode::EUR);

        let err = state.resolve_currency(Some("XYZ")).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(state.resolve_currency(Some("dollars")).is_err());
    }
}
