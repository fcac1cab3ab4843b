//! Salary filter menu routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use topskyll_core::salary::{SalaryBucket, popular_ranges};
use topskyll_shared::CurrencyCode;

use crate::{AppState, error::ApiError};

/// Creates the salary range routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/salary-ranges", get(list_salary_ranges))
}

/// Query parameters for salary ranges.
#[derive(Debug, Default, Deserialize)]
pub struct SalaryRangesQuery {
    /// Currency of the buckets (defaults to the base currency).
    pub currency: Option<String>,
}

/// Response for the salary range menu.
#[derive(Debug, Serialize)]
pub struct SalaryRangesResponse {
    /// Currency of the buckets.
    pub currency: CurrencyCode,
    /// Buckets from lowest to highest.
    pub ranges: Vec<SalaryBucket>,
}

/// GET `/salary-ranges` - Pre-built salary buckets for filter menus.
async fn list_salary_ranges(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<SalaryRangesQuery>, ApiError>,
) -> Result<Json<SalaryRangesResponse>, ApiError> {
    let currency = state.resolve_currency(query.currency.as_deref())?;
    let ranges = popular_ranges(&state.currencies, currency)?;
    Ok(Json(SalaryRangesResponse { currency, ranges }))
}
