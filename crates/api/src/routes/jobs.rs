//! Job listing routes with currency conversion and salary filtering.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use axum_extra::extract::WithRejection;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use topskyll_core::currency::CurrencyTable;
use topskyll_core::salary::{
    SalaryFilter, filter_by_range, format_salary, normalize_to_currency,
};
use topskyll_shared::{AppError, CurrencyCode};
use tracing::debug;
use uuid::Uuid;

use crate::{AppState, catalog::JobListing, error::ApiError};

/// Creates the job routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(list_jobs))
        .route("/jobs/{id}", get(get_job))
}

/// Query parameters for listing jobs.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListQuery {
    /// Display currency (defaults to the base currency).
    pub currency: Option<String>,
    /// Lowest acceptable salary.
    pub min_salary: Option<Decimal>,
    /// Highest acceptable salary.
    pub max_salary: Option<Decimal>,
    /// Currency of the salary bounds (defaults to the display currency).
    pub salary_currency: Option<String>,
}

/// Query parameters for a single job.
#[derive(Debug, Default, Deserialize)]
pub struct JobQuery {
    /// Display currency (defaults to the base currency).
    pub currency: Option<String>,
}

/// A job with its salary expressed in the requested currency.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    /// Job identifier.
    pub id: Uuid,
    /// Job title.
    pub title: String,
    /// Hiring company name.
    pub company: String,
    /// Work location.
    pub location: Option<String>,
    /// Lower salary bound.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub salary_min: Option<Decimal>,
    /// Upper salary bound.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub salary_max: Option<Decimal>,
    /// Currency of the salary bounds.
    pub salary_currency: CurrencyCode,
    /// Display string, e.g. `"$50K - $80K / year"`.
    pub formatted_salary: String,
    /// Publication time.
    pub posted_at: DateTime<Utc>,
}

impl JobResponse {
    /// Converts a listing into `currency` and formats its salary.
    fn build(
        table: &CurrencyTable,
        job: &JobListing,
        currency: CurrencyCode,
    ) -> Result<Self, ApiError> {
        let salary = normalize_to_currency(table, &job.salary, currency)?;
        let formatted_salary = format_salary(table, &salary)?;

        Ok(Self {
            id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            salary_min: salary.salary_min,
            salary_max: salary.salary_max,
            salary_currency: salary.salary_currency,
            formatted_salary,
            posted_at: job.posted_at,
        })
    }
}

/// Response for the job list.
#[derive(Debug, Serialize)]
pub struct JobListResponse {
    /// Display currency.
    pub currency: CurrencyCode,
    /// Number of jobs returned.
    pub total: usize,
    /// Matching jobs in catalog order.
    pub jobs: Vec<JobResponse>,
}

/// GET `/jobs` - List jobs, optionally filtered by salary range.
async fn list_jobs(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<JobListQuery>, ApiError>,
) -> Result<Json<JobListResponse>, ApiError> {
    let currency = state.resolve_currency(query.currency.as_deref())?;
    let filter_currency = match query.salary_currency.as_deref() {
        Some(raw) => state.resolve_currency(Some(raw))?,
        None => currency,
    };

    let filter = SalaryFilter::new(query.min_salary, query.max_salary, filter_currency);
    filter.validate()?;

    let table = &state.currencies;
    let matching = filter_by_range(table, state.catalog.list().iter().collect(), &filter)?;
    let jobs = matching
        .into_iter()
        .map(|job| JobResponse::build(table, job, currency))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        %currency,
        min = ?filter.min,
        max = ?filter.max,
        filter_currency = %filter.currency,
        total = jobs.len(),
        "Listed jobs"
    );

    Ok(Json(JobListResponse {
        currency,
        total: jobs.len(),
        jobs,
    }))
}

/// GET `/jobs/{id}` - Get one job in the requested currency.
async fn get_job(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, ApiError>,
    WithRejection(Query(query), _): WithRejection<Query<JobQuery>, ApiError>,
) -> Result<Json<JobResponse>, ApiError> {
    let currency = state.resolve_currency(query.currency.as_deref())?;
    let job = state
        .catalog
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Job {id}")))?;

    Ok(Json(JobResponse::build(&state.currencies, job, currency)?))
}
