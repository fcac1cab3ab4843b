//! Salary range filtering by interval overlap.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use topskyll_shared::CurrencyCode;

use super::range::{HasSalary, SalaryRange, normalize_to_currency};
use crate::currency::{CurrencyError, CurrencyTable};

/// Caller-supplied salary window, expressed in `currency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryFilter {
    /// Lowest acceptable salary.
    pub min: Option<Decimal>,
    /// Highest acceptable salary.
    pub max: Option<Decimal>,
    /// Currency of both bounds; records are converted into it before comparing.
    pub currency: CurrencyCode,
}

impl SalaryFilter {
    /// Creates a filter.
    #[must_use]
    pub const fn new(min: Option<Decimal>, max: Option<Decimal>, currency: CurrencyCode) -> Self {
        Self { min, max, currency }
    }

    /// Creates a filter that keeps everything.
    #[must_use]
    pub const fn unbounded(currency: CurrencyCode) -> Self {
        Self::new(None, None, currency)
    }

    /// Returns true if neither bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Rejects negative bounds.
    pub fn validate(&self) -> Result<(), CurrencyError> {
        for bound in [self.min, self.max].into_iter().flatten() {
            if bound.is_sign_negative() && !bound.is_zero() {
                return Err(CurrencyError::NegativeAmount(bound));
            }
        }
        Ok(())
    }

    /// Returns true if the range overlaps this filter.
    ///
    /// The range is normalized to the filter currency first. Comparisons are
    /// inclusive, so touching the boundary counts as overlap.
    pub fn matches(&self, table: &CurrencyTable, range: &SalaryRange) -> Result<bool, CurrencyError> {
        if self.is_unbounded() {
            return Ok(true);
        }

        let normalized = normalize_to_currency(table, range, self.currency)?;
        let (job_min, job_max) = normalized.effective_bounds();

        Ok(match (self.min, self.max) {
            (Some(min), Some(max)) => job_max >= min && job_min <= max,
            (Some(min), None) => job_max >= min,
            (None, Some(max)) => job_min <= max,
            (None, None) => true,
        })
    }
}

/// Keeps the records whose salary overlaps the filter, preserving order.
///
/// An unbounded filter returns `records` as-is.
pub fn filter_by_range<T: HasSalary>(
    table: &CurrencyTable,
    records: Vec<T>,
    filter: &SalaryFilter,
) -> Result<Vec<T>, CurrencyError> {
    if filter.is_unbounded() {
        return Ok(records);
    }

    let mut kept = Vec::with_capacity(records.len());
    for record in records {
        if filter.matches(table, record.salary())? {
            kept.push(record);
        }
    }
    Ok(kept)
}
