//! Salary range types and currency normalization.

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use topskyll_shared::CurrencyCode;

use crate::currency::{CurrencyError, CurrencyTable, round_whole};

/// A job's compensation band in its own currency.
///
/// Either bound may be missing. `salary_min <= salary_max` is assumed when
/// both are present but not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRange {
    /// Lower bound.
    pub salary_min: Option<Decimal>,
    /// Upper bound.
    pub salary_max: Option<Decimal>,
    /// Currency both bounds are expressed in.
    pub salary_currency: CurrencyCode,
}

impl SalaryRange {
    /// Creates a salary range.
    #[must_use]
    pub const fn new(
        salary_min: Option<Decimal>,
        salary_max: Option<Decimal>,
        salary_currency: CurrencyCode,
    ) -> Self {
        Self {
            salary_min,
            salary_max,
            salary_currency,
        }
    }

    /// Creates a range with both bounds.
    #[must_use]
    pub const fn between(min: Decimal, max: Decimal, currency: CurrencyCode) -> Self {
        Self::new(Some(min), Some(max), currency)
    }

    /// Creates a range with no disclosed amounts.
    #[must_use]
    pub const fn undisclosed(currency: CurrencyCode) -> Self {
        Self::new(None, None, currency)
    }

    /// Rejects negative bounds.
    pub fn validate(&self) -> Result<(), CurrencyError> {
        for bound in [self.salary_min, self.salary_max].into_iter().flatten() {
            if bound.is_sign_negative() && !bound.is_zero() {
                return Err(CurrencyError::NegativeAmount(bound));
            }
        }
        Ok(())
    }

    /// Bounds used for overlap tests.
    ///
    /// A missing minimum counts as zero; a missing maximum collapses the
    /// range to a point at the minimum.
    #[must_use]
    pub fn effective_bounds(&self) -> (Decimal, Decimal) {
        let min = self.salary_min.unwrap_or(Decimal::ZERO);
        let max = self.salary_max.unwrap_or(min);
        (min, max)
    }
}

/// Anything that carries a salary range, e.g. a job listing.
pub trait HasSalary {
    /// Returns the record's salary range.
    fn salary(&self) -> &SalaryRange;
}

impl HasSalary for SalaryRange {
    fn salary(&self) -> &SalaryRange {
        self
    }
}

impl<T: HasSalary + ?Sized> HasSalary for &T {
    fn salary(&self) -> &SalaryRange {
        (**self).salary()
    }
}

/// Salary fields as persisted; older records carry no currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSalary {
    /// Lower bound.
    #[serde(default)]
    pub salary_min: Option<Decimal>,
    /// Upper bound.
    #[serde(default)]
    pub salary_max: Option<Decimal>,
    /// Currency, absent on legacy records.
    #[serde(default)]
    pub salary_currency: Option<CurrencyCode>,
}

/// Applies the legacy currency default right after a record is read.
#[must_use]
pub fn with_default_currency(stored: StoredSalary, base: CurrencyCode) -> SalaryRange {
    SalaryRange::new(
        stored.salary_min,
        stored.salary_max,
        stored.salary_currency.unwrap_or(base),
    )
}

/// Expresses a salary range in another currency.
///
/// Same currency returns the input borrowed. Otherwise each present bound is
/// converted and rounded to whole units.
pub fn normalize_to_currency<'a>(
    table: &CurrencyTable,
    range: &'a SalaryRange,
    target: CurrencyCode,
) -> Result<Cow<'a, SalaryRange>, CurrencyError> {
    if range.salary_currency == target {
        return Ok(Cow::Borrowed(range));
    }

    let convert = |bound: Option<Decimal>| {
        bound
            .map(|amount| {
                table
                    .convert(amount, range.salary_currency, target)
                    .map(round_whole)
            })
            .transpose()
    };

    Ok(Cow::Owned(SalaryRange::new(
        convert(range.salary_min)?,
        convert(range.salary_max)?,
        target,
    )))
}
