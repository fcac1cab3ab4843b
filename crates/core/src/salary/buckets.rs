//! Pre-built salary buckets for filter menus.

use rust_decimal::Decimal;
use serde::Serialize;
use topskyll_shared::CurrencyCode;

use super::format::format_amount;
use crate::currency::{CurrencyError, CurrencyTable};

/// One option in a salary filter menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryBucket {
    /// Display label, e.g. `"$50K - $80K"`.
    pub label: String,
    /// Machine token `"min-max"`; `"min-"` means "and above".
    pub value: String,
    /// Lower bound.
    #[serde(with = "rust_decimal::serde::float")]
    pub min: Decimal,
    /// Upper bound, absent on the last bucket.
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub max: Option<Decimal>,
}

/// Lakh-denominated steps for Indian Rupee.
const INDIAN_LADDER: [i64; 6] = [0, 300_000, 600_000, 1_000_000, 1_500_000, 2_500_000];

/// US-style steps for the base currency.
const BASE_LADDER: [i64; 6] = [0, 50_000, 80_000, 120_000, 160_000, 200_000];

/// Steps for every other currency.
const GENERIC_LADDER: [i64; 6] = [0, 30_000, 50_000, 75_000, 100_000, 150_000];

/// Returns the six salary buckets offered for `currency`.
///
/// Each bucket starts where the previous one ends; the last is open-ended.
pub fn popular_ranges(
    table: &CurrencyTable,
    currency: CurrencyCode,
) -> Result<Vec<SalaryBucket>, CurrencyError> {
    let ladder = if currency == CurrencyCode::INR {
        &INDIAN_LADDER
    } else if currency == table.base() {
        &BASE_LADDER
    } else {
        &GENERIC_LADDER
    };

    let mut buckets = Vec::with_capacity(ladder.len());
    for (position, &lower) in ladder.iter().enumerate() {
        let min = Decimal::from(lower);
        let max = ladder.get(position + 1).map(|&upper| Decimal::from(upper));

        let label = match max {
            Some(max) if position == 0 => {
                format!("Up to {}", format_amount(table, max, currency)?)
            }
            Some(max) => format!(
                "{} - {}",
                format_amount(table, min, currency)?,
                format_amount(table, max, currency)?
            ),
            None => format!("{}+", format_amount(table, min, currency)?),
        };
        let value = match max {
            Some(max) => format!("{min}-{max}"),
            None => format!("{min}-"),
        };

        buckets.push(SalaryBucket {
            label,
            value,
            min,
            max,
        });
    }
    Ok(buckets)
}
