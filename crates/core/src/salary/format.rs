//! Human-readable salary strings.
//!
//! Output is display-only and lossy; never parse it back into an amount.

use rust_decimal::{Decimal, RoundingStrategy};
use topskyll_shared::CurrencyCode;

use super::range::SalaryRange;
use crate::currency::{CurrencyError, CurrencyTable};

/// Text shown when a range has neither bound.
pub const UNDISCLOSED: &str = "Salary not disclosed";

/// One magnitude step: amounts at or above `unit` are shown as
/// `amount / unit` with `decimals` places and the given suffix.
struct Magnitude {
    unit: Decimal,
    decimals: u32,
    suffix: &'static str,
}

/// Crore and lakh, for Indian Rupee.
const INDIAN_MAGNITUDES: [Magnitude; 2] = [
    Magnitude {
        unit: Decimal::from_parts(10_000_000, 0, 0, false, 0),
        decimals: 1,
        suffix: "Cr",
    },
    Magnitude {
        unit: Decimal::from_parts(100_000, 0, 0, false, 0),
        decimals: 0,
        suffix: "L",
    },
];

/// Millions and thousands, for every other currency.
const WESTERN_MAGNITUDES: [Magnitude; 2] = [
    Magnitude {
        unit: Decimal::from_parts(1_000_000, 0, 0, false, 0),
        decimals: 1,
        suffix: "M",
    },
    Magnitude {
        unit: Decimal::from_parts(1_000, 0, 0, false, 0),
        decimals: 0,
        suffix: "K",
    },
];

/// Formats an amount with its currency symbol and a magnitude suffix.
///
/// INR uses crore (`Cr`, 1 decimal) from 10,000,000 and lakh (`L`) from
/// 100,000. Other currencies use `M` (1 decimal) from 1,000,000 and `K`
/// from 1,000. Smaller amounts are printed with thousands separators.
pub fn format_amount(
    table: &CurrencyTable,
    amount: Decimal,
    currency: CurrencyCode,
) -> Result<String, CurrencyError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(CurrencyError::NegativeAmount(amount));
    }
    let symbol = &table.get(currency)?.symbol;

    let magnitudes = if currency == CurrencyCode::INR {
        &INDIAN_MAGNITUDES
    } else {
        &WESTERN_MAGNITUDES
    };

    // Compare the value as it would print, so rounding cannot cross a band.
    let shown = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    for magnitude in magnitudes {
        if shown >= magnitude.unit {
            let mut scaled = (amount / magnitude.unit)
                .round_dp_with_strategy(magnitude.decimals, RoundingStrategy::MidpointAwayFromZero);
            scaled.rescale(magnitude.decimals);
            return Ok(format!("{symbol}{scaled}{}", magnitude.suffix));
        }
    }

    Ok(format!("{symbol}{}", group_thousands(shown)))
}

/// Formats a salary band as shown on job cards.
pub fn format_range(
    table: &CurrencyTable,
    min: Option<Decimal>,
    max: Option<Decimal>,
    currency: CurrencyCode,
) -> Result<String, CurrencyError> {
    match (min, max) {
        (None, None) => Ok(UNDISCLOSED.to_string()),
        (Some(min), Some(max)) => Ok(format!(
            "{} - {} / year",
            format_amount(table, min, currency)?,
            format_amount(table, max, currency)?
        )),
        (Some(value), None) | (None, Some(value)) => Ok(format!(
            "{} / year",
            format_amount(table, value, currency)?
        )),
    }
}

/// Formats a [`SalaryRange`] in its own currency.
pub fn format_salary(table: &CurrencyTable, range: &SalaryRange) -> Result<String, CurrencyError> {
    format_range(
        table,
        range.salary_min,
        range.salary_max,
        range.salary_currency,
    )
}

/// Renders at most two decimals with `,` between thousands.
fn group_thousands(amount: Decimal) -> String {
    let rendered = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string();
    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(rendered.len() + integer.len() / 3);
    for (position, digit) in integer.chars().enumerate() {
        if position > 0 && (integer.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
