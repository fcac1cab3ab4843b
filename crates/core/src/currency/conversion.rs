//! Currency conversion logic.
//!
//! CRITICAL: Conversion strategy for multi-currency:
//! - Always route through the base currency (the table holds no cross rates)
//! - Never round inside `convert`; callers round when producing display amounts
//! - Same-currency conversion returns the input untouched

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use topskyll_shared::{CurrencyCode, Money};

use super::error::CurrencyError;
use super::table::CurrencyTable;

impl CurrencyTable {
    /// Converts an amount between two currencies via the base currency.
    ///
    /// `amount / rate(from) * rate(to)`. Fails on unknown codes and negative
    /// amounts rather than producing a misleading figure.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use topskyll_core::currency::CurrencyTable;
    /// use topskyll_shared::CurrencyCode;
    ///
    /// let table = CurrencyTable::standard();
    /// let inr = table.convert(dec!(100), CurrencyCode::USD, CurrencyCode::INR).unwrap();
    /// assert_eq!(inr, dec!(8312));
    /// ```
    pub fn convert(
        &self,
        amount: Decimal,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> Result<Decimal, CurrencyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(CurrencyError::NegativeAmount(amount));
        }
        if from == to {
            return Ok(amount);
        }

        let from_rate = self.get(from)?.rate;
        let to_rate = self.get(to)?.rate;

        amount
            .checked_div(from_rate)
            .and_then(|base_amount| base_amount.checked_mul(to_rate))
            .ok_or(CurrencyError::Overflow { amount, from, to })
    }

    /// Converts a [`Money`] value into another currency.
    pub fn convert_money(&self, money: Money, to: CurrencyCode) -> Result<Money, CurrencyError> {
        let amount = self.convert(money.amount, money.currency, to)?;
        Ok(Money::new(amount, to))
    }
}

/// Rounds to the nearest whole currency unit, halves away from zero.
#[must_use]
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
