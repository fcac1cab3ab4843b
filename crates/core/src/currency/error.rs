//! Currency error types.

use rust_decimal::Decimal;
use thiserror::Error;
use topskyll_shared::{AppError, CurrencyCode, InvalidCurrencyCode};

/// Currency-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// Code is well-formed but not present in the currency table.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(CurrencyCode),

    /// Code is not a three-letter currency code.
    #[error(transparent)]
    InvalidCode(#[from] InvalidCurrencyCode),

    /// Amount cannot be negative.
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    /// Exchange rate must be strictly positive.
    #[error("Exchange rate for {code} must be positive, got {rate}")]
    InvalidRate {
        /// Currency the rate belongs to.
        code: CurrencyCode,
        /// Offending rate.
        rate: Decimal,
    },

    /// Currency appears twice in a table definition.
    #[error("Currency listed more than once: {0}")]
    DuplicateCurrency(CurrencyCode),

    /// Base currency is absent or its rate is not exactly one.
    #[error("Base currency {0} must be present with rate 1")]
    MissingBaseCurrency(CurrencyCode),

    /// Converted amount does not fit in a decimal.
    #[error("Converting {amount} from {from} to {to} overflowed")]
    Overflow {
        /// Source amount.
        amount: Decimal,
        /// Source currency.
        from: CurrencyCode,
        /// Target currency.
        to: CurrencyCode,
    },
}

impl From<CurrencyError> for AppError {
    fn from(err: CurrencyError) -> Self {
        match err {
            CurrencyError::UnknownCurrency(_)
            | CurrencyError::InvalidCode(_)
            | CurrencyError::NegativeAmount(_) => Self::Validation(err.to_string()),
            CurrencyError::InvalidRate { .. }
            | CurrencyError::DuplicateCurrency(_)
            | CurrencyError::MissingBaseCurrency(_)
            | CurrencyError::Overflow { .. } => Self::Internal(err.to_string()),
        }
    }
}
