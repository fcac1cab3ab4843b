//! Multi-currency handling and exchange rates.

pub mod conversion;
pub mod error;
pub mod table;

#[cfg(test)]
mod props;

pub use conversion::round_whole;
pub use error::CurrencyError;
pub use table::{CurrencyInfo, CurrencyTable};
