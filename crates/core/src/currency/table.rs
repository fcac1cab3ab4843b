//! Currency table: the registry of supported currencies and their rates.
//!
//! Every rate is expressed against a single base currency (rate = 1), so the
//! table never needs a cross-rate matrix. The table is immutable once built.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Serialize;
use topskyll_shared::CurrencyCode;

use super::error::CurrencyError;

/// Display and exchange data for one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyInfo {
    /// Currency code.
    pub code: CurrencyCode,
    /// Display glyph placed before amounts.
    pub symbol: String,
    /// Human-readable name.
    pub name: String,
    /// Units of this currency per one unit of the base currency.
    pub rate: Decimal,
}

impl CurrencyInfo {
    /// Creates a currency descriptor.
    pub fn new(
        code: CurrencyCode,
        symbol: impl Into<String>,
        name: impl Into<String>,
        rate: Decimal,
    ) -> Self {
        Self {
            code,
            symbol: symbol.into(),
            name: name.into(),
            rate,
        }
    }
}

/// Immutable mapping from currency code to [`CurrencyInfo`].
#[derive(Debug, Clone)]
pub struct CurrencyTable {
    base: CurrencyCode,
    /// Base currency first, then ascending by code.
    entries: Vec<CurrencyInfo>,
    index: HashMap<CurrencyCode, usize>,
}

static STANDARD: Lazy<CurrencyTable> =
    Lazy::new(|| CurrencyTable::assemble(CurrencyCode::USD, standard_entries()));

fn standard_entries() -> Vec<CurrencyInfo> {
    vec![
        CurrencyInfo::new(CurrencyCode::USD, "$", "US Dollar", Decimal::ONE),
        CurrencyInfo::new(CurrencyCode::EUR, "€", "Euro", Decimal::new(92, 2)),
        CurrencyInfo::new(CurrencyCode::GBP, "£", "British Pound", Decimal::new(79, 2)),
        CurrencyInfo::new(CurrencyCode::INR, "₹", "Indian Rupee", Decimal::new(8312, 2)),
        CurrencyInfo::new(CurrencyCode::CAD, "C$", "Canadian Dollar", Decimal::new(136, 2)),
        CurrencyInfo::new(CurrencyCode::AUD, "A$", "Australian Dollar", Decimal::new(152, 2)),
        CurrencyInfo::new(CurrencyCode::SGD, "S$", "Singapore Dollar", Decimal::new(134, 2)),
        CurrencyInfo::new(CurrencyCode::JPY, "¥", "Japanese Yen", Decimal::new(14950, 2)),
        CurrencyInfo::new(CurrencyCode::NOK, "kr", "Norwegian Krone", Decimal::new(1065, 2)),
    ]
}

impl CurrencyTable {
    /// Returns the built-in table with USD as the base currency.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Builds a table from the given entries.
    ///
    /// Fails if any rate is not strictly positive, a code repeats, or the
    /// base currency is missing or not at rate 1.
    pub fn new(base: CurrencyCode, entries: Vec<CurrencyInfo>) -> Result<Self, CurrencyError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for info in &entries {
            if info.rate <= Decimal::ZERO {
                return Err(CurrencyError::InvalidRate {
                    code: info.code,
                    rate: info.rate,
                });
            }
            if !seen.insert(info.code) {
                return Err(CurrencyError::DuplicateCurrency(info.code));
            }
        }

        let base_ok = entries
            .iter()
            .any(|info| info.code == base && info.rate == Decimal::ONE);
        if !base_ok {
            return Err(CurrencyError::MissingBaseCurrency(base));
        }

        Ok(Self::assemble(base, entries))
    }

    fn assemble(base: CurrencyCode, mut entries: Vec<CurrencyInfo>) -> Self {
        entries.sort_by_key(|info| (info.code != base, info.code));
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, info)| (info.code, position))
            .collect();
        Self {
            base,
            entries,
            index,
        }
    }

    /// Returns the base currency code.
    pub const fn base(&self) -> CurrencyCode {
        self.base
    }

    /// Looks up a currency.
    pub fn get(&self, code: CurrencyCode) -> Result<&CurrencyInfo, CurrencyError> {
        self.index
            .get(&code)
            .map(|&position| &self.entries[position])
            .ok_or(CurrencyError::UnknownCurrency(code))
    }

    /// Returns true if the code is present in the table.
    pub fn contains(&self, code: CurrencyCode) -> bool {
        self.index.contains_key(&code)
    }

    /// Parses a raw code and checks it against the table.
    pub fn lookup_code(&self, raw: &str) -> Result<CurrencyCode, CurrencyError> {
        let code = CurrencyCode::parse(raw)?;
        if self.contains(code) {
            Ok(code)
        } else {
            Err(CurrencyError::UnknownCurrency(code))
        }
    }

    /// Resolves an optional caller-supplied code.
    ///
    /// A missing code means the base currency. Malformed and unknown codes
    /// are errors; callers decide whether to fall back to [`Self::base`].
    pub fn resolve(&self, raw: Option<&str>) -> Result<CurrencyCode, CurrencyError> {
        raw.map_or(Ok(self.base), |raw| self.lookup_code(raw))
    }

    /// Iterates currencies, base first, then by code.
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyInfo> {
        self.entries.iter()
    }

    /// Number of currencies in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no currencies.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_table_is_valid() {
        let rebuilt = CurrencyTable::new(CurrencyCode::USD, standard_entries());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_standard_table_contents() {
        let table = CurrencyTable::standard();
        assert_eq!(table.base(), CurrencyCode::USD);
        assert_eq!(table.len(), 9);

        let inr = table.get(CurrencyCode::INR).unwrap();
        assert_eq!(inr.symbol, "₹");
        assert_eq!(inr.name, "Indian Rupee");
        assert_eq!(inr.rate, dec!(83.12));

        assert_eq!(table.get(CurrencyCode::USD).unwrap().rate, Decimal::ONE);
        assert!(table.iter().all(|info| info.rate > Decimal::ZERO));
    }

    #[test]
    fn test_iteration_order_base_first() {
        let codes: Vec<&str> = CurrencyTable::standard()
            .iter()
            .map(|info| info.code.as_str())
            .collect();
        assert_eq!(
            codes,
            ["USD", "AUD", "CAD", "EUR", "GBP", "INR", "JPY", "NOK", "SGD"]
        );
    }

    #[test]
    fn test_unknown_currency() {
        let table = CurrencyTable::standard();
        let xyz = CurrencyCode::parse("XYZ").unwrap();
        assert!(!table.contains(xyz));
        assert_eq!(table.get(xyz), Err(CurrencyError::UnknownCurrency(xyz)));
    }

    #[test]
    fn test_lookup_code() {
        let table = CurrencyTable::standard();
        assert_eq!(table.lookup_code("inr"), Ok(CurrencyCode::INR));
        assert!(matches!(
            table.lookup_code("XYZ"),
            Err(CurrencyError::UnknownCurrency(_))
        ));
        assert!(matches!(
            table.lookup_code("rupees"),
            Err(CurrencyError::InvalidCode(_))
        ));
    }

    #[test]
    fn test_resolve_missing_code_is_base() {
        let table = CurrencyTable::standard();
        assert_eq!(table.resolve(None), Ok(CurrencyCode::USD));
        assert_eq!(table.resolve(Some("eur")), Ok(CurrencyCode::EUR));
        assert!(matches!(
            table.resolve(Some("XYZ")),
            Err(CurrencyError::UnknownCurrency(_))
        ));
        assert!(matches!(
            table.resolve(Some("")),
            Err(CurrencyError::InvalidCode(_))
        ));
    }

    #[test]
    fn test_new_rejects_non_positive_rate() {
        let entries = vec![
            CurrencyInfo::new(CurrencyCode::USD, "$", "US Dollar", Decimal::ONE),
            CurrencyInfo::new(CurrencyCode::EUR, "€", "Euro", Decimal::ZERO),
        ];
        assert_eq!(
            CurrencyTable::new(CurrencyCode::USD, entries).unwrap_err(),
            CurrencyError::InvalidRate {
                code: CurrencyCode::EUR,
                rate: Decimal::ZERO
            }
        );
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let entries = vec![
            CurrencyInfo::new(CurrencyCode::USD, "$", "US Dollar", Decimal::ONE),
            CurrencyInfo::new(CurrencyCode::USD, "US$", "Dollar", Decimal::ONE),
        ];
        assert_eq!(
            CurrencyTable::new(CurrencyCode::USD, entries).unwrap_err(),
            CurrencyError::DuplicateCurrency(CurrencyCode::USD)
        );
    }

    #[test]
    fn test_new_requires_base_at_rate_one() {
        let missing = vec![CurrencyInfo::new(CurrencyCode::EUR, "€", "Euro", dec!(0.92))];
        assert_eq!(
            CurrencyTable::new(CurrencyCode::USD, missing).unwrap_err(),
            CurrencyError::MissingBaseCurrency(CurrencyCode::USD)
        );

        let wrong_rate = vec![CurrencyInfo::new(CurrencyCode::EUR, "€", "Euro", dec!(0.92))];
        assert_eq!(
            CurrencyTable::new(CurrencyCode::EUR, wrong_rate).unwrap_err(),
            CurrencyError::MissingBaseCurrency(CurrencyCode::EUR)
        );
    }

    #[test]
    fn test_custom_base_currency() {
        let entries = vec![
            CurrencyInfo::new(CurrencyCode::USD, "$", "US Dollar", dec!(1.09)),
            CurrencyInfo::new(CurrencyCode::EUR, "€", "Euro", dec!(1.00)),
        ];
        let table = CurrencyTable::new(CurrencyCode::EUR, entries).unwrap();
        assert_eq!(table.base(), CurrencyCode::EUR);
        assert_eq!(table.iter().next().unwrap().code, CurrencyCode::EUR);
        assert_eq!(table.resolve(None), Ok(CurrencyCode::EUR));
    }
}
