//! Property-based tests for currency conversion.
//!
//! - Identity: converting to the same currency returns the input exactly
//! - Round trip: there and back again lands within a tiny tolerance
//! - Monotonicity: conversion is strictly increasing in the amount
//! - Linearity: converting a sum equals the sum of conversions

use proptest::prelude::*;
use rust_decimal::Decimal;
use topskyll_shared::CurrencyCode;

use super::table::CurrencyTable;

/// Strategy to generate salary-sized amounts (0.01 to 1,000,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to pick any currency from the standard table.
fn table_currency() -> impl Strategy<Value = CurrencyCode> {
    let codes: Vec<CurrencyCode> = CurrencyTable::standard()
        .iter()
        .map(|info| info.code)
        .collect();
    prop::sample::select(codes)
}

fn tolerance() -> Decimal {
    Decimal::new(1, 12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* amount and currency, convert(a, c, c) SHALL equal a exactly.
    #[test]
    fn prop_identity_conversion_is_exact(
        amount in positive_amount(),
        currency in table_currency(),
    ) {
        let table = CurrencyTable::standard();
        let result = table.convert(amount, currency, currency).unwrap();
        prop_assert_eq!(result, amount);
        prop_assert_eq!(result.scale(), amount.scale());
    }

    /// *For any* amount and currency pair, converting there and back SHALL
    /// return the original amount within tolerance.
    #[test]
    fn prop_round_trip_is_stable(
        amount in positive_amount(),
        from in table_currency(),
        to in table_currency(),
    ) {
        let table = CurrencyTable::standard();
        let there = table.convert(amount, from, to).unwrap();
        let back = table.convert(there, to, from).unwrap();
        prop_assert!(
            (back - amount).abs() <= tolerance(),
            "{} {} -> {} {} -> {} {}",
            amount, from, there, to, back, from
        );
    }

    /// *For any* two distinct amounts, the larger SHALL convert to the larger result.
    #[test]
    fn prop_conversion_is_strictly_increasing(
        a in positive_amount(),
        b in positive_amount(),
        from in table_currency(),
        to in table_currency(),
    ) {
        prop_assume!(a != b);
        let table = CurrencyTable::standard();
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let low_converted = table.convert(low, from, to).unwrap();
        let high_converted = table.convert(high, from, to).unwrap();
        prop_assert!(low_converted < high_converted);
    }

    /// *For any* two amounts, convert(a + b) SHALL equal convert(a) + convert(b)
    /// within tolerance.
    #[test]
    fn prop_conversion_is_linear(
        a in positive_amount(),
        b in positive_amount(),
        from in table_currency(),
        to in table_currency(),
    ) {
        let table = CurrencyTable::standard();
        let whole = table.convert(a + b, from, to).unwrap();
        let parts = table.convert(a, from, to).unwrap() + table.convert(b, from, to).unwrap();
        prop_assert!((whole - parts).abs() <= tolerance());
    }

    /// *For any* non-negative amount, conversion SHALL never produce a negative value.
    #[test]
    fn prop_conversion_preserves_sign(
        amount in positive_amount(),
        from in table_currency(),
        to in table_currency(),
    ) {
        let table = CurrencyTable::standard();
        prop_assert!(table.convert(amount, from, to).unwrap() > Decimal::ZERO);
    }
}
