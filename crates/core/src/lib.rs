//! Salary and currency logic for Topskyll.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Every operation is a synchronous function of its inputs and an immutable
//! currency table, so it can be called from any number of threads at once.
//!
//! # Modules
//!
//! - `currency` - Currency table, conversion through the base currency
//! - `salary` - Salary ranges, display formatting, range filtering, filter buckets

pub mod currency;
pub mod salary;
