//! Salary ranges: normalization, display formatting, range filtering, and
//! the pre-built buckets used by filter menus.

pub mod buckets;
pub mod filter;
pub mod format;
pub mod range;

pub use buckets::{SalaryBucket, popular_ranges};
pub use filter::{SalaryFilter, filter_by_range};
pub use format::{UNDISCLOSED, format_amount, format_range, format_salary};
pub use range::{HasSalary, SalaryRange, StoredSalary, normalize_to_currency, with_default_currency};
