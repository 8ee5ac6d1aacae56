//! # Salary Calculations
//!
//! Pure functions that turn reference data plus a user's salary into derived
//! metrics. Every function takes the [`SalaryRepository`] by reference and
//! never mutates it.
//!
//! ## Conventions
//!
//! - Unresolved keys surface as `None`; an aggregate that needs a lookup
//!   returns `None` rather than computing with missing data.
//! - Divisions by a zero source value are guarded in place, so no output
//!   field is ever NaN or infinite.
//! - Amounts are `f64` and unrounded unless the field is documented as a
//!   rounded integer (percentiles, Big Mac counts, percent changes).
//!
//! ## Available Calculations
//!
//! - [`currency`] - USD/local currency conversion
//! - [`big_mac`] - Big Mac purchasing-power count
//! - [`percentile`] - Global and city percentile ranking
//! - [`comparison`] - Full salary comparison and representative countries
//! - [`relocation`] - City-to-city relocation verdict
//! - [`lookup`] - Single-country and city lookups, country vs country
//!
//! [`SalaryRepository`]: crate::data::SalaryRepository

pub mod big_mac;
pub mod comparison;
pub mod currency;
pub mod lookup;
pub mod percentile;
pub mod relocation;

pub use big_mac::{calculate_big_mac_count, BigMacCount};
pub use comparison::{
    calculate_salary_result, classify_relative, pick_representative_countries,
    CountryComparison, RelativeToUser, SalaryComparisonResult,
};
pub use currency::{convert_from_usd, convert_to_usd};
pub use lookup::{
    compare_countries, lookup_city_salary, lookup_salary, top_paying_countries, CityLookup,
    CountryComparisonPair, SalaryLookup,
};
pub use percentile::{calculate_city_percentile, calculate_global_percentile};
pub use relocation::{calculate_relocation, classify_relocation, RelocationResult, Verdict};

/// Percent change from `from` to `to`, rounded to the nearest integer.
///
/// Returns 0 when `from` is zero.
pub fn percent_change(from: f64, to: f64) -> i64 {
    if from == 0.0 {
        return 0;
    }
    ((to - from) / from * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(100.0, 120.0), 20);
        assert_eq!(percent_change(80_000.0, 84_000.0), 5);
        assert_eq!(percent_change(160_000.0, 126_500.0), -21);
        assert_eq!(percent_change(50.0, 0.0), -100);
    }

    #[test]
    fn test_percent_change_zero_source() {
        assert_eq!(percent_change(0.0, 500.0), 0);
        assert_eq!(percent_change(0.0, 0.0), 0);
    }
}
