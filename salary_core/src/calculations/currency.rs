//! # Currency Conversion
//!
//! Converts between local currency and USD using each country's exchange
//! rate (local units per 1 USD). Results are unrounded; rounding belongs to
//! whoever displays the number.
//!
//! When the country code does not resolve, the amount is returned unchanged.
//! Callers that need to distinguish that case should resolve the country
//! first with [`SalaryRepository::country`].
//!
//! ## Example
//!
//! ```rust
//! use salary_core::calculations::currency::{convert_from_usd, convert_to_usd};
//! use salary_core::data::{Country, Dataset, SalaryRepository};
//!
//! let mut dataset = Dataset::empty("doc");
//! dataset.countries.push(Country {
//!     code: "IN".to_string(),
//!     slug: "india".to_string(),
//!     name: "India".to_string(),
//!     flag: String::new(),
//!     currency: "INR".to_string(),
//!     currency_symbol: "₹".to_string(),
//!     exchange_rate: 83.0,
//!     oecd_avg_wage: None,
//!     gdp_per_capita: 2_500.0,
//! });
//! let repo = SalaryRepository::new(dataset).unwrap();
//!
//! assert_eq!(convert_to_usd(&repo, 3_320_000.0, "IN"), 40_000.0);
//! assert_eq!(convert_from_usd(&repo, 1_000.0, "IN"), 83_000.0);
//! assert_eq!(convert_to_usd(&repo, 500.0, "XX"), 500.0);
//! ```
//!
//! [`SalaryRepository::country`]: crate::data::SalaryRepository::country

use crate::data::SalaryRepository;

/// Convert a local-currency amount to USD.
pub fn convert_to_usd(data: &SalaryRepository, amount_local: f64, country_code: &str) -> f64 {
    match data.country(country_code) {
        Some(country) => amount_local / country.exchange_rate,
        None => amount_local,
    }
}

/// Convert a USD amount to the country's local currency.
pub fn convert_from_usd(data: &SalaryRepository, amount_usd: f64, country_code: &str) -> f64 {
    match data.country(country_code) {
        Some(country) => amount_usd * country.exchange_rate,
        None => amount_usd,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_convert_to_usd() {
        let repo = fixtures::sample_repository();
        assert_eq!(convert_to_usd(&repo, 3_320_000.0, "IN"), 40_000.0);
        assert!((convert_to_usd(&repo, 74_000.0, "DE") - 80_434.78).abs() < 0.01);
        assert_eq!(convert_to_usd(&repo, 1_000.0, "US"), 1_000.0);
    }

    #[test]
    fn test_convert_from_usd() {
        let repo = fixtures::sample_repository();
        assert_eq!(convert_from_usd(&repo, 10_000.0, "BR"), 50_000.0);
        assert!((convert_from_usd(&repo, 100.0, "GB") - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_country_is_identity() {
        let repo = fixtures::sample_repository();
        assert_eq!(convert_to_usd(&repo, 1234.5, "ZZ"), 1234.5);
        assert_eq!(convert_from_usd(&repo, 1234.5, "ZZ"), 1234.5);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let repo = fixtures::sample_repository();
        let amounts = [0.01, 1.0, 999.99, 52_000.0, 3_320_000.0, 987_654_321.0];
        for country in repo.countries() {
            for &amount in &amounts {
                let usd = convert_to_usd(&repo, amount, &country.code);
                let back = convert_from_usd(&repo, usd, &country.code);
                assert!(
                    (back - amount).abs() <= amount * 1e-12,
                    "{} {} -> {} -> {}",
                    country.code,
                    amount,
                    usd,
                    back
                );
            }
        }
    }
}
