//! # Big Mac Purchasing Power
//!
//! Expresses an annual USD salary as the number of Big Macs it buys at the
//! country's Big Mac price.
//!
//! A count of `0` is the "not applicable" sentinel: the country has no Big
//! Mac price. It must be shown as "N/A", never as a real zero. Use
//! [`BigMacCount`] when the distinction has to survive serialization.

use serde::{Deserialize, Serialize};

use crate::data::SalaryRepository;

/// Number of Big Macs `salary_usd` buys in the country.
///
/// Returns `0` when the country has no Big Mac entry. The salary is not
/// validated here.
pub fn calculate_big_mac_count(data: &SalaryRepository, country_code: &str, salary_usd: f64) -> i64 {
    match data.big_mac_entry(country_code) {
        Some(entry) => (salary_usd / entry.dollar_price).round() as i64,
        None => 0,
    }
}

/// A Big Mac count with the N/A sentinel made explicit.
///
/// Serializes as a number, or `null` when not applicable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BigMacCount(pub Option<i64>);

impl BigMacCount {
    /// Interpret a raw count from [`calculate_big_mac_count`].
    pub fn from_count(count: i64) -> Self {
        if count == 0 {
            BigMacCount(None)
        } else {
            BigMacCount(Some(count))
        }
    }

    pub fn is_available(&self) -> bool {
        self.0.is_some()
    }

    /// Display form: the count, or "N/A"
    pub fn display(&self) -> String {
        match self.0 {
            Some(count) => count.to_string(),
            None => "N/A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_big_mac_count() {
        let repo = fixtures::sample_repository();
        assert_eq!(calculate_big_mac_count(&repo, "US", 120_000.0), 24_000);
        assert_eq!(calculate_big_mac_count(&repo, "DE", 80_000.0), 20_000);
    }

    #[test]
    fn test_big_mac_count_rounds_to_nearest() {
        let repo = fixtures::sample_repository();
        // 80_434.78 / 4.0 = 20_108.7
        assert_eq!(calculate_big_mac_count(&repo, "DE", 80_434.78), 20_109);
        // 12.4 / 5.0 = 2.48
        assert_eq!(calculate_big_mac_count(&repo, "US", 12.4), 2);
    }

    #[test]
    fn test_missing_entry_is_zero_sentinel() {
        let repo = fixtures::sample_repository();
        for salary in [0.0, 1.0, 40_000.0, 1e9, -500.0] {
            assert_eq!(calculate_big_mac_count(&repo, "IN", salary), 0);
            assert_eq!(calculate_big_mac_count(&repo, "ZZ", salary), 0);
        }
    }

    #[test]
    fn test_count_display() {
        assert_eq!(BigMacCount::from_count(0).display(), "N/A");
        assert!(!BigMacCount::from_count(0).is_available());
        assert_eq!(BigMacCount::from_count(24_000).display(), "24000");
        assert_eq!(serde_json::to_string(&BigMacCount::from_count(0)).unwrap(), "null");
        assert_eq!(serde_json::to_string(&BigMacCount::from_count(12)).unwrap(), "12");
    }
}
