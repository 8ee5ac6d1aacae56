//! # Relocation Verdict
//!
//! Compares the same occupation in two cities and judges whether the move
//! improves real purchasing power.
//!
//! The verdict depends only on the change in cost-of-living-adjusted salary.
//! The nominal change is reported but does not influence it.
//!
//! | COL-adjusted change | verdict |
//! |---|---|
//! | ≥ +20% | strong-yes |
//! | +5% to < +20% | yes |
//! | −5% to < +5% | neutral |
//! | −20% to < −5% | no |
//! | < −20% | strong-no |
//!
//! ## Example
//!
//! ```rust
//! use salary_core::calculations::relocation::{classify_relocation, Verdict};
//!
//! assert_eq!(classify_relocation(20.0).0, Verdict::StrongYes);
//! assert_eq!(classify_relocation(19.9).0, Verdict::Yes);
//! assert_eq!(classify_relocation(-5.0).0, Verdict::Neutral);
//! assert_eq!(classify_relocation(-20.1).0, Verdict::StrongNo);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::big_mac::calculate_big_mac_count;
use super::percent_change;
use super::percentile::calculate_city_percentile;
use crate::data::{City, CitySalaryEntry, Country, Occupation, SalaryRepository};

/// Lower bound (inclusive) of each verdict band, in percent
const STRONG_YES_FROM: f64 = 20.0;
const YES_FROM: f64 = 5.0;
const NEUTRAL_FROM: f64 = -5.0;
const NO_FROM: f64 = -20.0;

/// Five-level judgment of a move between two cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    StrongYes,
    Yes,
    Neutral,
    No,
    StrongNo,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::StrongYes => "strong-yes",
            Verdict::Yes => "yes",
            Verdict::Neutral => "neutral",
            Verdict::No => "no",
            Verdict::StrongNo => "strong-no",
        }
    }

    /// True for the two positive verdicts
    pub fn is_favorable(&self) -> bool {
        matches!(self, Verdict::StrongYes | Verdict::Yes)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a cost-of-living-adjusted percent change.
///
/// Returns the verdict and a sentence quoting the change.
pub fn classify_relocation(col_adjusted_change: f64) -> (Verdict, String) {
    let pct = col_adjusted_change;
    if pct >= STRONG_YES_FROM {
        (
            Verdict::StrongYes,
            format!("Your real purchasing power rises by {}% after cost of living. A strong financial case for moving.", pct),
        )
    } else if pct >= YES_FROM {
        (
            Verdict::Yes,
            format!("Your real purchasing power rises by {}% after cost of living. The move pays off financially.", pct),
        )
    } else if pct >= NEUTRAL_FROM {
        (
            Verdict::Neutral,
            format!("Your real purchasing power changes by {}% after cost of living. Financially the two cities are about even.", pct),
        )
    } else if pct >= NO_FROM {
        (
            Verdict::No,
            format!("Your real purchasing power falls by {}% after cost of living. The move costs you financially.", -pct),
        )
    } else {
        (
            Verdict::StrongNo,
            format!("Your real purchasing power falls by {}% after cost of living. A significant financial step back.", -pct),
        )
    }
}

/// Output of [`calculate_relocation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelocationResult {
    pub occupation: Occupation,
    pub from_city: City,
    pub to_city: City,
    pub from_country: Country,
    pub to_country: Country,
    pub from_salary: CitySalaryEntry,
    pub to_salary: CitySalaryEntry,
    /// Percent change in estimated salary
    pub nominal_change: i64,
    /// Percent change in cost-of-living-adjusted salary
    pub col_adjusted_change: i64,
    /// Big Macs per year in the origin city, 0 = N/A
    pub big_mac_from: i64,
    /// Big Macs per year in the destination city, 0 = N/A
    pub big_mac_to: i64,
    /// Percent change in Big Mac count, 0 when the origin count is 0
    pub big_mac_change: i64,
    /// City percentile of the origin salary
    pub percentile_from: u8,
    /// City percentile of the destination salary
    pub percentile_to: u8,
    pub verdict: Verdict,
    pub verdict_reason: String,
}

/// Evaluate moving from one city to another for an occupation.
///
/// # Returns
///
/// * `Some(RelocationResult)` - all metrics and the verdict
/// * `None` - the occupation, either city, either city's country, or either
///   city salary entry does not exist
pub fn calculate_relocation(
    data: &SalaryRepository,
    occupation_slug: &str,
    from_city_slug: &str,
    to_city_slug: &str,
) -> Option<RelocationResult> {
    let occupation = data.occupation(occupation_slug)?;
    let from_city = data.city(from_city_slug)?;
    let to_city = data.city(to_city_slug)?;
    let from_country = data.country(&from_city.country_code)?;
    let to_country = data.country(&to_city.country_code)?;
    let from_salary = data.city_salary_entry(occupation_slug, from_city_slug)?;
    let to_salary = data.city_salary_entry(occupation_slug, to_city_slug)?;

    let nominal_change = percent_change(from_salary.estimated_salary, to_salary.estimated_salary);
    let col_adjusted_change = percent_change(from_salary.col_adjusted, to_salary.col_adjusted);

    let big_mac_from = calculate_big_mac_count(data, &from_country.code, from_salary.estimated_salary);
    let big_mac_to = calculate_big_mac_count(data, &to_country.code, to_salary.estimated_salary);
    let big_mac_change = percent_change(big_mac_from as f64, big_mac_to as f64);

    let (verdict, verdict_reason) = classify_relocation(col_adjusted_change as f64);

    Some(RelocationResult {
        occupation: occupation.clone(),
        from_city: from_city.clone(),
        to_city: to_city.clone(),
        from_country: from_country.clone(),
        to_country: to_country.clone(),
        from_salary: from_salary.clone(),
        to_salary: to_salary.clone(),
        nominal_change,
        col_adjusted_change,
        big_mac_from,
        big_mac_to,
        big_mac_change,
        percentile_from: calculate_city_percentile(data, occupation_slug, from_salary.estimated_salary),
        percentile_to: calculate_city_percentile(data, occupation_slug, to_salary.estimated_salary),
        verdict,
        verdict_reason,
    })
}
