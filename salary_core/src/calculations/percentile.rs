//! # Percentile Ranking
//!
//! Ranks a salary against every tracked country (or city) for one
//! occupation: the share of entries whose estimated salary is **at or
//! below** the given salary, as a whole percentage.
//!
//! The comparison is inclusive, so a salary equal to the highest entry
//! ranks 100 and a salary equal to the lowest of two entries ranks 50.
//! A salary below every entry ranks 0.
//!
//! ## Example
//!
//! ```rust
//! use salary_core::calculations::percentile::rank_percentile;
//!
//! let salaries = [120_000.0, 40_000.0];
//! assert_eq!(rank_percentile(&salaries, 40_000.0), 50);
//! assert_eq!(rank_percentile(&salaries, 39_999.0), 0);
//! assert_eq!(rank_percentile(&salaries, 500_000.0), 100);
//! assert_eq!(rank_percentile(&[], 1.0), 50);
//! ```

use crate::data::SalaryRepository;

/// Percentile returned when there is nothing to rank against
pub const DEFAULT_PERCENTILE: u8 = 50;

/// Rank `salary_usd` within `salaries`.
///
/// Returns [`DEFAULT_PERCENTILE`] for an empty slice.
pub fn rank_percentile(salaries: &[f64], salary_usd: f64) -> u8 {
    if salaries.is_empty() {
        return DEFAULT_PERCENTILE;
    }

    let at_or_below = salaries.iter().filter(|&&s| s <= salary_usd).count();
    let percentile = (100.0 * at_or_below as f64 / salaries.len() as f64).round();
    percentile.clamp(0.0, 100.0) as u8
}

/// Percentile of `salary_usd` among all countries for the occupation.
pub fn calculate_global_percentile(
    data: &SalaryRepository,
    occupation_slug: &str,
    salary_usd: f64,
) -> u8 {
    let salaries: Vec<f64> = data
        .salary_entries(occupation_slug)
        .iter()
        .map(|e| e.estimated_salary)
        .collect();
    rank_percentile(&salaries, salary_usd)
}

/// Percentile of `salary_usd` among all cities for the occupation.
pub fn calculate_city_percentile(
    data: &SalaryRepository,
    occupation_slug: &str,
    salary_usd: f64,
) -> u8 {
    let salaries: Vec<f64> = data
        .city_salary_entries(occupation_slug)
        .iter()
        .map(|e| e.estimated_salary)
        .collect();
    rank_percentile(&salaries, salary_usd)
}
