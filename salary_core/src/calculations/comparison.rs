//! # Salary Comparison
//!
//! The main "how does my salary compare" calculation: converts the user's
//! local salary to USD, ranks it globally, and lines it up against every
//! tracked country for the same occupation.
//!
//! ## Relative buckets
//!
//! Each country is classified by `country_salary / user_salary`:
//!
//! | ratio | bucket |
//! |---|---|
//! | > 1.15 | higher |
//! | < 0.85 | lower |
//! | otherwise | similar |
//!
//! A user salary below 1 USD is floored to 1 for the ratio.
//!
//! ## Example
//!
//! ```rust
//! use salary_core::calculations::comparison::{classify_relative, RelativeToUser};
//!
//! assert_eq!(classify_relative(115_001.0, 100_000.0), RelativeToUser::Higher);
//! assert_eq!(classify_relative(115_000.0, 100_000.0), RelativeToUser::Similar);
//! assert_eq!(classify_relative(84_999.0, 100_000.0), RelativeToUser::Lower);
//! ```

use serde::{Deserialize, Serialize};

use super::big_mac::calculate_big_mac_count;
use super::currency::convert_to_usd;
use super::percentile::calculate_global_percentile;
use crate::data::{Country, Occupation, SalaryRepository};

/// Ratio above which a country counts as paying more than the user
pub const HIGHER_RATIO: f64 = 1.15;

/// Ratio below which a country counts as paying less than the user
pub const LOWER_RATIO: f64 = 0.85;

/// Number of countries [`pick_representative_countries`] aims for
pub const REPRESENTATIVE_COUNT: usize = 3;

/// Where a country's salary sits relative to the user's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeToUser {
    Higher,
    Similar,
    Lower,
}

impl RelativeToUser {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelativeToUser::Higher => "higher",
            RelativeToUser::Similar => "similar",
            RelativeToUser::Lower => "lower",
        }
    }
}

/// Classify a country's salary against the user's, both in USD.
pub fn classify_relative(country_salary_usd: f64, user_salary_usd: f64) -> RelativeToUser {
    let ratio = country_salary_usd / user_salary_usd.max(1.0);
    if ratio > HIGHER_RATIO {
        RelativeToUser::Higher
    } else if ratio < LOWER_RATIO {
        RelativeToUser::Lower
    } else {
        RelativeToUser::Similar
    }
}

/// One country's figures for the compared occupation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryComparison {
    pub country: Country,
    /// Estimated salary in USD (0 when the dataset has no entry)
    pub estimated_salary: f64,
    /// PPP-adjusted salary (0 when the dataset has no entry)
    pub ppp_adjusted: f64,
    /// Big Macs per year at the country's price, 0 = N/A
    pub big_mac_count: i64,
    /// This country's own global percentile for the occupation
    pub percentile: u8,
    pub relative_to_user: RelativeToUser,
}

/// Output of [`calculate_salary_result`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryComparisonResult {
    pub occupation: Occupation,
    /// The user's country
    pub country: Country,
    /// User salary as entered, local currency
    pub salary_local: f64,
    /// User salary converted to USD
    pub salary_usd: f64,
    /// User's global percentile
    pub percentile: u8,
    /// Big Macs per year in the user's country, 0 = N/A
    pub big_mac_count: i64,
    /// Every tracked country, highest estimated salary first
    pub comparisons: Vec<CountryComparison>,
}

impl SalaryComparisonResult {
    /// The comparison row for the user's own country
    pub fn own_country(&self) -> Option<&CountryComparison> {
        self.comparisons
            .iter()
            .find(|c| c.country.code == self.country.code)
    }

    /// Number of countries in each bucket as (higher, similar, lower)
    pub fn bucket_counts(&self) -> (usize, usize, usize) {
        let count = |bucket: RelativeToUser| {
            self.comparisons
                .iter()
                .filter(|c| c.relative_to_user == bucket)
                .count()
        };
        (
            count(RelativeToUser::Higher),
            count(RelativeToUser::Similar),
            count(RelativeToUser::Lower),
        )
    }
}

/// Compare a user's salary against every tracked country.
///
/// `salary_local` must already be validated as positive by the caller.
///
/// # Returns
///
/// * `Some(SalaryComparisonResult)` - comparisons sorted by estimated salary, descending
/// * `None` - the occupation or the country does not exist
///
/// # Example
///
/// ```rust
/// use salary_core::calculations::comparison::calculate_salary_result;
/// use salary_core::data::{Dataset, SalaryRepository};
///
/// let repo = SalaryRepository::new(Dataset::empty("doc")).unwrap();
/// assert!(calculate_salary_result(&repo, "nurse", "US", 60_000.0).is_none());
/// ```
pub fn calculate_salary_result(
    data: &SalaryRepository,
    occupation_slug: &str,
    country_code: &str,
    salary_local: f64,
) -> Option<SalaryComparisonResult> {
    let occupation = data.occupation(occupation_slug)?;
    let country = data.country(country_code)?;

    let salary_usd = convert_to_usd(data, salary_local, country_code);
    let percentile = calculate_global_percentile(data, occupation_slug, salary_usd);

    let mut comparisons: Vec<CountryComparison> = data
        .countries()
        .iter()
        .map(|c| {
            let (estimated_salary, ppp_adjusted) = data
                .salary_entry(occupation_slug, &c.code)
                .map(|e| (e.estimated_salary, e.ppp_adjusted))
                .unwrap_or((0.0, 0.0));

            CountryComparison {
                country: c.clone(),
                estimated_salary,
                ppp_adjusted,
                big_mac_count: calculate_big_mac_count(data, &c.code, estimated_salary),
                percentile: calculate_global_percentile(data, occupation_slug, estimated_salary),
                relative_to_user: classify_relative(estimated_salary, salary_usd),
            }
        })
        .collect();

    comparisons.sort_by(|a, b| b.estimated_salary.total_cmp(&a.estimated_salary));

    Some(SalaryComparisonResult {
        occupation: occupation.clone(),
        country: country.clone(),
        salary_local,
        salary_usd,
        percentile,
        big_mac_count: calculate_big_mac_count(data, country_code, salary_usd),
        comparisons,
    })
}

/// Pick up to three countries that illustrate the spread of salaries.
///
/// Takes the first "higher", the first "similar" and the lowest-paid
/// "lower" country from `comparisons` (which should be sorted by salary,
/// descending). If a bucket is empty the remaining slots are filled from the
/// unused countries at evenly spaced positions. The user's own country is
/// never picked.
pub fn pick_representative_countries<'a>(
    comparisons: &'a [CountryComparison],
    user_country_code: &str,
) -> Vec<&'a CountryComparison> {
    let pool: Vec<&CountryComparison> = comparisons
        .iter()
        .filter(|c| c.country.code != user_country_code)
        .collect();

    let first_in = |bucket: RelativeToUser| pool.iter().copied().find(|c| c.relative_to_user == bucket);
    let higher = first_in(RelativeToUser::Higher);
    let similar = first_in(RelativeToUser::Similar);
    let lower = pool
        .iter()
        .rev()
        .copied()
        .find(|c| c.relative_to_user == RelativeToUser::Lower);

    let mut picked: Vec<&CountryComparison> = [higher, similar, lower].into_iter().flatten().collect();

    if picked.len() < REPRESENTATIVE_COUNT {
        let remaining: Vec<&CountryComparison> = pool
            .iter()
            .copied()
            .filter(|c| !picked.iter().any(|p| p.country.code == c.country.code))
            .collect();
        let needed = (REPRESENTATIVE_COUNT - picked.len()).min(remaining.len());
        for i in 0..needed {
            picked.push(remaining[i * remaining.len() / needed]);
        }
    }

    picked
}
