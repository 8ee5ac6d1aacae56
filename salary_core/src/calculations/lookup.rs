//! # Salary Lookups
//!
//! Single-entity views used by the salary lookup and "country vs country"
//! pages: one occupation in one country, one occupation in one city, two
//! countries side by side, and the best-paying countries for an occupation.

use serde::{Deserialize, Serialize};

use super::big_mac::calculate_big_mac_count;
use super::currency::convert_from_usd;
use super::percent_change;
use super::percentile::{calculate_city_percentile, calculate_global_percentile};
use crate::data::{City, Country, Occupation, SalaryRepository};

/// One occupation's figures in one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryLookup {
    pub occupation: Occupation,
    pub country: Country,
    pub estimated_salary_usd: f64,
    /// Estimated salary converted to the country's currency
    pub estimated_salary_local: f64,
    pub ppp_adjusted: f64,
    /// Big Macs per year, 0 = N/A
    pub big_mac_count: i64,
    /// The country's global percentile for this occupation
    pub percentile: u8,
    /// Estimated salary as a fraction of the US reference salary (0 if no reference)
    pub ratio_to_us_base: f64,
    /// Estimated salary as a fraction of the OECD average wage, when known
    pub ratio_to_average_wage: Option<f64>,
}

/// One occupation's figures in one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityLookup {
    pub occupation: Occupation,
    pub city: City,
    pub country: Country,
    pub estimated_salary_usd: f64,
    pub estimated_salary_local: f64,
    pub ppp_adjusted: f64,
    pub col_adjusted: f64,
    /// Big Macs per year at the country's price, 0 = N/A
    pub big_mac_count: i64,
    /// Percentile among all cities for this occupation
    pub city_percentile: u8,
    /// National estimate for the same occupation, if the country has one
    pub national_salary_usd: Option<f64>,
}

/// Two countries side by side for one occupation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryComparisonPair {
    pub first: SalaryLookup,
    pub second: SalaryLookup,
    /// Percent change in estimated salary going from first to second
    pub nominal_difference: i64,
    /// Percent change in PPP-adjusted salary going from first to second
    pub ppp_difference: i64,
    /// Code of the better-paid country, `None` when equal
    pub higher_paying: Option<String>,
}

/// Look up one occupation in one country.
///
/// Returns `None` if the occupation, the country, or their salary entry is
/// missing.
pub fn lookup_salary(
    data: &SalaryRepository,
    occupation_slug: &str,
    country_code: &str,
) -> Option<SalaryLookup> {
    let occupation = data.occupation(occupation_slug)?;
    let country = data.country(country_code)?;
    let entry = data.salary_entry(occupation_slug, country_code)?;

    let estimated = entry.estimated_salary;
    let ratio_to_us_base = if occupation.base_usa > 0.0 {
        estimated / occupation.base_usa
    } else {
        0.0
    };
    let ratio_to_average_wage = country
        .oecd_avg_wage
        .filter(|&wage| wage > 0.0)
        .map(|wage| estimated / wage);

    Some(SalaryLookup {
        occupation: occupation.clone(),
        country: country.clone(),
        estimated_salary_usd: estimated,
        estimated_salary_local: convert_from_usd(data, estimated, country_code),
        ppp_adjusted: entry.ppp_adjusted,
        big_mac_count: calculate_big_mac_count(data, country_code, estimated),
        percentile: calculate_global_percentile(data, occupation_slug, estimated),
        ratio_to_us_base,
        ratio_to_average_wage,
    })
}

/// Look up one occupation in one city.
pub fn lookup_city_salary(
    data: &SalaryRepository,
    occupation_slug: &str,
    city_slug: &str,
) -> Option<CityLookup> {
    let occupation = data.occupation(occupation_slug)?;
    let city = data.city(city_slug)?;
    let country = data.country(&city.country_code)?;
    let entry = data.city_salary_entry(occupation_slug, city_slug)?;

    let estimated = entry.estimated_salary;
    Some(CityLookup {
        occupation: occupation.clone(),
        city: city.clone(),
        country: country.clone(),
        estimated_salary_usd: estimated,
        estimated_salary_local: convert_from_usd(data, estimated, &country.code),
        ppp_adjusted: entry.ppp_adjusted,
        col_adjusted: entry.col_adjusted,
        big_mac_count: calculate_big_mac_count(data, &country.code, estimated),
        city_percentile: calculate_city_percentile(data, occupation_slug, estimated),
        national_salary_usd: data
            .salary_entry(occupation_slug, &country.code)
            .map(|e| e.estimated_salary),
    })
}

/// Compare two countries for one occupation.
///
/// Returns `None` if either side cannot be looked up.
pub fn compare_countries(
    data: &SalaryRepository,
    occupation_slug: &str,
    first_code: &str,
    second_code: &str,
) -> Option<CountryComparisonPair> {
    let first = lookup_salary(data, occupation_slug, first_code)?;
    let second = lookup_salary(data, occupation_slug, second_code)?;

    let nominal_difference = percent_change(first.estimated_salary_usd, second.estimated_salary_usd);
    let ppp_difference = percent_change(first.ppp_adjusted, second.ppp_adjusted);

    let higher_paying = if first.estimated_salary_usd > second.estimated_salary_usd {
        Some(first.country.code.clone())
    } else if second.estimated_salary_usd > first.estimated_salary_usd {
        Some(second.country.code.clone())
    } else {
        None
    };

    Some(CountryComparisonPair {
        first,
        second,
        nominal_difference,
        ppp_difference,
        higher_paying,
    })
}

/// The best-paid countries for an occupation, highest first.
///
/// Returns at most `limit` entries; an unknown occupation yields an empty list.
pub fn top_paying_countries(
    data: &SalaryRepository,
    occupation_slug: &str,
    limit: usize,
) -> Vec<SalaryLookup> {
    let mut lookups: Vec<SalaryLookup> = data
        .salary_entries(occupation_slug)
        .iter()
        .filter_map(|e| lookup_salary(data, occupation_slug, &e.country_code))
        .collect();
    lookups.sort_by(|a, b| b.estimated_salary_usd.total_cmp(&a.estimated_salary_usd));
    lookups.truncate(limit);
    lookups
}
