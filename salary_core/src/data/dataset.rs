//! The raw dataset bundle and its load-time validation.
//!
//! A [`Dataset`] is what the loader reads from disk: one vector per JSON file
//! plus the manifest. Nothing downstream sees a dataset until
//! [`Dataset::validate`] has accepted it, so calculation code can rely on
//! positive exchange rates, positive Big Mac prices, unique keys and resolved
//! foreign keys.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::manifest::DatasetManifest;
use super::records::{BigMacEntry, City, CitySalaryEntry, Country, Occupation, SalaryEntry};
use crate::errors::{SalaryError, SalaryResult};

/// File names of a dataset snapshot, relative to its directory.
pub mod files {
    pub const MANIFEST: &str = "manifest.json";
    pub const OCCUPATIONS: &str = "occupations.json";
    pub const COUNTRIES: &str = "countries.json";
    pub const SALARIES: &str = "salaries.json";
    pub const BIG_MAC: &str = "bigmac.json";
    pub const CITIES: &str = "cities.json";
    pub const CITY_SALARIES: &str = "city-salaries.json";
}

/// A complete, unvalidated dataset snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub manifest: DatasetManifest,
    pub occupations: Vec<Occupation>,
    pub countries: Vec<Country>,
    pub salaries: Vec<SalaryEntry>,
    pub big_mac: Vec<BigMacEntry>,
    pub cities: Vec<City>,
    pub city_salaries: Vec<CitySalaryEntry>,
}

impl Dataset {
    /// Create an empty dataset with a fresh manifest.
    pub fn empty(source: impl Into<String>) -> Self {
        Dataset {
            manifest: DatasetManifest::new(source),
            occupations: Vec::new(),
            countries: Vec::new(),
            salaries: Vec::new(),
            big_mac: Vec::new(),
            cities: Vec::new(),
            city_salaries: Vec::new(),
        }
    }

    /// Total number of records across all collections.
    pub fn record_count(&self) -> usize {
        self.occupations.len()
            + self.countries.len()
            + self.salaries.len()
            + self.big_mac.len()
            + self.cities.len()
            + self.city_salaries.len()
    }

    /// Validate every record and every cross-reference.
    ///
    /// Stops at the first problem found. Collections are checked in
    /// dependency order so an unknown-reference error always names a key
    /// that is genuinely missing rather than one that was itself malformed.
    pub fn validate(&self) -> SalaryResult<()> {
        self.manifest.validate()?;

        let occupations = self.validate_occupations()?;
        let country_codes = self.validate_countries()?;
        self.validate_salaries(&occupations, &country_codes)?;
        self.validate_big_mac(&country_codes)?;
        let cities = self.validate_cities(&country_codes)?;
        self.validate_city_salaries(&occupations, &cities)?;

        Ok(())
    }

    fn validate_occupations(&self) -> SalaryResult<HashSet<&str>> {
        const COLLECTION: &str = "occupations";
        let mut slugs = HashSet::new();
        for occ in &self.occupations {
            require_key(COLLECTION, &occ.slug)?;
            require_non_negative(COLLECTION, &occ.slug, "baseUSA", occ.base_usa)?;
            if !slugs.insert(occ.slug.as_str()) {
                return Err(SalaryError::duplicate_key(COLLECTION, &occ.slug));
            }
        }
        Ok(slugs)
    }

    fn validate_countries(&self) -> SalaryResult<HashSet<&str>> {
        const COLLECTION: &str = "countries";
        let mut codes = HashSet::new();
        let mut slugs = HashSet::new();
        for country in &self.countries {
            require_key(COLLECTION, &country.code)?;
            require_key(COLLECTION, &country.slug)?;
            require_positive(COLLECTION, &country.code, "exchangeRate", country.exchange_rate)?;
            require_finite(COLLECTION, &country.code, "gdpPerCapita", country.gdp_per_capita)?;
            if let Some(wage) = country.oecd_avg_wage {
                require_non_negative(COLLECTION, &country.code, "oecdAvgWage", wage)?;
            }
            if !codes.insert(country.code.as_str()) {
                return Err(SalaryError::duplicate_key(COLLECTION, &country.code));
            }
            if !slugs.insert(country.slug.as_str()) {
                return Err(SalaryError::duplicate_key(COLLECTION, &country.slug));
            }
        }
        Ok(codes)
    }

    fn validate_salaries(
        &self,
        occupations: &HashSet<&str>,
        countries: &HashSet<&str>,
    ) -> SalaryResult<()> {
        const COLLECTION: &str = "salaries";
        let mut pairs = HashSet::new();
        for entry in &self.salaries {
            let key = format!("{}/{}", entry.occupation_slug, entry.country_code);
            require_non_negative(COLLECTION, &key, "estimatedSalary", entry.estimated_salary)?;
            require_finite(COLLECTION, &key, "pppAdjusted", entry.ppp_adjusted)?;
            if !occupations.contains(entry.occupation_slug.as_str()) {
                return Err(SalaryError::unknown_reference(
                    COLLECTION,
                    &key,
                    "occupation",
                    &entry.occupation_slug,
                ));
            }
            if !countries.contains(entry.country_code.as_str()) {
                return Err(SalaryError::unknown_reference(
                    COLLECTION,
                    &key,
                    "country",
                    &entry.country_code,
                ));
            }
            if !pairs.insert((entry.occupation_slug.as_str(), entry.country_code.as_str())) {
                return Err(SalaryError::duplicate_key(COLLECTION, key));
            }
        }
        Ok(())
    }

    fn validate_big_mac(&self, countries: &HashSet<&str>) -> SalaryResult<()> {
        const COLLECTION: &str = "bigmac";
        let mut seen = HashSet::new();
        for entry in &self.big_mac {
            require_positive(COLLECTION, &entry.country_code, "dollarPrice", entry.dollar_price)?;
            if !countries.contains(entry.country_code.as_str()) {
                return Err(SalaryError::unknown_reference(
                    COLLECTION,
                    &entry.country_code,
                    "country",
                    &entry.country_code,
                ));
            }
            if !seen.insert(entry.country_code.as_str()) {
                return Err(SalaryError::duplicate_key(COLLECTION, &entry.country_code));
            }
        }
        Ok(())
    }

    fn validate_cities(&self, countries: &HashSet<&str>) -> SalaryResult<HashSet<&str>> {
        const COLLECTION: &str = "cities";
        let mut slugs = HashSet::new();
        for city in &self.cities {
            require_key(COLLECTION, &city.slug)?;
            require_positive(COLLECTION, &city.slug, "colMultiplier", city.col_multiplier)?;
            if !countries.contains(city.country_code.as_str()) {
                return Err(SalaryError::unknown_reference(
                    COLLECTION,
                    &city.slug,
                    "country",
                    &city.country_code,
                ));
            }
            if !slugs.insert(city.slug.as_str()) {
                return Err(SalaryError::duplicate_key(COLLECTION, &city.slug));
            }
        }
        Ok(slugs)
    }

    fn validate_city_salaries(
        &self,
        occupations: &HashSet<&str>,
        cities: &HashSet<&str>,
    ) -> SalaryResult<()> {
        const COLLECTION: &str = "city-salaries";
        let mut pairs = HashSet::new();
        for entry in &self.city_salaries {
            let key = format!("{}/{}", entry.occupation_slug, entry.city_slug);
            require_non_negative(COLLECTION, &key, "estimatedSalary", entry.estimated_salary)?;
            require_finite(COLLECTION, &key, "pppAdjusted", entry.ppp_adjusted)?;
            require_finite(COLLECTION, &key, "colAdjusted", entry.col_adjusted)?;
            if !occupations.contains(entry.occupation_slug.as_str()) {
                return Err(SalaryError::unknown_reference(
                    COLLECTION,
                    &key,
                    "occupation",
                    &entry.occupation_slug,
                ));
            }
            if !cities.contains(entry.city_slug.as_str()) {
                return Err(SalaryError::unknown_reference(
                    COLLECTION,
                    &key,
                    "city",
                    &entry.city_slug,
                ));
            }
            if !pairs.insert((entry.occupation_slug.as_str(), entry.city_slug.as_str())) {
                return Err(SalaryError::duplicate_key(COLLECTION, key));
            }
        }
        Ok(())
    }
}

fn require_key(collection: &str, key: &str) -> SalaryResult<()> {
    if key.trim().is_empty() {
        return Err(SalaryError::invalid_record(collection, "<empty>", "key must not be empty"));
    }
    Ok(())
}

fn require_finite(collection: &str, key: &str, field: &str, value: f64) -> SalaryResult<()> {
    if !value.is_finite() {
        return Err(SalaryError::invalid_record(
            collection,
            key,
            format!("{} must be a finite number, got {}", field, value),
        ));
    }
    Ok(())
}

fn require_non_negative(collection: &str, key: &str, field: &str, value: f64) -> SalaryResult<()> {
    require_finite(collection, key, field, value)?;
    if value < 0.0 {
        return Err(SalaryError::invalid_record(
            collection,
            key,
            format!("{} must not be negative, got {}", field, value),
        ));
    }
    Ok(())
}

fn require_positive(collection: &str, key: &str, field: &str, value: f64) -> SalaryResult<()> {
    require_finite(collection, key, field, value)?;
    if value <= 0.0 {
        return Err(SalaryError::invalid_record(
            collection,
            key,
            format!("{} must be positive, got {}", field, value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_sample_dataset_is_valid() {
        let dataset = fixtures::sample_dataset();
        assert!(dataset.validate().is_ok());
        assert!(dataset.record_count() > 0);
    }

    #[test]
    fn test_empty_dataset_is_valid() {
        assert!(Dataset::empty("empty").validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_exchange_rate() {
        let mut dataset = fixtures::sample_dataset();
        dataset.countries[0].exchange_rate = 0.0;
        let err = dataset.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_RECORD");
        assert!(err.to_string().contains("exchangeRate"));
    }

    #[test]
    fn test_rejects_non_finite_salary() {
        let mut dataset = fixtures::sample_dataset();
        dataset.salaries[0].estimated_salary = f64::NAN;
        assert_eq!(dataset.validate().unwrap_err().error_code(), "INVALID_RECORD");
    }

    #[test]
    fn test_rejects_negative_salary() {
        let mut dataset = fixtures::sample_dataset();
        dataset.city_salaries[0].estimated_salary = -1.0;
        assert_eq!(dataset.validate().unwrap_err().error_code(), "INVALID_RECORD");
    }

    #[test]
    fn test_rejects_non_positive_big_mac_price() {
        let mut dataset = fixtures::sample_dataset();
        dataset.big_mac[0].dollar_price = 0.0;
        assert_eq!(dataset.validate().unwrap_err().error_code(), "INVALID_RECORD");
    }

    #[test]
    fn test_rejects_duplicate_salary_pair() {
        let mut dataset = fixtures::sample_dataset();
        let dup = dataset.salaries[0].clone();
        dataset.salaries.push(dup);
        assert_eq!(
            dataset.validate().unwrap_err(),
            SalaryError::duplicate_key("salaries", "software-engineer/US")
        );
    }

    #[test]
    fn test_rejects_duplicate_country_slug() {
        let mut dataset = fixtures::sample_dataset();
        dataset.countries[1].slug = dataset.countries[0].slug.clone();
        assert_eq!(dataset.validate().unwrap_err().error_code(), "DUPLICATE_KEY");
    }

    #[test]
    fn test_rejects_dangling_city_country() {
        let mut dataset = fixtures::sample_dataset();
        dataset.cities[0].country_code = "ZZ".to_string();
        let err = dataset.validate().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_REFERENCE");
        assert!(err.to_string().contains("'ZZ'"));
    }

    #[test]
    fn test_rejects_dangling_city_salary() {
        let mut dataset = fixtures::sample_dataset();
        dataset.city_salaries[0].city_slug = "atlantis".to_string();
        assert_eq!(dataset.validate().unwrap_err().error_code(), "UNKNOWN_REFERENCE");
    }

    #[test]
    fn test_rejects_empty_key() {
        let mut dataset = fixtures::sample_dataset();
        dataset.occupations[0].slug = "  ".to_string();
        assert_eq!(dataset.validate().unwrap_err().error_code(), "INVALID_RECORD");
    }

    #[test]
    fn test_rejects_incompatible_manifest() {
        let mut dataset = fixtures::sample_dataset();
        dataset.manifest.schema_version = "2.0.0".to_string();
        assert_eq!(dataset.validate().unwrap_err().error_code(), "VERSION_MISMATCH");
    }
}
