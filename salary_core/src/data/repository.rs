//! Read-only lookups over a validated dataset.

use super::dataset::Dataset;
use super::manifest::DatasetManifest;
use super::records::{BigMacEntry, City, CitySalaryEntry, Country, Occupation, SalaryEntry};
use crate::errors::SalaryResult;

/// Validated, immutable reference data.
///
/// Construct one per process (see [`crate::dataset_io::bundled`]) or per test,
/// and pass it by reference to the calculation functions. All lookups are
/// linear scans; the collections hold tens to low hundreds of records.
///
/// Every lookup is total: a key that does not resolve yields `None` or an
/// empty vector.
///
/// ## Example
///
/// ```rust
/// use salary_core::data::{Dataset, SalaryRepository};
///
/// let repo = SalaryRepository::new(Dataset::empty("doc")).unwrap();
/// assert!(repo.occupation("software-engineer").is_none());
/// assert!(repo.salary_entries("software-engineer").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct SalaryRepository {
    dataset: Dataset,
}

impl SalaryRepository {
    /// Validate a dataset and wrap it.
    pub fn new(dataset: Dataset) -> SalaryResult<Self> {
        dataset.validate()?;
        Ok(SalaryRepository { dataset })
    }

    /// The underlying snapshot
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn manifest(&self) -> &DatasetManifest {
        &self.dataset.manifest
    }

    // ------------------------------------------------------------------
    // Occupations
    // ------------------------------------------------------------------

    pub fn occupations(&self) -> &[Occupation] {
        &self.dataset.occupations
    }

    pub fn occupation(&self, slug: &str) -> Option<&Occupation> {
        self.dataset.occupations.iter().find(|o| o.slug == slug)
    }

    /// Occupations in one category, in dataset order
    pub fn occupations_by_category(&self, category: &str) -> Vec<&Occupation> {
        self.dataset
            .occupations
            .iter()
            .filter(|o| o.category == category)
            .collect()
    }

    /// Distinct categories, sorted
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self
            .dataset
            .occupations
            .iter()
            .map(|o| o.category.as_str())
            .collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }

    // ------------------------------------------------------------------
    // Countries
    // ------------------------------------------------------------------

    pub fn countries(&self) -> &[Country] {
        &self.dataset.countries
    }

    pub fn country(&self, code: &str) -> Option<&Country> {
        self.dataset.countries.iter().find(|c| c.code == code)
    }

    pub fn country_by_slug(&self, slug: &str) -> Option<&Country> {
        self.dataset.countries.iter().find(|c| c.slug == slug)
    }

    pub fn big_mac_entry(&self, country_code: &str) -> Option<&BigMacEntry> {
        self.dataset
            .big_mac
            .iter()
            .find(|b| b.country_code == country_code)
    }

    // ------------------------------------------------------------------
    // Country salaries
    // ------------------------------------------------------------------

    /// All country entries for one occupation
    pub fn salary_entries(&self, occupation_slug: &str) -> Vec<&SalaryEntry> {
        self.dataset
            .salaries
            .iter()
            .filter(|s| s.occupation_slug == occupation_slug)
            .collect()
    }

    pub fn salary_entry(&self, occupation_slug: &str, country_code: &str) -> Option<&SalaryEntry> {
        self.dataset
            .salaries
            .iter()
            .find(|s| s.occupation_slug == occupation_slug && s.country_code == country_code)
    }

    // ------------------------------------------------------------------
    // Cities
    // ------------------------------------------------------------------

    pub fn cities(&self) -> &[City] {
        &self.dataset.cities
    }

    pub fn city(&self, slug: &str) -> Option<&City> {
        self.dataset.cities.iter().find(|c| c.slug == slug)
    }

    pub fn cities_in_country(&self, country_code: &str) -> Vec<&City> {
        self.dataset
            .cities
            .iter()
            .filter(|c| c.country_code == country_code)
            .collect()
    }

    /// All city entries for one occupation
    pub fn city_salary_entries(&self, occupation_slug: &str) -> Vec<&CitySalaryEntry> {
        self.dataset
            .city_salaries
            .iter()
            .filter(|s| s.occupation_slug == occupation_slug)
            .collect()
    }

    pub fn city_salary_entry(
        &self,
        occupation_slug: &str,
        city_slug: &str,
    ) -> Option<&CitySalaryEntry> {
        self.dataset
            .city_salaries
            .iter()
            .find(|s| s.occupation_slug == occupation_slug && s.city_slug == city_slug)
    }

    /// City entries for one occupation, limited to cities of one country
    pub fn city_salary_entries_by_country(
        &self,
        occupation_slug: &str,
        country_code: &str,
    ) -> Vec<&CitySalaryEntry> {
        self.dataset
            .city_salaries
            .iter()
            .filter(|s| s.occupation_slug == occupation_slug)
            .filter(|s| {
                self.city(&s.city_slug)
                    .is_some_and(|city| city.country_code == country_code)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_new_rejects_invalid_dataset() {
        let mut dataset = fixtures::sample_dataset();
        dataset.countries[0].exchange_rate = -1.0;
        assert!(SalaryRepository::new(dataset).is_err());
    }

    #[test]
    fn test_occupation_lookup() {
        let repo = fixtures::sample_repository();
        let occ = repo.occupation("software-engineer").unwrap();
        assert_eq!(occ.title, "Software Engineer");
        assert_eq!(occ.base_usa, 120_000.0);
        assert!(repo.occupation("wizard").is_none());
    }

    #[test]
    fn test_categories_are_sorted_and_distinct() {
        let repo = fixtures::sample_repository();
        assert_eq!(repo.categories(), vec!["Healthcare", "Science", "Technology"]);
        let tech = repo.occupations_by_category("Technology");
        assert_eq!(tech.len(), 1);
        assert_eq!(tech[0].slug, "software-engineer");
    }

    #[test]
    fn test_country_lookups() {
        let repo = fixtures::sample_repository();
        assert_eq!(repo.country("DE").unwrap().name, "Germany");
        assert_eq!(repo.country_by_slug("india").unwrap().code, "IN");
        assert!(repo.country("de").is_none());
        assert!(repo.country_by_slug("DE").is_none());
    }

    #[test]
    fn test_salary_entries_for_occupation() {
        let repo = fixtures::sample_repository();
        assert_eq!(repo.salary_entries("software-engineer").len(), 5);
        assert_eq!(repo.salary_entries("nurse").len(), 4);
        assert!(repo.salary_entries("astronaut").is_empty());
        assert!(repo.salary_entries("unknown").is_empty());
    }

    #[test]
    fn test_salary_entry_composite_key() {
        let repo = fixtures::sample_repository();
        let entry = repo.salary_entry("software-engineer", "IN").unwrap();
        assert_eq!(entry.estimated_salary, 40_000.0);
        assert!(repo.salary_entry("nurse", "BR").is_none());
    }

    #[test]
    fn test_big_mac_lookup() {
        let repo = fixtures::sample_repository();
        assert_eq!(repo.big_mac_entry("US").unwrap().dollar_price, 5.0);
        assert!(repo.big_mac_entry("IN").is_none());
    }

    #[test]
    fn test_city_lookups() {
        let repo = fixtures::sample_repository();
        assert_eq!(repo.city("berlin").unwrap().country_code, "DE");
        let us_cities: Vec<&str> = repo
            .cities_in_country("US")
            .iter()
            .map(|c| c.slug.as_str())
            .collect();
        assert_eq!(us_cities, vec!["san-francisco", "austin"]);
    }

    #[test]
    fn test_city_salary_lookups() {
        let repo = fixtures::sample_repository();
        let entry = repo.city_salary_entry("software-engineer", "austin").unwrap();
        assert_eq!(entry.col_adjusted, 115_000.0);
        assert!(repo.city_salary_entry("nurse", "london").is_none());

        let german = repo.city_salary_entries_by_country("software-engineer", "DE");
        let slugs: Vec<&str> = german.iter().map(|e| e.city_slug.as_str()).collect();
        assert_eq!(slugs, vec!["berlin", "munich"]);

        assert!(repo.city_salary_entries_by_country("software-engineer", "BR").is_empty());
    }

    #[test]
    fn test_lookups_are_repeatable() {
        let repo = fixtures::sample_repository();
        let first = repo.salary_entries("nurse");
        let second = repo.salary_entries("nurse");
        assert_eq!(first, second);
    }
}
