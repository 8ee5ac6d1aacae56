//! Reference record types.
//!
//! These mirror the JSON datasets one-to-one. Field names are camelCase on
//! disk (`exchangeRate`, `colAdjusted`, ...) and snake_case in Rust.

use serde::{Deserialize, Serialize};

/// A tracked occupation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "slug": "software-engineer",
///   "title": "Software Engineer",
///   "category": "Technology",
///   "baseUSA": 120000
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occupation {
    /// Unique key (e.g., "software-engineer")
    pub slug: String,
    /// Display title
    pub title: String,
    /// Grouping used for listings (e.g., "Healthcare")
    pub category: String,
    /// Reference annual salary in the United States, USD
    #[serde(rename = "baseUSA")]
    pub base_usa: f64,
}

/// A country with its currency and macro figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Unique ISO-like code (e.g., "DE")
    pub code: String,
    /// Unique URL slug (e.g., "germany")
    pub slug: String,
    pub name: String,
    /// Flag emoji
    pub flag: String,
    /// ISO currency code (e.g., "EUR")
    pub currency: String,
    pub currency_symbol: String,
    /// Local currency units per 1 USD. Always > 0 once loaded.
    pub exchange_rate: f64,
    /// OECD average annual wage in USD, absent for non-OECD members
    #[serde(default)]
    pub oecd_avg_wage: Option<f64>,
    /// GDP per capita, USD
    pub gdp_per_capita: f64,
}

/// Estimated salary of one occupation in one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryEntry {
    pub occupation_slug: String,
    pub country_code: String,
    /// Annual gross salary, USD
    pub estimated_salary: f64,
    /// USD-equivalent purchasing-power value
    pub ppp_adjusted: f64,
}

/// Big Mac price of a country, converted to USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BigMacEntry {
    pub country_code: String,
    pub dollar_price: f64,
}

/// A city within a tracked country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// Unique key (e.g., "san-francisco")
    pub slug: String,
    pub name: String,
    pub country_code: String,
    pub population: u64,
    /// Cost of living relative to the national average (1.0 = average)
    pub col_multiplier: f64,
    pub is_tech_hub: bool,
    pub is_capital: bool,
}

/// Estimated salary of one occupation in one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitySalaryEntry {
    pub occupation_slug: String,
    pub city_slug: String,
    /// Annual gross salary, USD
    pub estimated_salary: f64,
    pub ppp_adjusted: f64,
    /// Salary after cost-of-living adjustment, USD
    pub col_adjusted: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupation_uses_dataset_field_names() {
        let json = r#"{"slug":"nurse","title":"Nurse","category":"Healthcare","baseUSA":75000}"#;
        let occupation: Occupation = serde_json::from_str(json).unwrap();
        assert_eq!(occupation.base_usa, 75000.0);

        let back = serde_json::to_string(&occupation).unwrap();
        assert!(back.contains("\"baseUSA\""));
    }

    #[test]
    fn test_country_without_oecd_wage() {
        let json = r#"{
            "code": "IN", "slug": "india", "name": "India", "flag": "🇮🇳",
            "currency": "INR", "currencySymbol": "₹", "exchangeRate": 83.0,
            "gdpPerCapita": 2500
        }"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.exchange_rate, 83.0);
        assert!(country.oecd_avg_wage.is_none());
    }

    #[test]
    fn test_city_salary_field_names() {
        let json = r#"{
            "occupationSlug": "nurse", "citySlug": "berlin",
            "estimatedSalary": 52000, "pppAdjusted": 61000, "colAdjusted": 49500
        }"#;
        let entry: CitySalaryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.city_slug, "berlin");
        assert_eq!(entry.col_adjusted, 49500.0);
    }

    #[test]
    fn test_unknown_number_type_is_rejected() {
        let json = r#"{"countryCode":"US","dollarPrice":"5.69"}"#;
        assert!(serde_json::from_str::<BigMacEntry>(json).is_err());
    }
}
