//! In-memory fixture datasets shared by the unit tests.
//!
//! Numbers are picked so expected results can be checked by hand:
//!
//! ```text
//! software-engineer  US 120k | DE 80k | GB 75k | IN 40k | BR 30k
//! nurse              US 75k  | DE 50k | GB 45k | IN 8k  | (no BR)
//! astronaut          no salary entries
//! Big Mac            US 5.0  | DE 4.0 | GB 5.0 | BR 4.0 | (no IN)
//! ```

use crate::data::{
    BigMacEntry, City, CitySalaryEntry, Country, Dataset, Occupation, SalaryEntry,
    SalaryRepository,
};

pub fn occupation(slug: &str, title: &str, category: &str, base_usa: f64) -> Occupation {
    Occupation {
        slug: slug.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        base_usa,
    }
}

pub fn country(code: &str, slug: &str, name: &str, currency: &str, exchange_rate: f64) -> Country {
    Country {
        code: code.to_string(),
        slug: slug.to_string(),
        name: name.to_string(),
        flag: String::new(),
        currency: currency.to_string(),
        currency_symbol: currency.to_string(),
        exchange_rate,
        oecd_avg_wage: None,
        gdp_per_capita: 10_000.0,
    }
}

pub fn salary(occupation_slug: &str, country_code: &str, estimated: f64, ppp: f64) -> SalaryEntry {
    SalaryEntry {
        occupation_slug: occupation_slug.to_string(),
        country_code: country_code.to_string(),
        estimated_salary: estimated,
        ppp_adjusted: ppp,
    }
}

pub fn big_mac(country_code: &str, dollar_price: f64) -> BigMacEntry {
    BigMacEntry {
        country_code: country_code.to_string(),
        dollar_price,
    }
}

pub fn city(slug: &str, name: &str, country_code: &str, col_multiplier: f64) -> City {
    City {
        slug: slug.to_string(),
        name: name.to_string(),
        country_code: country_code.to_string(),
        population: 1_000_000,
        col_multiplier,
        is_tech_hub: false,
        is_capital: false,
    }
}

pub fn city_salary(
    occupation_slug: &str,
    city_slug: &str,
    estimated: f64,
    ppp: f64,
    col_adjusted: f64,
) -> CitySalaryEntry {
    CitySalaryEntry {
        occupation_slug: occupation_slug.to_string(),
        city_slug: city_slug.to_string(),
        estimated_salary: estimated,
        ppp_adjusted: ppp,
        col_adjusted,
    }
}

pub fn sample_dataset() -> Dataset {
    let mut dataset = Dataset::empty("fixtures");

    dataset.occupations = vec![
        occupation("software-engineer", "Software Engineer", "Technology", 120_000.0),
        occupation("nurse", "Registered Nurse", "Healthcare", 75_000.0),
        occupation("astronaut", "Astronaut", "Science", 150_000.0),
    ];

    dataset.countries = vec![
        country("US", "united-states", "United States", "USD", 1.0),
        country("DE", "germany", "Germany", "EUR", 0.92),
        country("GB", "united-kingdom", "United Kingdom", "GBP", 0.8),
        country("IN", "india", "India", "INR", 83.0),
        country("BR", "brazil", "Brazil", "BRL", 5.0),
    ];

    dataset.salaries = vec![
        salary("software-engineer", "US", 120_000.0, 120_000.0),
        salary("software-engineer", "DE", 80_000.0, 95_000.0),
        salary("software-engineer", "GB", 75_000.0, 85_000.0),
        salary("software-engineer", "IN", 40_000.0, 140_000.0),
        salary("software-engineer", "BR", 30_000.0, 60_000.0),
        salary("nurse", "US", 75_000.0, 75_000.0),
        salary("nurse", "DE", 50_000.0, 60_000.0),
        salary("nurse", "GB", 45_000.0, 52_000.0),
        salary("nurse", "IN", 8_000.0, 28_000.0),
    ];

    dataset.big_mac = vec![
        big_mac("US", 5.0),
        big_mac("DE", 4.0),
        big_mac("GB", 5.0),
        big_mac("BR", 4.0),
    ];

    dataset.cities = vec![
        city("san-francisco", "San Francisco", "US", 1.6),
        city("austin", "Austin", "US", 1.1),
        city("berlin", "Berlin", "DE", 1.0),
        city("munich", "Munich", "DE", 1.2),
        city("bangalore", "Bangalore", "IN", 0.9),
        city("london", "London", "GB", 1.4),
    ];

    dataset.city_salaries = vec![
        city_salary("software-engineer", "san-francisco", 160_000.0, 160_000.0, 100_000.0),
        city_salary("software-engineer", "austin", 126_500.0, 126_500.0, 115_000.0),
        city_salary("software-engineer", "berlin", 80_000.0, 95_000.0, 80_000.0),
        city_salary("software-engineer", "munich", 100_800.0, 110_000.0, 84_000.0),
        city_salary("software-engineer", "bangalore", 43_200.0, 150_000.0, 48_000.0),
        city_salary("software-engineer", "london", 89_600.0, 100_000.0, 64_000.0),
        city_salary("nurse", "san-francisco", 96_000.0, 96_000.0, 60_000.0),
        city_salary("nurse", "berlin", 50_000.0, 60_000.0, 50_000.0),
    ];

    dataset
}

pub fn sample_repository() -> SalaryRepository {
    SalaryRepository::new(sample_dataset()).expect("fixture dataset is valid")
}

/// Two countries only: US at 120k and IN at 40k for software engineers.
pub fn two_country_repository() -> SalaryRepository {
    let mut dataset = Dataset::empty("two-country");
    dataset.occupations = vec![occupation(
        "software-engineer",
        "Software Engineer",
        "Technology",
        120_000.0,
    )];
    dataset.countries = vec![
        country("US", "united-states", "United States", "USD", 1.0),
        country("IN", "india", "India", "INR", 83.0),
    ];
    dataset.salaries = vec![
        salary("software-engineer", "US", 120_000.0, 120_000.0),
        salary("software-engineer", "IN", 40_000.0, 140_000.0),
    ];
    SalaryRepository::new(dataset).expect("fixture dataset is valid")
}
