//! # Reference Data
//!
//! Typed, validated reference datasets and the repository that serves lookups
//! over them.
//!
//! ## Collections
//!
//! - **Occupations**: tracked jobs with a US reference salary
//! - **Countries**: currency, exchange rate and macro figures
//! - **Salaries**: estimated salary per (occupation, country)
//! - **Big Mac**: Big Mac price per country, in USD
//! - **Cities**: cost-of-living multiplier per city
//! - **City salaries**: estimated salary per (occupation, city)
//!
//! Records reference each other by key. A [`Dataset`] is checked once by
//! [`Dataset::validate`] when a [`SalaryRepository`] is built, so malformed
//! data is rejected at startup instead of at a call site.

pub mod dataset;
pub mod manifest;
pub mod records;
pub mod repository;

pub use dataset::{files, Dataset};
pub use manifest::{validate_version, DatasetManifest, DATASET_SCHEMA_VERSION};
pub use records::{BigMacEntry, City, CitySalaryEntry, Country, Occupation, SalaryEntry};
pub use repository::SalaryRepository;
