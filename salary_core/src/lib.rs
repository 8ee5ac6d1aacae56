//! # salary_core - Global Salary Comparison Engine
//!
//! `salary_core` is the computational heart of Paycompass. It loads the
//! reference datasets (occupations, countries, salaries, cities, Big Mac
//! prices), validates them once, and exposes pure functions that turn a
//! user's salary into comparable figures. All outputs are JSON-serializable
//! so page renderers and tooling can consume them directly.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Calculations are pure functions over an immutable repository
//! - **Validated at the boundary**: Malformed data fails at load, not at a call site
//! - **Absence is a value**: Unknown keys give `None`, never a panic
//! - **No NaN**: Zero divisors are guarded where they occur
//!
//! ## Quick Start
//!
//! ```rust
//! use salary_core::calculations::{calculate_salary_result, pick_representative_countries};
//! use salary_core::dataset_io::bundled;
//!
//! let repo = bundled()?;
//! let result = calculate_salary_result(repo, "software-engineer", "DE", 65_000.0)
//!     .expect("occupation and country exist");
//!
//! let picks = pick_representative_countries(&result.comparisons, "DE");
//! assert!(picks.iter().all(|c| c.country.code != "DE"));
//! # Ok::<(), salary_core::errors::SalaryError>(())
//! ```
//!
//! ## Modules
//!
//! - [`data`] - Record types, dataset validation, and the lookup repository
//! - [`calculations`] - Currency, percentile, Big Mac, comparison and relocation math
//! - [`dataset_io`] - Loading bundled or on-disk snapshots, atomic export
//! - [`config`] - Dataset source selection
//! - [`errors`] - Structured error types for loading and validation

pub mod calculations;
pub mod config;
pub mod data;
pub mod dataset_io;
pub mod errors;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export commonly used types at crate root for convenience
pub use config::DataSource;
pub use data::{Dataset, SalaryRepository};
pub use dataset_io::{bundled, load, load_bundled, load_dataset_dir, write_dataset_dir};
pub use errors::{SalaryError, SalaryResult};
