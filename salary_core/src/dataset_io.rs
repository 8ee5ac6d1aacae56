//! # Dataset I/O
//!
//! Loads dataset snapshots into a validated [`SalaryRepository`] and writes
//! them back out.
//!
//! - **Bundled data**: the snapshot under `salary_core/data/` is embedded in
//!   the library at build time
//! - **Directory data**: the same file layout read from disk at startup
//! - **Atomic writes**: each file is written to `.tmp`, synced, then renamed
//!
//! ## File Layout
//!
//! ```text
//! <dir>/
//! ├── manifest.json        schema version, generation time
//! ├── occupations.json
//! ├── countries.json
//! ├── salaries.json
//! ├── bigmac.json
//! ├── cities.json
//! └── city-salaries.json
//! ```
//!
//! ## Example
//!
//! ```rust
//! use salary_core::dataset_io::bundled;
//! use salary_core::calculations::calculate_global_percentile;
//!
//! let repo = bundled()?;
//! let p = calculate_global_percentile(repo, "software-engineer", 95_000.0);
//! assert!(p <= 100);
//! # Ok::<(), salary_core::errors::SalaryError>(())
//! ```

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

use once_cell::sync::OnceCell;
use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::DataSource;
use crate::data::{files, Dataset, SalaryRepository};
use crate::errors::{SalaryError, SalaryResult};

/// Dataset snapshot compiled into the library
#[derive(RustEmbed)]
#[folder = "data/"]
struct BundledFiles;

static BUNDLED: OnceCell<SalaryRepository> = OnceCell::new();

/// The bundled dataset, loaded on first use and shared for the process lifetime.
pub fn bundled() -> SalaryResult<&'static SalaryRepository> {
    BUNDLED.get_or_try_init(load_bundled)
}

/// Load and validate the bundled dataset into a fresh repository.
pub fn load_bundled() -> SalaryResult<SalaryRepository> {
    load(&DataSource::Bundled)
}

/// Load and validate a dataset directory.
pub fn load_dataset_dir(dir: &Path) -> SalaryResult<SalaryRepository> {
    load(&DataSource::Directory(dir.to_path_buf()))
}

/// Load and validate a dataset from any source.
pub fn load(source: &DataSource) -> SalaryResult<SalaryRepository> {
    let dataset = read_dataset(source)?;
    let repository = SalaryRepository::new(dataset).map_err(|e| {
        tracing::warn!(source = %source, error = %e, "rejected dataset");
        e
    })?;

    let data = repository.dataset();
    tracing::info!(
        source = %source,
        version = %data.manifest.schema_version,
        generated_at = %data.manifest.generated_at,
        occupations = data.occupations.len(),
        countries = data.countries.len(),
        salaries = data.salaries.len(),
        cities = data.cities.len(),
        city_salaries = data.city_salaries.len(),
        "loaded salary dataset"
    );

    Ok(repository)
}

/// Read every dataset file without validating cross-references.
pub fn read_dataset(source: &DataSource) -> SalaryResult<Dataset> {
    Ok(Dataset {
        manifest: read_file(source, files::MANIFEST)?,
        occupations: read_file(source, files::OCCUPATIONS)?,
        countries: read_file(source, files::COUNTRIES)?,
        salaries: read_file(source, files::SALARIES)?,
        big_mac: read_file(source, files::BIG_MAC)?,
        cities: read_file(source, files::CITIES)?,
        city_salaries: read_file(source, files::CITY_SALARIES)?,
    })
}

fn read_file<T: DeserializeOwned>(source: &DataSource, name: &str) -> SalaryResult<T> {
    let bytes = match source {
        DataSource::Bundled => BundledFiles::get(name)
            .ok_or_else(|| SalaryError::missing_file(name))?
            .data
            .into_owned(),
        DataSource::Directory(dir) => {
            let path = dir.join(name);
            fs::read(&path).map_err(|e| match e.kind() {
                ErrorKind::NotFound => SalaryError::missing_file(path.display().to_string()),
                _ => SalaryError::file_error("read", path.display().to_string(), e.to_string()),
            })?
        }
    };

    tracing::debug!(source = %source, file = name, bytes = bytes.len(), "read dataset file");

    serde_json::from_slice(&bytes).map_err(|e| SalaryError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", name, e),
    })
}

/// Write a dataset snapshot to a directory, one file per collection.
///
/// The dataset is validated first so an invalid snapshot is never written.
/// Each file is saved atomically; a failure part-way through can leave a
/// mix of old and new files, but never a truncated one.
pub fn write_dataset_dir(dataset: &Dataset, dir: &Path) -> SalaryResult<()> {
    dataset.validate()?;

    fs::create_dir_all(dir).map_err(|e| {
        SalaryError::file_error("create directory", dir.display().to_string(), e.to_string())
    })?;

    write_file(dir, files::MANIFEST, &dataset.manifest)?;
    write_file(dir, files::OCCUPATIONS, &dataset.occupations)?;
    write_file(dir, files::COUNTRIES, &dataset.countries)?;
    write_file(dir, files::SALARIES, &dataset.salaries)?;
    write_file(dir, files::BIG_MAC, &dataset.big_mac)?;
    write_file(dir, files::CITIES, &dataset.cities)?;
    write_file(dir, files::CITY_SALARIES, &dataset.city_salaries)?;

    tracing::info!(
        dir = %dir.display(),
        records = dataset.record_count(),
        "wrote salary dataset"
    );
    Ok(())
}

fn write_file<T: Serialize + ?Sized>(dir: &Path, name: &str, value: &T) -> SalaryResult<()> {
    let json = serde_json::to_string_pretty(value)?;

    let path = dir.join(name);
    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        SalaryError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        SalaryError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        SalaryError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, &path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        SalaryError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}
