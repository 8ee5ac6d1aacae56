//! # Configuration
//!
//! Where the reference data comes from. The only runtime setting is the
//! dataset location: the snapshot compiled into the library, or a directory
//! of JSON files named by `SALARY_DATA_DIR`.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use crate::errors::{SalaryError, SalaryResult};

/// Environment variable naming a dataset directory
pub const DATA_DIR_ENV: &str = "SALARY_DATA_DIR";

/// Location of the dataset snapshot to load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataSource {
    /// Snapshot embedded in the binary at build time
    #[default]
    Bundled,
    /// Directory containing `manifest.json`, `occupations.json`, ...
    Directory(PathBuf),
}

impl DataSource {
    /// Read the source from `SALARY_DATA_DIR`, defaulting to the bundled data.
    pub fn from_env() -> SalaryResult<Self> {
        Self::from_env_value(std::env::var_os(DATA_DIR_ENV))
    }

    /// Interpret a raw `SALARY_DATA_DIR` value.
    ///
    /// Unset means bundled. Set-but-empty is rejected rather than silently
    /// falling back, since it usually means a broken deployment script.
    pub fn from_env_value(value: Option<OsString>) -> SalaryResult<Self> {
        match value {
            None => Ok(DataSource::Bundled),
            Some(v) if v.is_empty() => Err(SalaryError::invalid_config(
                DATA_DIR_ENV,
                "set but empty; unset it to use the bundled dataset",
            )),
            Some(v) => Ok(DataSource::Directory(PathBuf::from(v))),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Bundled => f.write_str("bundled dataset"),
            DataSource::Directory(path) => write!(f, "dataset directory '{}'", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_means_bundled() {
        assert_eq!(DataSource::from_env_value(None).unwrap(), DataSource::Bundled);
        assert_eq!(DataSource::default(), DataSource::Bundled);
    }

    #[test]
    fn test_directory_from_env_value() {
        let source = DataSource::from_env_value(Some(OsString::from("/srv/salary-data"))).unwrap();
        assert_eq!(source, DataSource::Directory(PathBuf::from("/srv/salary-data")));
        assert_eq!(source.to_string(), "dataset directory '/srv/salary-data'");
    }

    #[test]
    fn test_empty_env_value_is_rejected() {
        let err = DataSource::from_env_value(Some(OsString::new())).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }
}
