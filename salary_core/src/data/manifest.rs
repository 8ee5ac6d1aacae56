//! Dataset manifest and schema version checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{SalaryError, SalaryResult};

/// Current schema version for dataset snapshots
pub const DATASET_SCHEMA_VERSION: &str = "1.0.0";

/// Metadata stored next to the dataset files as `manifest.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetManifest {
    /// Schema version the snapshot was written with
    pub schema_version: String,
    /// When the snapshot was generated
    pub generated_at: DateTime<Utc>,
    /// Free-text provenance (pipeline name, upstream sources)
    #[serde(default)]
    pub source: String,
}

impl DatasetManifest {
    /// Create a manifest for a snapshot generated now.
    pub fn new(source: impl Into<String>) -> Self {
        DatasetManifest {
            schema_version: DATASET_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            source: source.into(),
        }
    }

    /// Check that this snapshot can be read by this build.
    pub fn validate(&self) -> SalaryResult<()> {
        validate_version(&self.schema_version)
    }
}

/// Validate that a dataset version is compatible with the current schema.
///
/// Major versions must match. For 0.x schemas a newer minor is rejected too.
pub fn validate_version(file_version: &str) -> SalaryResult<()> {
    let mismatch = || SalaryError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: DATASET_SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .map(|p| p.parse())
        .collect::<Result<_, _>>()
        .map_err(|_| mismatch())?;
    let current_parts: Vec<u32> = DATASET_SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    let (Some(file_major), Some(current_major)) = (file_parts.first(), current_parts.first()) else {
        return Err(mismatch());
    };

    if file_major != current_major {
        return Err(mismatch());
    }

    if *current_major == 0 {
        if let (Some(file_minor), Some(current_minor)) = (file_parts.get(1), current_parts.get(1)) {
            if file_minor > current_minor {
                return Err(mismatch());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_validation() {
        assert!(validate_version(DATASET_SCHEMA_VERSION).is_ok());
        assert!(validate_version("1.0.7").is_ok());
        assert!(validate_version("1.4.0").is_ok());

        assert!(validate_version("0.9.0").is_err());
        assert!(validate_version("2.0.0").is_err());
        assert!(validate_version("").is_err());
        assert!(validate_version("one.two").is_err());
    }

    #[test]
    fn test_manifest_roundtrip() {
        let manifest = DatasetManifest::new("unit-test");
        assert!(manifest.validate().is_ok());

        let json = serde_json::to_string(&manifest).unwrap();
        assert!(json.contains("schemaVersion"));
        assert!(json.contains("generatedAt"));

        let roundtrip: DatasetManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(manifest, roundtrip);
    }

    #[test]
    fn test_manifest_source_is_optional() {
        let json = r#"{"schemaVersion":"1.0.0","generatedAt":"2026-09-30T12:00:00Z"}"#;
        let manifest: DatasetManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.source, "");
        assert_eq!(manifest.generated_at.to_rfc3339(), "2026-09-30T12:00:00+00:00");
    }
}
