//! Configuration structures for Surdex.

use crate::error::{Result, SurdexError};
use crate::types::CustomerId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default snapshot file name.
pub const DEFAULT_DATA_FILE: &str = "customers.dat";

/// Minimum number of records the catalog is topped up to at startup.
pub const DEFAULT_MIN_RECORDS: usize = 1000;

/// First id handed out by the generator for an empty catalog.
pub const DEFAULT_FIRST_CUSTOMER_ID: CustomerId = CustomerId(1000);

/// Number of surnames sampled by the benchmark.
pub const DEFAULT_BENCHMARK_SAMPLES: usize = 1000;

/// Catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path of the record snapshot.
    pub data_file: PathBuf,
    /// Minimum record count; smaller datasets are topped up with generated records.
    pub min_records: usize,
    /// Id assigned to the first generated record when the catalog is empty.
    pub first_customer_id: CustomerId,
    /// Number of surnames drawn per benchmark run.
    pub benchmark_samples: usize,
    /// Seed for generation and sampling (None = seeded from the OS).
    pub seed: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            min_records: DEFAULT_MIN_RECORDS,
            first_customer_id: DEFAULT_FIRST_CUSTOMER_ID,
            benchmark_samples: DEFAULT_BENCHMARK_SAMPLES,
            seed: None,
        }
    }
}

impl CatalogConfig {
    /// Reads a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| SurdexError::ConfigError(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.benchmark_samples == 0 {
            return Err(SurdexError::InvalidParameter {
                name: "benchmark_samples".to_string(),
                value: self.benchmark_samples.to_string(),
            });
        }
        if self.first_customer_id.0 < 0 {
            return Err(SurdexError::InvalidParameter {
                name: "first_customer_id".to_string(),
                value: self.first_customer_id.to_string(),
            });
        }
        if self.data_file.as_os_str().is_empty() {
            return Err(SurdexError::ConfigError("data_file is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_catalog_config_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.data_file, PathBuf::from("customers.dat"));
        assert_eq!(config.min_records, 1000);
        assert_eq!(config.first_customer_id, CustomerId(1000));
        assert_eq!(config.benchmark_samples, 1000);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_catalog_config_custom() {
        let config = CatalogConfig {
            data_file: PathBuf::from("/var/lib/surdex/customers.dat"),
            min_records: 50,
            seed: Some(7),
            ..Default::default()
        };

        assert_eq!(config.min_records, 50);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.benchmark_samples, DEFAULT_BENCHMARK_SAMPLES);
    }

    #[test]
    fn test_catalog_config_serde_roundtrip() {
        let original = CatalogConfig {
            seed: Some(42),
            ..Default::default()
        };
        let serialized = serde_json::to_string(&original).unwrap();
        let deserialized: CatalogConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_catalog_config_partial_json_uses_defaults() {
        let config: CatalogConfig = serde_json::from_str(r#"{"min_records": 10}"#).unwrap();
        assert_eq!(config.min_records, 10);
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(config.first_customer_id, DEFAULT_FIRST_CUSTOMER_ID);
    }

    #[test]
    fn test_validate_rejects_zero_samples() {
        let config = CatalogConfig {
            benchmark_samples: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid parameter: benchmark_samples = 0");
    }

    #[test]
    fn test_validate_rejects_negative_first_id() {
        let config = CatalogConfig {
            first_customer_id: CustomerId(-5),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SurdexError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("surdex.json");
        std::fs::write(&path, r#"{"data_file": "x.dat", "seed": 3}"#).unwrap();

        let config = CatalogConfig::from_json_file(&path).unwrap();
        assert_eq!(config.data_file, PathBuf::from("x.dat"));
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.min_records, DEFAULT_MIN_RECORDS);
    }

    #[test]
    fn test_from_json_file_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = CatalogConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(err, SurdexError::ConfigError(_)));
    }

    #[test]
    fn test_from_json_file_missing() {
        let dir = tempdir().unwrap();
        let err = CatalogConfig::from_json_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SurdexError::Io(_)));
    }
}
