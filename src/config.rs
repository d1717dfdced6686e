//! # Configuration
//!
//! Configuration for the status aggregation layer. Loading follows a
//! dead-simple pattern:
//!
//! 1. Read a TOML file named by `VITALS_CONFIG_PATH` (absent => defaults)
//! 2. Deserialize with serde
//! 3. Replace zero/empty values with defaults
//! 4. Validate
//!
//! A `VITALS_ADDRESS` environment variable overrides the bind address,
//! which keeps container deployments from needing a config file at all.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{VitalsError, VitalsResult};

/// Default bind address for the status HTTP server.
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:2114";

/// Default time allowed for one status request, in seconds.
pub const DEFAULT_CHECK_TIMEOUT_SECS: u64 = 60;

/// Default status code substituted for failing components.
pub const DEFAULT_UNAVAILABLE_STATUS_CODE: u16 = 503;

/// Configuration surface consumed by the status layer.
///
/// Only `unavailable_status_code` feeds the aggregation policy itself;
/// `address` and `check_timeout` are consumed by the HTTP plumbing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalsConfig {
    /// Address of the status HTTP server.
    pub address: String,
    /// Time to wait for a status request to complete, in seconds.
    pub check_timeout: u64,
    /// Status code returned in case of component failure, 503 by default.
    pub unavailable_status_code: u16,
}

impl Default for VitalsConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            check_timeout: DEFAULT_CHECK_TIMEOUT_SECS,
            unavailable_status_code: DEFAULT_UNAVAILABLE_STATUS_CODE,
        }
    }
}

impl VitalsConfig {
    /// Load configuration from the process environment.
    ///
    /// Reads the TOML file at `VITALS_CONFIG_PATH` when set, then applies
    /// the `VITALS_ADDRESS` override, fills defaults, and validates.
    pub fn load_from_env() -> VitalsResult<Self> {
        let mut config = match std::env::var("VITALS_CONFIG_PATH") {
            Ok(path) => Self::load_from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };

        if let Ok(address) = std::env::var("VITALS_ADDRESS") {
            if !address.is_empty() {
                config.address = address;
            }
        }

        config.apply_defaults();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// Missing keys take their defaults; the file only needs to name what
    /// it changes.
    pub fn load_from_file(path: &Path) -> VitalsResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            VitalsError::Configuration(format!("failed to read {}: {e}", path.display()))
        })?;

        let mut config: Self = toml::from_str(&contents).map_err(|e| {
            VitalsError::Configuration(format!("failed to parse {}: {e}", path.display()))
        })?;

        config.apply_defaults();
        config.validate()?;
        Ok(config)
    }

    /// Replace zero/empty values with defaults.
    ///
    /// Explicit zeroes in a config file mean "use the default", matching
    /// the behavior operators expect from unset keys.
    pub fn apply_defaults(&mut self) {
        if self.address.is_empty() {
            self.address = DEFAULT_ADDRESS.to_string();
        }
        if self.check_timeout == 0 {
            self.check_timeout = DEFAULT_CHECK_TIMEOUT_SECS;
        }
        if self.unavailable_status_code == 0 {
            self.unavailable_status_code = DEFAULT_UNAVAILABLE_STATUS_CODE;
        }
    }

    /// Validate field ranges.
    pub fn validate(&self) -> VitalsResult<()> {
        if !(100..=599).contains(&self.unavailable_status_code) {
            return Err(VitalsError::Configuration(format!(
                "unavailable_status_code must be within 100..=599, got {}",
                self.unavailable_status_code
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = VitalsConfig::default();
        assert_eq!(config.address, "127.0.0.1:2114");
        assert_eq!(config.check_timeout, 60);
        assert_eq!(config.unavailable_status_code, 503);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_values_take_defaults() {
        let mut config = VitalsConfig {
            address: String::new(),
            check_timeout: 0,
            unavailable_status_code: 0,
        };
        config.apply_defaults();
        assert_eq!(config, VitalsConfig::default());
    }

    #[test]
    fn test_load_from_file_partial_keys() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "unavailable_status_code = 500").expect("write");

        let config = VitalsConfig::load_from_file(file.path()).expect("load");
        assert_eq!(config.unavailable_status_code, 500);
        assert_eq!(config.address, DEFAULT_ADDRESS);
        assert_eq!(config.check_timeout, DEFAULT_CHECK_TIMEOUT_SECS);
    }

    #[test]
    fn test_load_from_file_rejects_out_of_range_code() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "unavailable_status_code = 999").expect("write");

        let err = VitalsConfig::load_from_file(file.path()).expect_err("out of range");
        assert!(matches!(err, VitalsError::Configuration(_)));
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let err = VitalsConfig::load_from_file(Path::new("/nonexistent/vitals.toml"))
            .expect_err("missing file");
        assert!(matches!(err, VitalsError::Configuration(_)));
    }
}
