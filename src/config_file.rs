//! Drill defaults file
//!
//! Handles loading and saving of the optional JSON file holding the default
//! parameters of the drills. Command line flags override every value here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::algorithms::hanoi::MAX_DISKS;
use crate::math::projectile::Projectile;
use crate::text::password::PasswordPolicy;

/// Defaults for the probability experiment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbabilityDefaults {
    /// Number of simulated draws
    pub experiments: usize,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for ProbabilityDefaults {
    fn default() -> Self {
        Self {
            experiments: 2000,
            seed: None,
        }
    }
}

/// Defaults for the projectile calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileDefaults {
    /// m/s
    pub speed: f64,
    /// m
    pub height: f64,
    /// degrees
    pub angle: f64,
}

impl Default for ProjectileDefaults {
    fn default() -> Self {
        Self {
            speed: 45.0,
            height: 8.0,
            angle: 7.0,
        }
    }
}

/// Complete drill configuration that can be saved to and loaded from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillConfig {
    pub password: PasswordPolicy,
    pub hanoi_disks: u32,
    pub probability: ProbabilityDefaults,
    pub projectile: ProjectileDefaults,
    /// Where the expense tracker keeps its ledger; in-memory only when unset
    pub expenses_ledger: Option<PathBuf>,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            password: PasswordPolicy::default(),
            hanoi_disks: 5,
            probability: ProbabilityDefaults::default(),
            projectile: ProjectileDefaults::default(),
            expenses_ledger: None,
        }
    }
}

impl DrillConfig {
    /// Create a configuration with every default
    pub fn new() -> Self {
        Self::default()
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Load `path` when given, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = Self::load_from_file(path)?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.password
            .validate()
            .context("Invalid password policy")?;

        if self.hanoi_disks == 0 || self.hanoi_disks > MAX_DISKS {
            anyhow::bail!("hanoi_disks must be between 1 and {}", MAX_DISKS);
        }

        if self.probability.experiments == 0 {
            anyhow::bail!("probability.experiments must be at least 1");
        }

        let p = &self.projectile;
        Projectile::new(p.speed, p.height, p.angle).context("Invalid projectile defaults")?;

        if let Some(ledger) = &self.expenses_ledger {
            if ledger.as_os_str().is_empty() {
                anyhow::bail!("expenses_ledger cannot be an empty path");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = DrillConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.hanoi_disks, 5);
        assert_eq!(config.probability.experiments, 2000);
        assert!(config.expenses_ledger.is_none());
    }

    #[test]
    fn test_save_and_load_json_config() {
        let mut config = DrillConfig::new();
        config.hanoi_disks = 7;
        config.probability.seed = Some(42);
        config.expenses_ledger = Some(PathBuf::from("/tmp/ledger.json"));

        let temp_file = NamedTempFile::new().unwrap();
        config.save_to_file(temp_file.path()).unwrap();

        let loaded = DrillConfig::load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(br#"{ "hanoi_disks": 3, "password": { "length": 24 } }"#)
            .unwrap();
        temp_file.flush().unwrap();

        let loaded = DrillConfig::load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.hanoi_disks, 3);
        assert_eq!(loaded.password.length, 24);
        assert_eq!(loaded.password.digits, 1);
        assert_eq!(loaded.projectile, ProjectileDefaults::default());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = DrillConfig::load_from_file(Path::new("/nonexistent/path"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_json() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"{ invalid json }").unwrap();
        temp_file.flush().unwrap();

        let result = DrillConfig::load_from_file(temp_file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_json_wrong_type_fails() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(br#"{ "hanoi_disks": "five" }"#).unwrap();
        temp_file.flush().unwrap();

        assert!(DrillConfig::load_from_file(temp_file.path()).is_err());
    }

    #[test]
    fn test_validation_hanoi_range() {
        let mut config = DrillConfig::default();
        config.hanoi_disks = 0;
        assert!(config.validate().is_err());
        config.hanoi_disks = MAX_DISKS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_unsatisfiable_password_policy() {
        let mut config = DrillConfig::default();
        config.password.length = 2;
        config.password.digits = 3;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("password policy"));
    }

    #[test]
    fn test_validation_projectile_and_experiments() {
        let mut config = DrillConfig::default();
        config.projectile.angle = 90.0;
        assert!(config.validate().is_err());

        let mut config = DrillConfig::default();
        config.probability.experiments = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default() {
        assert_eq!(DrillConfig::load_or_default(None).unwrap(), DrillConfig::default());

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(br#"{ "hanoi_disks": 99 }"#).unwrap();
        temp_file.flush().unwrap();
        assert!(DrillConfig::load_or_default(Some(temp_file.path())).is_err());
    }
}
