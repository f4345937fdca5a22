//! Engine tunables and their JSON loading.
//!
//! The phase threshold table and the interval multipliers are fixed; what can
//! be tuned is the set of gates and maintenance tiers around them.

use crate::error::{PhaseError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Ease factors are clamped to this floor before any phase decision.
    pub min_ease_factor: f64,
    /// Stands in for a stored review that carries no ease factor.
    pub default_ease_factor: f64,
    /// Quality grades below this count as a failed recall.
    pub passing_quality: u8,
    pub learned_min_repetitions: u32,
    /// Successful reviews needed before phase 1 may advance.
    pub min_reviews_to_advance: u32,
    pub maintenance: MaintenanceConfig,
}

/// Maintenance-review spacing for learned items, longer for stronger EF.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaintenanceConfig {
    pub base_days: u32,
    pub strong_ease_factor: f64,
    pub strong_days: u32,
    pub very_strong_ease_factor: f64,
    pub very_strong_days: u32,
}

impl EngineConfig {
    pub const DEFAULT: EngineConfig = EngineConfig {
        min_ease_factor: 1.3,
        default_ease_factor: 2.5,
        passing_quality: 3,
        learned_min_repetitions: 5,
        min_reviews_to_advance: 3,
        maintenance: MaintenanceConfig::DEFAULT,
    };

    /// Parses a JSON document; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config = Self::from_json_str(&contents)?;
        tracing::info!(path = %path.display(), "loaded phase engine configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| -> Result<()> {
            tracing::warn!(%reason, "rejecting phase engine configuration");
            Err(PhaseError::InvalidConfig(reason))
        };

        if !self.min_ease_factor.is_finite() || self.min_ease_factor <= 0.0 {
            return invalid(format!(
                "minEaseFactor must be positive and finite, got {}",
                self.min_ease_factor
            ));
        }
        if !self.default_ease_factor.is_finite() || self.default_ease_factor < self.min_ease_factor
        {
            return invalid(format!(
                "defaultEaseFactor {} is below minEaseFactor {}",
                self.default_ease_factor, self.min_ease_factor
            ));
        }
        if self.passing_quality > 5 {
            return invalid(format!(
                "passingQuality must be within 0..=5, got {}",
                self.passing_quality
            ));
        }

        let m = &self.maintenance;
        if !m.strong_ease_factor.is_finite()
            || !m.very_strong_ease_factor.is_finite()
            || m.strong_ease_factor >= m.very_strong_ease_factor
        {
            return invalid(format!(
                "maintenance ease tiers must increase: {} then {}",
                m.strong_ease_factor, m.very_strong_ease_factor
            ));
        }
        if m.base_days >= m.strong_days || m.strong_days >= m.very_strong_days {
            return invalid(format!(
                "maintenance days must increase: {}, {}, {}",
                m.base_days, m.strong_days, m.very_strong_days
            ));
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl MaintenanceConfig {
    pub const DEFAULT: MaintenanceConfig = MaintenanceConfig {
        base_days: 90,
        strong_ease_factor: 3.2,
        strong_days: 120,
        very_strong_ease_factor: 3.5,
        very_strong_days: 180,
    };

    /// Days a learned item may go unreviewed at the given ease factor.
    pub fn interval_days(&self, ease_factor: f64) -> u32 {
        if ease_factor >= self.very_strong_ease_factor {
            self.very_strong_days
        } else if ease_factor >= self.strong_ease_factor {
            self.strong_days
        } else {
            self.base_days
        }
    }
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_are_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json_str(r#"{ "learnedMinRepetitions": 8 }"#).unwrap();
        assert_eq!(config.learned_min_repetitions, 8);
        assert_eq!(config.min_ease_factor, 1.3);
        assert_eq!(config.maintenance.base_days, 90);
    }

    #[test]
    fn test_nested_maintenance_override() {
        let json = r#"{ "maintenance": { "baseDays": 60 } }"#;
        let config = EngineConfig::from_json_str(json).unwrap();
        assert_eq!(config.maintenance.base_days, 60);
        assert_eq!(config.maintenance.very_strong_days, 180);
    }

    #[test]
    fn test_rejects_unordered_maintenance_days() {
        let json = r#"{ "maintenance": { "baseDays": 150 } }"#;
        let result = EngineConfig::from_json_str(json);
        assert!(matches!(result, Err(PhaseError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_bad_ease_floor() {
        let result = EngineConfig::from_json_str(r#"{ "minEaseFactor": 0 }"#);
        assert!(matches!(result, Err(PhaseError::InvalidConfig(_))));

        let result = EngineConfig::from_json_str(r#"{ "defaultEaseFactor": 1.0 }"#);
        assert!(matches!(result, Err(PhaseError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_quality_out_of_range() {
        let result = EngineConfig::from_json_str(r#"{ "passingQuality": 6 }"#);
        assert!(matches!(result, Err(PhaseError::InvalidConfig(_))));
    }

    #[test]
    fn test_invalid_json() {
        let result = EngineConfig::from_json_str("{ this is not valid json }");
        assert!(matches!(result, Err(PhaseError::Json(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phases.json");
        fs::write(&path, r#"{ "minReviewsToAdvance": 4 }"#).unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.min_reviews_to_advance, 4);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = EngineConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(PhaseError::Io(_))));
    }

    #[test]
    fn test_maintenance_tiers() {
        let m = MaintenanceConfig::default();
        assert_eq!(m.interval_days(3.0), 90);
        assert_eq!(m.interval_days(3.2), 120);
        assert_eq!(m.interval_days(3.49), 120);
        assert_eq!(m.interval_days(3.5), 180);
    }
}
