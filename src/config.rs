//! Engine configuration
//!
//! All calibration constants used by the color classifier and the size
//! scorer live here so they can be tuned against labeled data instead of
//! being hard-coded. The defaults reproduce the stock behavior:
//!
//! - unclassified gate: ΔE > 12
//! - ambiguity gate: runner-up margin < 2 ΔE
//! - name cache: 100 entries, FIFO
//! - tightness penalty: `-(10 + 1.5·|ease|)`
//! - looseness bands: ≤2 → 6, ≤5 → 4, ≤9 → 2, else 1
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use style_scorer_rust::EngineConfig;
//! use std::path::Path;
//!
//! let config = EngineConfig::from_json_file(Path::new("style_config.json"))?;
//! let defaults = EngineConfig::default();
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::StyleError;

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub color: ColorConfig,
    pub fit: FitConfig,
}

/// Color classification parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Best-match ΔE above this value means the color fits no palette
    pub unclassified_threshold: f64,

    /// Minimum ΔE margin between the best match and the cross-group runner-up
    pub ambiguity_threshold: f64,

    /// Maximum number of resolved names kept in memory
    pub name_cache_capacity: usize,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            unclassified_threshold: 12.0,
            ambiguity_threshold: 2.0,
            name_cache_capacity: 100,
        }
    }
}

/// Size scoring parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Fixed part of the penalty applied to any zone with negative ease
    pub hard_penalty: f64,

    /// Additional penalty per inch of negative ease
    pub tightness_slope: f64,

    /// Upper edges (inches from target) of the three best looseness bands
    pub band_edges: [f64; 3],

    /// Scores for the four looseness bands, best first
    pub band_scores: [f64; 4],

    /// Aggregate scores below this floor are reported as medium risk
    pub risk_floor: f64,

    /// Highest confidence a high-risk recommendation may report
    pub high_risk_confidence_cap: u8,

    /// Highest confidence a medium-risk recommendation may report
    pub medium_risk_confidence_cap: u8,

    /// Two sizes closer than this in aggregate score are called "between sizes"
    pub close_call_margin: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            hard_penalty: 10.0,
            tightness_slope: 1.5,
            band_edges: [2.0, 5.0, 9.0],
            band_scores: [6.0, 4.0, 2.0, 1.0],
            risk_floor: 3.5,
            high_risk_confidence_cap: 45,
            medium_risk_confidence_cap: 70,
            close_call_margin: 0.5,
        }
    }
}

impl FitConfig {
    /// Best score a single zone can earn
    pub fn max_zone_score(&self) -> f64 {
        self.band_scores[0]
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file and validate it
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config: {:?}", path))?;

        let config: EngineConfig = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse engine config JSON")?;

        config
            .validate()
            .with_context(|| format!("Invalid engine config: {:?}", path))?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("Failed to write engine config: {:?}", path))?;
        Ok(())
    }

    /// Check that every threshold is usable
    pub fn validate(&self) -> crate::error::Result<()> {
        let positive = [
            ("color.unclassified_threshold", self.color.unclassified_threshold),
            ("color.ambiguity_threshold", self.color.ambiguity_threshold),
            ("fit.hard_penalty", self.fit.hard_penalty),
            ("fit.tightness_slope", self.fit.tightness_slope),
            ("fit.risk_floor", self.fit.risk_floor),
        ];
        for (parameter, value) in positive {
            if !(value > 0.0) {
                return Err(StyleError::NonPositive { parameter, value });
            }
        }

        if self.color.name_cache_capacity == 0 {
            return Err(StyleError::ZeroCacheCapacity);
        }

        let edges = self.fit.band_edges;
        if !(edges[0] >= 0.0 && edges[0] < edges[1] && edges[1] < edges[2]) {
            return Err(StyleError::UnorderedBands { edges });
        }

        for (parameter, value) in [
            ("fit.high_risk_confidence_cap", self.fit.high_risk_confidence_cap),
            ("fit.medium_risk_confidence_cap", self.fit.medium_risk_confidence_cap),
        ] {
            if value > 100 {
                return Err(StyleError::ConfidenceCap { parameter, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.color.unclassified_threshold, 12.0);
        assert_eq!(config.color.ambiguity_threshold, 2.0);
        assert_eq!(config.color.name_cache_capacity, 100);
        assert_eq!(config.fit.max_zone_score(), 6.0);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = EngineConfig::default();
        config.color.ambiguity_threshold = 0.0;
        assert_eq!(
            config.validate(),
            Err(StyleError::NonPositive { parameter: "color.ambiguity_threshold", value: 0.0 })
        );

        let mut config = EngineConfig::default();
        config.fit.band_edges = [5.0, 2.0, 9.0];
        assert!(matches!(config.validate(), Err(StyleError::UnorderedBands { .. })));

        let mut config = EngineConfig::default();
        config.color.name_cache_capacity = 0;
        assert_eq!(config.validate(), Err(StyleError::ZeroCacheCapacity));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"color": {"unclassified_threshold": 10.0}}"#).unwrap();
        assert_eq!(config.color.unclassified_threshold, 10.0);
        assert_eq!(config.color.ambiguity_threshold, 2.0);
        assert_eq!(config.fit, FitConfig::default());
    }

    #[test]
    fn test_json_file_roundtrip() {
        let path = std::env::temp_dir().join("style_scorer_config_test.json");
        let mut config = EngineConfig::default();
        config.fit.risk_floor = 3.0;
        config.to_json_file(&path).unwrap();

        let loaded = EngineConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
        let _ = fs::remove_file(&path);
    }
}
