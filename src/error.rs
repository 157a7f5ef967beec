//! Error types for the style scorer
//!
//! Scoring itself never fails: malformed colors, missing measurements and
//! empty charts are reported as status fields on the returned results.
//! Errors only surface at the construction boundary, when an engine
//! configuration is loaded or validated.

use thiserror::Error;

/// Result type alias for configuration-level operations
pub type Result<T> = std::result::Result<T, StyleError>;

/// Configuration errors raised while building a [`crate::StyleEngine`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    /// A threshold or penalty that must be strictly positive was not
    #[error("Invalid parameter: {parameter} = {value} (must be > 0)")]
    NonPositive { parameter: &'static str, value: f64 },

    /// Score band edges must be strictly increasing
    #[error("Score bands out of order: {edges:?}")]
    UnorderedBands { edges: [f64; 3] },

    /// The name cache needs room for at least one entry
    #[error("Name cache capacity must be at least 1")]
    ZeroCacheCapacity,

    /// Confidence caps must be percentages
    #[error("Confidence cap {parameter} = {value} is outside 0-100")]
    ConfidenceCap { parameter: &'static str, value: u8 },
}

impl StyleError {
    /// Short user-facing description, suitable for a CLI error line
    pub fn user_message(&self) -> String {
        match self {
            StyleError::NonPositive { parameter, .. } => {
                format!("Configuration value '{}' must be positive.", parameter)
            }
            StyleError::UnorderedBands { .. } => {
                "Score band edges must increase from tightest to loosest.".to_string()
            }
            StyleError::ZeroCacheCapacity => {
                "The color name cache must hold at least one entry.".to_string()
            }
            StyleError::ConfidenceCap { parameter, .. } => {
                format!("Confidence cap '{}' must be between 0 and 100.", parameter)
            }
        }
    }
}
