//! Style Scorer Rust Implementation
//!
//! Deterministic garment recommendations: does this color suit the user,
//! and which size fits them.
//!
//! - `color/`: hex → Lab conversion, seasonal palette classification, color naming
//! - `fit/`: measurement normalization, ease profiles, size scoring, risk
//! - `suitability/`: color and body-shape verdicts with rationale
//! - `engine`: the context object tying the pipelines together
//!
//! ```
//! use style_scorer_rust::{GarmentDescriptor, StyleEngine, UserProfile};
//!
//! let engine = StyleEngine::new();
//! let user = UserProfile { season: Some("Spring".into()), ..Default::default() };
//! let garment = GarmentDescriptor { color_hex: Some("#FF6F61".into()), ..Default::default() };
//! let verdict = engine.color_suitability(&user, &garment);
//! println!("{}", verdict.summary);
//! ```

pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod fit;
pub mod profile;
pub mod suitability;

// Re-export commonly used types
pub use color::{
    delta_e_76, hex_to_lab, ClassificationResult, ClassificationStatus, ColorNamer, LabColor,
    NamedColorMatch, NamedColorResolver, PaletteCatalog, PaletteClassifier, Season,
};
pub use config::{ColorConfig, EngineConfig, FitConfig};
pub use engine::{Recommendation, RecommendationRequest, StyleEngine};
pub use error::StyleError;
pub use fit::{FitIntent, FitRecommendation, FitStatus, GarmentCategory, RiskLevel};
pub use profile::{GarmentDescriptor, SizeChartEntry, UserProfile};
pub use suitability::{BodyShapeVerdict, ColorVerdict, SuitabilityVerdict};
