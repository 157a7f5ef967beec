//! Fit pipeline
//!
//! - `types.rs` - zones, categories, fit intents, stretch, measurement sets
//! - `normalization.rs` - unit conversion and field aliasing to canonical inches
//! - `ease.rs` - per-zone ease targets and fit-intent resolution
//! - `scorer.rs` - per-zone and aggregate size scoring, ranking
//! - `risk.rs` - risk tier, confidence and backup size
//! - `recommend.rs` - end-to-end size recommendation

pub mod types;
pub mod normalization;
pub mod ease;
pub mod scorer;
pub mod risk;
pub mod recommend;

pub use types::{
    BodyMeasurementSet, FabricStretch, FitIntent, GarmentCategory, GarmentMeasurements,
    GarmentSizeRow, Zone, ZoneList,
};
pub use normalization::{
    format_inches, normalize_body, normalize_chart_row, normalize_chart_row_with_unit,
    parse_height, to_inches, to_inches_with_unit, Unit,
};
pub use ease::{ease_profile, parse_fit_text, resolve_fit_intent, EaseProfile, ZoneEase};
pub use scorer::{rank_sizes, score_metric, score_size, zone_weight, SizeScore, ZoneScore};
pub use risk::{assess_risk, backup_size, confidence, RiskLevel};
pub use recommend::{recommend_size, FitRecommendation, FitRequest, FitStatus};
