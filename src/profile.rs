//! Request types: who is wearing it and what they are looking at
//!
//! Both structs are deliberately lenient. Free-text fields are parsed
//! downstream, and measurements stay as raw JSON until the normalizer has
//! handled units and aliases.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::color::Season;
use crate::fit::normalization::{normalize_body, normalize_chart_row_with_unit, Unit};
use crate::fit::types::{BodyMeasurementSet, FabricStretch, FitIntent, GarmentCategory, GarmentSizeRow};
use crate::fit::ease::{parse_fit_text, resolve_fit_intent};
use crate::fit::recommend::FitRequest;

/// Skin undertone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Undertone {
    Warm,
    Cool,
    Neutral,
}

impl Undertone {
    pub fn parse(text: &str) -> Option<Undertone> {
        let lower = text.trim().to_lowercase();
        if lower.contains("neutral") || lower.contains("olive") {
            Some(Undertone::Neutral)
        } else if lower.contains("warm") || lower.contains("golden") || lower.contains("peach") {
            Some(Undertone::Warm)
        } else if lower.contains("cool") || lower.contains("pink") || lower.contains("blue") {
            Some(Undertone::Cool)
        } else {
            None
        }
    }
}

/// Overall lightness of the user's coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    Light,
    #[default]
    Medium,
    Deep,
}

impl Depth {
    pub fn parse(text: &str) -> Option<Depth> {
        let lower = text.trim().to_lowercase();
        if lower.contains("light") || lower.contains("fair") {
            Some(Depth::Light)
        } else if lower.contains("deep") || lower.contains("dark") {
            Some(Depth::Deep)
        } else if lower.contains("medium") || lower.contains("mid") {
            Some(Depth::Medium)
        } else {
            None
        }
    }
}

/// Contrast/saturation of the user's coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clarity {
    Bright,
    #[default]
    Muted,
}

impl Clarity {
    pub fn parse(text: &str) -> Option<Clarity> {
        let lower = text.trim().to_lowercase();
        if lower.contains("bright") || lower.contains("clear") || lower.contains("high") {
            Some(Clarity::Bright)
        } else if lower.contains("muted") || lower.contains("soft") || lower.contains("low") {
            Some(Clarity::Muted)
        } else {
            None
        }
    }
}

/// The person the recommendation is for
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    /// Color season, e.g. "Autumn" or "Light Spring"
    #[serde(alias = "colorSeason")]
    pub season: Option<String>,
    pub undertone: Option<String>,
    pub depth: Option<String>,
    pub clarity: Option<String>,
    pub body_shape: Option<String>,
    /// Preferred fit when the garment does not dictate one
    #[serde(alias = "fitIntent")]
    pub fit_preference: Option<String>,
    /// Raw measurements; aliases and units are resolved by the normalizer
    #[serde(alias = "bodyMeasurements")]
    pub measurements: Map<String, Value>,
}

impl UserProfile {
    pub fn season(&self) -> Option<Season> {
        self.season.as_deref().and_then(Season::parse)
    }

    pub fn undertone(&self) -> Option<Undertone> {
        self.undertone.as_deref().and_then(Undertone::parse)
    }

    pub fn depth(&self) -> Depth {
        self.depth.as_deref().and_then(Depth::parse).unwrap_or_default()
    }

    pub fn clarity(&self) -> Clarity {
        self.clarity.as_deref().and_then(Clarity::parse).unwrap_or_default()
    }

    pub fn fit_preference(&self) -> Option<FitIntent> {
        self.fit_preference.as_deref().and_then(parse_fit_text)
    }

    pub fn body_measurements(&self) -> BodyMeasurementSet {
        normalize_body(&self.measurements)
    }
}

/// One size-chart entry as it arrives from the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SizeChartEntry {
    #[serde(alias = "size", alias = "label")]
    pub size_label: String,
    pub measurements: Map<String, Value>,
}

/// The garment being considered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GarmentDescriptor {
    pub name: Option<String>,
    #[serde(alias = "hex", alias = "dominantHex", alias = "color")]
    pub color_hex: Option<String>,
    pub category: Option<String>,
    pub fit_type: Option<String>,
    pub fabric_stretch: Option<Value>,
    /// Unit for bare numbers in the size chart (inches when absent)
    pub units: Option<String>,
    pub size_chart: Vec<SizeChartEntry>,
}

impl GarmentDescriptor {
    /// Trimmed color hex, `None` when blank
    pub fn color(&self) -> Option<&str> {
        self.color_hex.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn category(&self) -> Option<GarmentCategory> {
        self.category.as_deref().and_then(GarmentCategory::parse)
    }

    pub fn stretch(&self) -> FabricStretch {
        self.fabric_stretch.as_ref().map(FabricStretch::from_value).unwrap_or_default()
    }

    /// Garment fit type wins over the user's preference
    pub fn fit_intent(&self, user: &UserProfile) -> FitIntent {
        resolve_fit_intent(self.fit_type.as_deref(), user.fit_preference())
    }

    pub fn size_rows(&self) -> Vec<GarmentSizeRow> {
        let unit = self.units.as_deref().and_then(Unit::parse).unwrap_or_default();
        self.size_chart
            .iter()
            .map(|entry| GarmentSizeRow {
                size_label: entry.size_label.clone(),
                measurements: normalize_chart_row_with_unit(&entry.measurements, unit),
            })
            .collect()
    }

    pub fn fit_request(&self, user: &UserProfile) -> FitRequest {
        FitRequest {
            category: self.category(),
            intent: self.fit_intent(user),
            stretch: self.stretch(),
            chart: self.size_rows(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_profile_defaults() {
        let user: UserProfile = serde_json::from_value(json!({"season": "Deep Autumn"})).unwrap();
        assert_eq!(user.season(), Some(Season::Autumn));
        assert_eq!(user.depth(), Depth::Medium);
        assert_eq!(user.clarity(), Clarity::Muted);
        assert_eq!(user.undertone(), None);
        assert!(user.measurements.is_empty());
    }

    #[test]
    fn test_profile_parsers() {
        assert_eq!(Undertone::parse("Olive"), Some(Undertone::Neutral));
        assert_eq!(Undertone::parse("warm"), Some(Undertone::Warm));
        assert_eq!(Depth::parse("Dark"), Some(Depth::Deep));
        assert_eq!(Clarity::parse("clear"), Some(Clarity::Bright));
        assert_eq!(Clarity::parse("soft"), Some(Clarity::Muted));
    }

    #[test]
    fn test_garment_descriptor_aliases() {
        let garment: GarmentDescriptor = serde_json::from_value(json!({
            "hex": " #ff6f61 ",
            "category": "Tops",
            "fitType": "Slim Fit",
            "fabricStretch": "high stretch",
            "units": "cm",
            "sizeChart": [{"size": "M", "measurements": {"chest": 101.6}}]
        }))
        .unwrap();

        assert_eq!(garment.color(), Some("#ff6f61"));
        assert_eq!(garment.category(), Some(GarmentCategory::UpperBody));
        assert_eq!(garment.stretch(), FabricStretch::High);

        let user = UserProfile { fit_preference: Some("relaxed".into()), ..Default::default() };
        assert_eq!(garment.fit_intent(&user), FitIntent::Snug);

        let rows = garment.size_rows();
        assert_eq!(rows[0].size_label, "M");
        assert!((rows[0].measurements.chest.unwrap() - 40.0).abs() < 1e-9);
    }
}
