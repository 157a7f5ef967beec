//! Shared fit-pipeline types
//!
//! Body zones, garment categories, fit intents, fabric stretch and the
//! canonical (inch-based) measurement sets.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Zone list for one category (never more than four)
pub type ZoneList = SmallVec<[Zone; 4]>;

/// Measured body/garment zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// Chest on tops, bust on dresses
    Chest,
    Waist,
    Hips,
    Shoulder,
    Sleeve,
    Inseam,
    Rise,
    /// Garment length (tops and dresses)
    Length,
}

impl Zone {
    /// Field name used in `missing[]` lists and JSON
    pub fn key(&self) -> &'static str {
        match self {
            Zone::Chest => "chest",
            Zone::Waist => "waist",
            Zone::Hips => "hips",
            Zone::Shoulder => "shoulder",
            Zone::Sleeve => "sleeve",
            Zone::Inseam => "inseam",
            Zone::Rise => "rise",
            Zone::Length => "length",
        }
    }

    /// Field name reported for a category; dresses name the chest "bust"
    pub fn field_name(&self, category: GarmentCategory) -> &'static str {
        match (self, category) {
            (Zone::Chest, GarmentCategory::Dresses) => "bust",
            _ => self.key(),
        }
    }

    /// Length zones target the body value directly; everything else is a
    /// circumference (or width) that needs ease
    pub fn is_length(&self) -> bool {
        matches!(self, Zone::Inseam | Zone::Rise | Zone::Length)
    }

    /// Human label, aware that dresses call the chest "bust"
    pub fn label(&self, category: GarmentCategory) -> &'static str {
        match (self, category) {
            (Zone::Chest, GarmentCategory::Dresses) => "Bust",
            (Zone::Chest, _) => "Chest",
            (Zone::Waist, _) => "Waist",
            (Zone::Hips, _) => "Hips",
            (Zone::Shoulder, _) => "Shoulder",
            (Zone::Sleeve, _) => "Sleeve",
            (Zone::Inseam, _) => "Inseam",
            (Zone::Rise, _) => "Rise",
            (Zone::Length, _) => "Length",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Product category driving zones, ease and weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentCategory {
    UpperBody,
    LowerBody,
    Dresses,
}

impl GarmentCategory {
    pub fn key(&self) -> &'static str {
        match self {
            GarmentCategory::UpperBody => "upper_body",
            GarmentCategory::LowerBody => "lower_body",
            GarmentCategory::Dresses => "dresses",
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            GarmentCategory::UpperBody => "top",
            GarmentCategory::LowerBody => "bottom",
            GarmentCategory::Dresses => "dress",
        }
    }

    /// Zones scored for this category, in weight order
    pub fn zones(&self) -> ZoneList {
        match self {
            GarmentCategory::UpperBody => {
                SmallVec::from_buf([Zone::Chest, Zone::Shoulder, Zone::Sleeve, Zone::Length])
            }
            GarmentCategory::LowerBody => {
                SmallVec::from_buf([Zone::Waist, Zone::Hips, Zone::Inseam, Zone::Rise])
            }
            GarmentCategory::Dresses => {
                SmallVec::from_buf([Zone::Chest, Zone::Waist, Zone::Hips, Zone::Length])
            }
        }
    }

    /// Parse canonical keys and common product-type words
    pub fn parse(text: &str) -> Option<GarmentCategory> {
        let key = text.trim().to_lowercase().replace(['-', ' ', '/'], "_");
        match key.as_str() {
            "upper_body" | "upper" | "top" | "tops" => return Some(GarmentCategory::UpperBody),
            "lower_body" | "lower" | "bottom" | "bottoms" => return Some(GarmentCategory::LowerBody),
            "dresses" | "dress" => return Some(GarmentCategory::Dresses),
            _ => {}
        }

        // The head noun comes last: "dress shirt" is a top, "shirt dress" a dress
        key.split('_').rev().find_map(Self::from_noun)
    }

    fn from_noun(token: &str) -> Option<GarmentCategory> {
        const DRESS: &[&str] = &["dress", "gown", "jumpsuit", "romper"];
        const LOWER: &[&str] = &["pant", "trouser", "jean", "shorts", "skirt", "legging", "chino", "jogger"];
        const UPPER: &[&str] = &[
            "shirt", "tshirt", "tee", "blouse", "sweater", "jacket", "hoodie", "coat",
            "cardigan", "top", "blazer", "polo", "sweatshirt", "tank",
        ];

        // Plurals fold onto the singular; "short" alone is not a bottom
        let is = |words: &[&str]| {
            words.iter().any(|w| {
                token == *w || token.strip_suffix('s') == Some(*w) || token.strip_suffix("es") == Some(*w)
            })
        };

        if is(DRESS) {
            Some(GarmentCategory::Dresses)
        } else if is(LOWER) {
            Some(GarmentCategory::LowerBody)
        } else if is(UPPER) {
            Some(GarmentCategory::UpperBody)
        } else {
            None
        }
    }
}

impl fmt::Display for GarmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Qualitative tightness preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitIntent {
    Snug,
    Regular,
    Relaxed,
    Oversized,
}

impl FitIntent {
    pub const ALL: [FitIntent; 4] =
        [FitIntent::Snug, FitIntent::Regular, FitIntent::Relaxed, FitIntent::Oversized];

    pub fn key(&self) -> &'static str {
        match self {
            FitIntent::Snug => "snug",
            FitIntent::Regular => "regular",
            FitIntent::Relaxed => "relaxed",
            FitIntent::Oversized => "oversized",
        }
    }

    /// Position in the ease tables
    pub(crate) fn index(&self) -> usize {
        match self {
            FitIntent::Snug => 0,
            FitIntent::Regular => 1,
            FitIntent::Relaxed => 2,
            FitIntent::Oversized => 3,
        }
    }
}

impl fmt::Display for FitIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How much the fabric gives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FabricStretch {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl FabricStretch {
    /// Multiplier applied to chest and waist ease
    pub fn ease_factor(&self) -> f64 {
        match self {
            FabricStretch::None => 1.0,
            FabricStretch::Low => 0.85,
            FabricStretch::Medium => 0.7,
            FabricStretch::High => 0.5,
        }
    }

    pub fn is_stretch(&self) -> bool {
        *self != FabricStretch::None
    }

    /// Band an elastane percentage: 0 → none, ≤2 → low, ≤5 → medium, above → high
    pub fn from_percent(percent: f64) -> FabricStretch {
        if percent <= 0.0 {
            FabricStretch::None
        } else if percent <= 2.0 {
            FabricStretch::Low
        } else if percent <= 5.0 {
            FabricStretch::Medium
        } else {
            FabricStretch::High
        }
    }

    /// Interpret a free-form stretch descriptor
    ///
    /// Booleans mean none/medium; numbers are elastane percentages.
    pub fn from_value(value: &serde_json::Value) -> FabricStretch {
        use serde_json::Value;
        match value {
            Value::Bool(true) => FabricStretch::Medium,
            Value::Number(n) => n.as_f64().map(FabricStretch::from_percent).unwrap_or_default(),
            Value::String(s) => FabricStretch::parse(s),
            _ => FabricStretch::None,
        }
    }

    /// Parse text such as `"slight stretch"`, `"no stretch"`, `"4-way"` or `"3% elastane"`
    pub fn parse(text: &str) -> FabricStretch {
        let lower = text.trim().to_lowercase();
        let first = lower
            .split(|c: char| !c.is_ascii_alphanumeric())
            .find(|t| !t.is_empty())
            .unwrap_or("");

        if first.is_empty()
            || matches!(first, "no" | "not" | "non" | "none" | "false" | "rigid" | "nonstretch")
            || lower.contains("rigid")
            || lower.contains("none")
        {
            return FabricStretch::None;
        }

        if lower.contains("4-way") || lower.contains("four-way") || lower.contains("four way") {
            return FabricStretch::High;
        }
        if lower.contains("2-way") || lower.contains("two-way") || lower.contains("two way") {
            return FabricStretch::Medium;
        }

        if let Some(percent) = elastane_percent(&lower) {
            return FabricStretch::from_percent(percent);
        }

        if lower.contains("high") || lower.contains("super") || lower.contains("very") {
            FabricStretch::High
        } else if lower.contains("low") || lower.contains("slight") || lower.contains("light") || lower.contains("some") {
            FabricStretch::Low
        } else {
            // "medium", "moderate", "stretch", "yes", "true"
            FabricStretch::Medium
        }
    }
}

/// Elastane share in a stretch or composition string
///
/// Takes the smallest number so `"95% cotton 5% elastane"` reads as 5.
fn elastane_percent(text: &str) -> Option<f64> {
    text.split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter_map(|t| t.parse::<f64>().ok())
        .min_by(f64::total_cmp)
}

/// Canonical body measurements in inches; every zone independently optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMeasurementSet {
    /// Chest or bust
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    pub shoulder: Option<f64>,
    /// Arm length
    pub sleeve: Option<f64>,
    pub inseam: Option<f64>,
    pub rise: Option<f64>,
    /// Preferred garment length
    pub length: Option<f64>,
    pub height: Option<f64>,
}

impl BodyMeasurementSet {
    pub fn get(&self, zone: Zone) -> Option<f64> {
        match zone {
            Zone::Chest => self.chest,
            Zone::Waist => self.waist,
            Zone::Hips => self.hips,
            Zone::Shoulder => self.shoulder,
            Zone::Sleeve => self.sleeve,
            Zone::Inseam => self.inseam,
            Zone::Rise => self.rise,
            Zone::Length => self.length,
        }
    }

    pub fn set(&mut self, zone: Zone, value: Option<f64>) {
        match zone {
            Zone::Chest => self.chest = value,
            Zone::Waist => self.waist = value,
            Zone::Hips => self.hips = value,
            Zone::Shoulder => self.shoulder = value,
            Zone::Sleeve => self.sleeve = value,
            Zone::Inseam => self.inseam = value,
            Zone::Rise => self.rise = value,
            Zone::Length => self.length = value,
        }
    }
}

/// Canonical garment measurements in inches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GarmentMeasurements {
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    pub shoulder: Option<f64>,
    pub sleeve: Option<f64>,
    pub inseam: Option<f64>,
    pub rise: Option<f64>,
    pub length: Option<f64>,
    pub outseam: Option<f64>,
}

impl GarmentMeasurements {
    pub fn get(&self, zone: Zone) -> Option<f64> {
        match zone {
            Zone::Chest => self.chest,
            Zone::Waist => self.waist,
            Zone::Hips => self.hips,
            Zone::Shoulder => self.shoulder,
            Zone::Sleeve => self.sleeve,
            Zone::Inseam => self.inseam,
            Zone::Rise => self.rise,
            Zone::Length => self.length,
        }
    }

    pub fn set(&mut self, zone: Zone, value: Option<f64>) {
        match zone {
            Zone::Chest => self.chest = value,
            Zone::Waist => self.waist = value,
            Zone::Hips => self.hips = value,
            Zone::Shoulder => self.shoulder = value,
            Zone::Sleeve => self.sleeve = value,
            Zone::Inseam => self.inseam = value,
            Zone::Rise => self.rise = value,
            Zone::Length => self.length = value,
        }
    }
}

/// One normalized size-chart row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GarmentSizeRow {
    pub size_label: String,
    pub measurements: GarmentMeasurements,
}
