//! Ease profiles
//!
//! Target ease (garment minus body, inches) per zone for every
//! category × fit intent, adjusted for fabric stretch. Length zones carry
//! zero ease: an inseam, rise or hem length should equal the body value.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::types::{FabricStretch, FitIntent, GarmentCategory, Zone};

/// Ease by intent: [snug, regular, relaxed, oversized]
type EaseRow = [f64; 4];

const NO_EASE: EaseRow = [0.0, 0.0, 0.0, 0.0];

const UPPER_CHEST: EaseRow = [2.0, 4.0, 6.0, 10.0];
const UPPER_SHOULDER: EaseRow = [0.5, 1.0, 2.0, 3.0];
const UPPER_SLEEVE: EaseRow = [0.0, 0.5, 1.0, 1.5];

const LOWER_WAIST: EaseRow = [0.5, 1.0, 2.0, 4.0];
const LOWER_HIPS: EaseRow = [1.5, 2.5, 4.0, 6.0];

const DRESS_BUST: EaseRow = [1.5, 3.0, 5.0, 8.0];
const DRESS_WAIST: EaseRow = [1.0, 2.0, 4.0, 7.0];
const DRESS_HIPS: EaseRow = [2.0, 3.0, 5.0, 8.0];

fn ease_row(category: GarmentCategory, zone: Zone) -> EaseRow {
    if zone.is_length() {
        return NO_EASE;
    }
    match (category, zone) {
        (GarmentCategory::UpperBody, Zone::Chest) => UPPER_CHEST,
        (GarmentCategory::UpperBody, Zone::Shoulder) => UPPER_SHOULDER,
        (GarmentCategory::UpperBody, Zone::Sleeve) => UPPER_SLEEVE,
        (GarmentCategory::LowerBody, Zone::Waist) => LOWER_WAIST,
        (GarmentCategory::LowerBody, Zone::Hips) => LOWER_HIPS,
        (GarmentCategory::Dresses, Zone::Chest) => DRESS_BUST,
        (GarmentCategory::Dresses, Zone::Waist) => DRESS_WAIST,
        (GarmentCategory::Dresses, Zone::Hips) => DRESS_HIPS,
        _ => NO_EASE,
    }
}

/// Target ease for one zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneEase {
    pub zone: Zone,
    pub ease: f64,
}

/// Per-zone ease targets for one category/intent/stretch combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EaseProfile {
    pub category: GarmentCategory,
    pub intent: FitIntent,
    pub stretch: FabricStretch,
    pub zones: SmallVec<[ZoneEase; 4]>,
}

impl EaseProfile {
    pub fn ease_for(&self, zone: Zone) -> Option<f64> {
        self.zones.iter().find(|z| z.zone == zone).map(|z| z.ease)
    }

    /// Garment measurement this profile aims for on a given body
    pub fn target_for(&self, zone: Zone, body: f64) -> Option<f64> {
        self.ease_for(zone).map(|ease| body + ease)
    }
}

/// Build the ease profile; stretch scales the chest and waist targets
pub fn ease_profile(category: GarmentCategory, intent: FitIntent, stretch: FabricStretch) -> EaseProfile {
    let zones = category
        .zones()
        .into_iter()
        .map(|zone| {
            let base = ease_row(category, zone)[intent.index()];
            let ease = match zone {
                Zone::Chest | Zone::Waist => base * stretch.ease_factor(),
                _ => base,
            };
            ZoneEase { zone, ease }
        })
        .collect();

    EaseProfile { category, intent, stretch, zones }
}

/// Free-text fit descriptions, matched by substring in this order
const FIT_KEYWORDS: [(&str, FitIntent); 13] = [
    ("oversized", FitIntent::Oversized),
    ("relaxed", FitIntent::Relaxed),
    ("slim", FitIntent::Snug),
    ("snug", FitIntent::Snug),
    ("regular", FitIntent::Regular),
    ("oversize", FitIntent::Oversized),
    ("boyfriend", FitIntent::Relaxed),
    ("loose", FitIntent::Relaxed),
    ("fitted", FitIntent::Snug),
    ("skinny", FitIntent::Snug),
    ("tight", FitIntent::Snug),
    ("classic", FitIntent::Regular),
    ("standard", FitIntent::Regular),
];

/// Read a fit-type string; `None` when no keyword appears
pub fn parse_fit_text(text: &str) -> Option<FitIntent> {
    let lower = text.to_lowercase();
    FIT_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|&(_, intent)| intent)
}

/// Decide which fit intent to score for
///
/// A non-empty garment fit type wins over the caller's preference and
/// falls back to regular when it names nothing recognizable.
pub fn resolve_fit_intent(garment_fit_type: Option<&str>, caller_intent: Option<FitIntent>) -> FitIntent {
    match garment_fit_type.map(str::trim).filter(|s| !s.is_empty()) {
        Some(text) => parse_fit_text(text).unwrap_or(FitIntent::Regular),
        None => caller_intent.unwrap_or(FitIntent::Regular),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_profile_covers_category_zones() {
        for category in [GarmentCategory::UpperBody, GarmentCategory::LowerBody, GarmentCategory::Dresses] {
            let profile = ease_profile(category, FitIntent::Regular, FabricStretch::None);
            let zones: Vec<Zone> = profile.zones.iter().map(|z| z.zone).collect();
            assert_eq!(zones, category.zones().to_vec());
        }
    }

    #[test]
    fn test_ease_is_non_negative_and_length_is_zero() {
        for category in [GarmentCategory::UpperBody, GarmentCategory::LowerBody, GarmentCategory::Dresses] {
            for intent in FitIntent::ALL {
                let profile = ease_profile(category, intent, FabricStretch::High);
                for z in &profile.zones {
                    assert!(z.ease >= 0.0);
                    if z.zone.is_length() {
                        assert_eq!(z.ease, 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_ease_grows_with_intent() {
        let eases: Vec<f64> = FitIntent::ALL
            .iter()
            .map(|&i| ease_profile(GarmentCategory::UpperBody, i, FabricStretch::None).ease_for(Zone::Chest).unwrap())
            .collect();
        assert!(eases.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_stretch_reduces_chest_and_waist_only() {
        let rigid = ease_profile(GarmentCategory::Dresses, FitIntent::Regular, FabricStretch::None);
        let stretchy = ease_profile(GarmentCategory::Dresses, FitIntent::Regular, FabricStretch::High);

        assert_relative_eq!(stretchy.ease_for(Zone::Chest).unwrap(), rigid.ease_for(Zone::Chest).unwrap() * 0.5);
        assert_relative_eq!(stretchy.ease_for(Zone::Waist).unwrap(), rigid.ease_for(Zone::Waist).unwrap() * 0.5);
        assert_eq!(stretchy.ease_for(Zone::Hips), rigid.ease_for(Zone::Hips));
    }

    #[test]
    fn test_target_for() {
        let profile = ease_profile(GarmentCategory::UpperBody, FitIntent::Regular, FabricStretch::None);
        assert_eq!(profile.target_for(Zone::Chest, 40.0), Some(44.0));
        assert_eq!(profile.target_for(Zone::Length, 28.0), Some(28.0));
        assert_eq!(profile.target_for(Zone::Waist, 32.0), None);
    }

    #[test]
    fn test_fit_text_precedence() {
        assert_eq!(parse_fit_text("Oversized Relaxed Tee"), Some(FitIntent::Oversized));
        assert_eq!(parse_fit_text("Relaxed slim"), Some(FitIntent::Relaxed));
        assert_eq!(parse_fit_text("Slim Fit"), Some(FitIntent::Snug));
        assert_eq!(parse_fit_text("skinny jeans"), Some(FitIntent::Snug));
        assert_eq!(parse_fit_text("Boyfriend cut"), Some(FitIntent::Relaxed));
        assert_eq!(parse_fit_text("Classic"), Some(FitIntent::Regular));
        assert_eq!(parse_fit_text("A-line"), None);
    }

    #[test]
    fn test_garment_fit_type_overrides_caller() {
        assert_eq!(resolve_fit_intent(Some("slim"), Some(FitIntent::Relaxed)), FitIntent::Snug);
        assert_eq!(resolve_fit_intent(Some("A-line"), Some(FitIntent::Relaxed)), FitIntent::Regular);
        assert_eq!(resolve_fit_intent(Some("  "), Some(FitIntent::Relaxed)), FitIntent::Relaxed);
        assert_eq!(resolve_fit_intent(None, Some(FitIntent::Oversized)), FitIntent::Oversized);
        assert_eq!(resolve_fit_intent(None, None), FitIntent::Regular);
    }
}
