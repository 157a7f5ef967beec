//! Body-shape heuristics
//!
//! A fixed rule table keyed by (body shape, garment category, fit intent).
//! The first matching rule wins; anything the table does not cover is a
//! neutral, versatile cut.
//!
//! When the user gives no shape, one is inferred from bust, waist and hip
//! circumferences (inches).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::assessment::{AssessmentStatus, BodyShapeSuitability, BodyShapeVerdict};
use crate::fit::types::{BodyMeasurementSet, FitIntent, GarmentCategory};
use BodyShapeVerdict::{Flattering, Ok as Fine, Risky};
use FitIntent::{Oversized, Regular, Relaxed, Snug};
use GarmentCategory::{Dresses, LowerBody, UpperBody};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyShape {
    Hourglass,
    Pear,
    Apple,
    Rectangle,
    InvertedTriangle,
}

impl BodyShape {
    pub fn display_text(&self) -> &'static str {
        match self {
            BodyShape::Hourglass => "hourglass",
            BodyShape::Pear => "pear",
            BodyShape::Apple => "apple",
            BodyShape::Rectangle => "rectangle",
            BodyShape::InvertedTriangle => "inverted triangle",
        }
    }

    pub fn parse(text: &str) -> Option<BodyShape> {
        let lower = text.trim().to_lowercase().replace(['-', '_'], " ");
        if lower.contains("inverted") || lower.contains("v shape") {
            Some(BodyShape::InvertedTriangle)
        } else if lower.contains("hourglass") {
            Some(BodyShape::Hourglass)
        } else if lower.contains("pear") || lower.contains("triangle") || lower.contains("spoon") {
            Some(BodyShape::Pear)
        } else if lower.contains("apple") || lower.contains("oval") || lower.contains("round") {
            Some(BodyShape::Apple)
        } else if lower.contains("rectangle") || lower.contains("straight") || lower.contains("athletic") || lower.contains("banana") {
            Some(BodyShape::Rectangle)
        } else {
            None
        }
    }
}

impl fmt::Display for BodyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

/// Bust/hip difference that makes one clearly dominant
const DOMINANT_DIFF: f64 = 3.6;

/// Infer a shape from bust, waist and hips; `None` if any is missing
pub fn infer_body_shape(bust: Option<f64>, waist: Option<f64>, hips: Option<f64>) -> Option<BodyShape> {
    let (bust, waist, hips) = (bust?, waist?, hips?);

    let shape = if waist + 2.0 >= bust.max(hips) {
        BodyShape::Apple
    } else if (bust - hips).abs() < DOMINANT_DIFF && (bust - waist >= 9.0 || hips - waist >= 10.0) {
        BodyShape::Hourglass
    } else if hips - bust >= DOMINANT_DIFF {
        BodyShape::Pear
    } else if bust - hips >= DOMINANT_DIFF && bust - waist < 9.0 {
        BodyShape::InvertedTriangle
    } else {
        BodyShape::Rectangle
    };
    Some(shape)
}

struct ShapeRule {
    shape: BodyShape,
    category: GarmentCategory,
    intents: &'static [FitIntent],
    verdict: BodyShapeVerdict,
    rationale: &'static str,
    alternative: Option<&'static str>,
}

const FITTED: &[FitIntent] = &[Snug, Regular];
const EASY: &[FitIntent] = &[Relaxed, Oversized];
const MIDDLE: &[FitIntent] = &[Regular, Relaxed];

static RULES: &[ShapeRule] = &[
    // Hourglass
    ShapeRule { shape: BodyShape::Hourglass, category: Dresses, intents: FITTED, verdict: Flattering,
        rationale: "A fitted dress follows your defined waist and balances bust and hips", alternative: None },
    ShapeRule { shape: BodyShape::Hourglass, category: Dresses, intents: &[Oversized], verdict: Risky,
        rationale: "An oversized dress hides your waist", alternative: Some("a belted wrap dress") },
    ShapeRule { shape: BodyShape::Hourglass, category: UpperBody, intents: FITTED, verdict: Flattering,
        rationale: "A fitted top keeps your waist visible", alternative: None },
    ShapeRule { shape: BodyShape::Hourglass, category: UpperBody, intents: &[Relaxed], verdict: Fine,
        rationale: "A relaxed top works best tucked in or belted", alternative: Some("a wrap top") },
    ShapeRule { shape: BodyShape::Hourglass, category: UpperBody, intents: &[Oversized], verdict: Risky,
        rationale: "A boxy top adds width at the waist", alternative: Some("a fitted or wrap top") },
    ShapeRule { shape: BodyShape::Hourglass, category: LowerBody, intents: FITTED, verdict: Flattering,
        rationale: "Fitted bottoms trace your curves", alternative: None },
    ShapeRule { shape: BodyShape::Hourglass, category: LowerBody, intents: EASY, verdict: Fine,
        rationale: "Roomy bottoms work when paired with a fitted top", alternative: None },

    // Pear
    ShapeRule { shape: BodyShape::Pear, category: UpperBody, intents: MIDDLE, verdict: Flattering,
        rationale: "Adds visual width at the shoulders to balance your hips", alternative: None },
    ShapeRule { shape: BodyShape::Pear, category: UpperBody, intents: &[Snug], verdict: Fine,
        rationale: "A snug top draws the eye up; keep the hem above the hips", alternative: None },
    ShapeRule { shape: BodyShape::Pear, category: UpperBody, intents: &[Oversized], verdict: Risky,
        rationale: "An oversized hem lands at your widest point", alternative: Some("a cropped or tucked top") },
    ShapeRule { shape: BodyShape::Pear, category: LowerBody, intents: &[Snug], verdict: Risky,
        rationale: "Skin-tight bottoms emphasize the hips", alternative: Some("straight or bootcut legs in a dark shade") },
    ShapeRule { shape: BodyShape::Pear, category: LowerBody, intents: MIDDLE, verdict: Flattering,
        rationale: "A straight or wide leg balances the hips", alternative: None },
    ShapeRule { shape: BodyShape::Pear, category: Dresses, intents: MIDDLE, verdict: Flattering,
        rationale: "A skirt that skims the hips balances your frame", alternative: None },
    ShapeRule { shape: BodyShape::Pear, category: Dresses, intents: &[Snug], verdict: Risky,
        rationale: "A body-skimming dress puts the focus on the hips", alternative: Some("an A-line or fit-and-flare dress") },

    // Apple
    ShapeRule { shape: BodyShape::Apple, category: UpperBody, intents: &[Snug], verdict: Risky,
        rationale: "A clingy top highlights the midsection", alternative: Some("an empire-line or gently draped top") },
    ShapeRule { shape: BodyShape::Apple, category: UpperBody, intents: MIDDLE, verdict: Flattering,
        rationale: "Skims the midsection without clinging", alternative: None },
    ShapeRule { shape: BodyShape::Apple, category: LowerBody, intents: &[Snug], verdict: Fine,
        rationale: "Slim legs show off your legs; pair them with a longer top", alternative: None },
    ShapeRule { shape: BodyShape::Apple, category: LowerBody, intents: MIDDLE, verdict: Fine,
        rationale: "A comfortable waistband sits well on your frame", alternative: None },
    ShapeRule { shape: BodyShape::Apple, category: Dresses, intents: &[Snug], verdict: Risky,
        rationale: "A bodycon cut clings at the waist", alternative: Some("an empire-waist or shift dress") },
    ShapeRule { shape: BodyShape::Apple, category: Dresses, intents: MIDDLE, verdict: Flattering,
        rationale: "Flows past the midsection", alternative: None },

    // Rectangle
    ShapeRule { shape: BodyShape::Rectangle, category: UpperBody, intents: EASY, verdict: Flattering,
        rationale: "A straight frame carries relaxed and boxy shapes well", alternative: None },
    ShapeRule { shape: BodyShape::Rectangle, category: UpperBody, intents: FITTED, verdict: Fine,
        rationale: "A fitted top works; details at the waist add shape", alternative: None },
    ShapeRule { shape: BodyShape::Rectangle, category: Dresses, intents: FITTED, verdict: Fine,
        rationale: "Choose a belted or peplum style to create curves", alternative: Some("a belted shirt dress") },
    ShapeRule { shape: BodyShape::Rectangle, category: Dresses, intents: &[Relaxed], verdict: Flattering,
        rationale: "An easy silhouette suits a straight frame", alternative: None },

    // Inverted triangle
    ShapeRule { shape: BodyShape::InvertedTriangle, category: UpperBody, intents: &[Oversized], verdict: Risky,
        rationale: "A boxy top widens the shoulders further", alternative: Some("a V-neck or raglan-sleeve top") },
    ShapeRule { shape: BodyShape::InvertedTriangle, category: UpperBody, intents: &[Snug, Regular, Relaxed], verdict: Fine,
        rationale: "Keep the shoulders simple and let the neckline do the work", alternative: None },
    ShapeRule { shape: BodyShape::InvertedTriangle, category: LowerBody, intents: EASY, verdict: Flattering,
        rationale: "Volume below balances broader shoulders", alternative: None },
    ShapeRule { shape: BodyShape::InvertedTriangle, category: LowerBody, intents: &[Snug], verdict: Risky,
        rationale: "Skinny legs exaggerate the shoulder-to-hip contrast", alternative: Some("wide-leg or bootcut trousers") },
    ShapeRule { shape: BodyShape::InvertedTriangle, category: Dresses, intents: MIDDLE, verdict: Flattering,
        rationale: "A flared skirt balances the shoulders", alternative: None },
];

fn find_rule(shape: BodyShape, category: GarmentCategory, intent: FitIntent) -> Option<&'static ShapeRule> {
    RULES
        .iter()
        .find(|r| r.shape == shape && r.category == category && r.intents.contains(&intent))
}

/// Assess a cut against the user's body shape
///
/// `declared_shape` is free text from the profile; when it is absent or
/// unreadable the shape is inferred from `body`.
pub fn body_shape_suitability(
    declared_shape: Option<&str>,
    body: &BodyMeasurementSet,
    category: Option<GarmentCategory>,
    intent: FitIntent,
) -> BodyShapeSuitability {
    let declared = declared_shape.and_then(BodyShape::parse);
    let (shape, inferred) = match declared {
        Some(shape) => (Some(shape), false),
        None => (infer_body_shape(body.chest, body.waist, body.hips), true),
    };

    let (Some(shape), Some(category)) = (shape, category) else {
        let mut bullets = Vec::new();
        if shape.is_none() {
            bullets.push("Add your body shape, or bust, waist and hip measurements, for cut advice".to_string());
        }
        if category.is_none() {
            bullets.push("The garment category is unknown".to_string());
        }
        return BodyShapeSuitability {
            status: AssessmentStatus::InsufficientData,
            verdict: BodyShapeVerdict::Neutral,
            body_shape: shape,
            inferred: inferred && shape.is_some(),
            summary: String::new(),
            bullets,
            alternative: None,
        };
    };

    let mut bullets = Vec::with_capacity(3);
    if inferred {
        bullets.push(format!("Body shape estimated from your measurements: {}", shape));
    }

    let (verdict, alternative) = match find_rule(shape, category, intent) {
        Some(rule) => {
            bullets.push(rule.rationale.to_string());
            if let Some(alt) = rule.alternative {
                bullets.push(format!("Consider {} instead", alt));
            }
            (rule.verdict, rule.alternative.map(str::to_string))
        }
        None => {
            bullets.push(format!(
                "A {} {} is a versatile choice for a {} shape",
                intent,
                category.display_text(),
                shape
            ));
            (BodyShapeVerdict::Neutral, None)
        }
    };

    let summary = format!("{} for your {} shape.", verdict.display_text(), shape);

    BodyShapeSuitability {
        status: AssessmentStatus::Ok,
        verdict,
        body_shape: Some(shape),
        inferred,
        summary,
        bullets,
        alternative,
    }
}
