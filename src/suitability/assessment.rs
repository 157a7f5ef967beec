//! Suitability Assessment Types
//!
//! Output structures for the color and body-shape assessments.

use serde::{Deserialize, Serialize};

use super::body_shape::BodyShape;
use crate::color::{ClassificationResult, NamedColorMatch};

/// Whether an assessment had enough input to say anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Ok,
    InsufficientData,
}

/// How well a garment color suits the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorVerdict {
    /// In the user's own season and group
    Great,
    /// In the user's season, or a matching group of the sibling season
    Good,
    /// Wearable with care
    Ok,
    /// Works against the user's coloring
    Risky,
    /// Season or color missing
    InsufficientData,
}

impl ColorVerdict {
    pub fn display_text(&self) -> &'static str {
        match self {
            ColorVerdict::Great => "Great match",
            ColorVerdict::Good => "Good match",
            ColorVerdict::Ok => "Works with care",
            ColorVerdict::Risky => "Risky color",
            ColorVerdict::InsufficientData => "Not enough information",
        }
    }
}

/// How well a cut suits the user's body shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyShapeVerdict {
    Flattering,
    Ok,
    Neutral,
    Risky,
}

impl BodyShapeVerdict {
    pub fn display_text(&self) -> &'static str {
        match self {
            BodyShapeVerdict::Flattering => "Flattering cut",
            BodyShapeVerdict::Ok => "Works for your shape",
            BodyShapeVerdict::Neutral => "Versatile cut",
            BodyShapeVerdict::Risky => "Tricky cut",
        }
    }
}

/// Color assessment with its diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSuitability {
    pub status: AssessmentStatus,
    pub verdict: ColorVerdict,
    pub summary: String,
    pub bullets: Vec<String>,
    pub classification: Option<ClassificationResult>,
    pub color_name: Option<NamedColorMatch>,
}

/// Body-shape assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyShapeSuitability {
    pub status: AssessmentStatus,
    pub verdict: BodyShapeVerdict,
    pub body_shape: Option<BodyShape>,
    /// Shape was derived from measurements rather than given
    pub inferred: bool,
    pub summary: String,
    pub bullets: Vec<String>,
    /// A style that would suit better, when the verdict is weak
    pub alternative: Option<String>,
}

/// Color and body-shape verdicts together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuitabilityVerdict {
    pub color_verdict: Option<ColorSuitability>,
    pub body_shape_verdict: Option<BodyShapeSuitability>,
    pub summary: String,
}

impl SuitabilityVerdict {
    /// Join whichever verdicts are present into one summary line
    pub fn new(
        color_verdict: Option<ColorSuitability>,
        body_shape_verdict: Option<BodyShapeSuitability>,
    ) -> Self {
        let parts: Vec<&str> = color_verdict
            .iter()
            .map(|c| c.summary.as_str())
            .chain(body_shape_verdict.iter().map(|b| b.summary.as_str()))
            .filter(|s| !s.is_empty())
            .collect();

        let summary = parts.join(" ");
        Self { color_verdict, body_shape_verdict, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(summary: &str) -> ColorSuitability {
        ColorSuitability {
            status: AssessmentStatus::Ok,
            verdict: ColorVerdict::Good,
            summary: summary.to_string(),
            bullets: Vec::new(),
            classification: None,
            color_name: None,
        }
    }

    fn shape(summary: &str) -> BodyShapeSuitability {
        BodyShapeSuitability {
            status: AssessmentStatus::Ok,
            verdict: BodyShapeVerdict::Neutral,
            body_shape: None,
            inferred: false,
            summary: summary.to_string(),
            bullets: Vec::new(),
            alternative: None,
        }
    }

    #[test]
    fn test_summary_joins_present_parts() {
        let both = SuitabilityVerdict::new(Some(color("Good color.")), Some(shape("Versatile cut.")));
        assert_eq!(both.summary, "Good color. Versatile cut.");

        let only_shape = SuitabilityVerdict::new(None, Some(shape("Versatile cut.")));
        assert_eq!(only_shape.summary, "Versatile cut.");

        let none = SuitabilityVerdict::new(None, None);
        assert_eq!(none.summary, "");
    }

    #[test]
    fn test_verdict_ordering() {
        assert!(ColorVerdict::Great < ColorVerdict::Risky);
        assert!(BodyShapeVerdict::Flattering < BodyShapeVerdict::Risky);
    }
}
