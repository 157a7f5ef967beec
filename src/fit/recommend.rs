//! Size recommendation pipeline
//!
//! Required-field check → ease profile → score every usable chart row →
//! rank → risk, confidence and backup → insights.
//!
//! The pipeline never guesses. When the user or the chart lacks a field the
//! category needs, the result is `INSUFFICIENT_DATA` with every missing
//! field named.

use serde::{Deserialize, Serialize};

use super::ease::{ease_profile, EaseProfile};
use super::normalization::format_inches;
use super::risk::{assess_risk, backup_size, confidence, RiskLevel};
use super::scorer::{rank_sizes, required_chart_zones, required_user_zones, score_size, SizeScore};
use super::types::{BodyMeasurementSet, FabricStretch, FitIntent, GarmentCategory, GarmentSizeRow};
use crate::config::FitConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FitStatus {
    Ok,
    InsufficientData,
}

/// Everything the scorer needs about a garment, already normalized
#[derive(Debug, Clone, PartialEq)]
pub struct FitRequest {
    pub category: Option<GarmentCategory>,
    pub intent: FitIntent,
    pub stretch: FabricStretch,
    pub chart: Vec<GarmentSizeRow>,
}

/// Size recommendation
///
/// Without enough data, `risk` is `high` and `confidence` is 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitRecommendation {
    pub status: FitStatus,
    pub recommended_size: Option<String>,
    pub backup_size: Option<String>,
    pub risk: RiskLevel,
    pub confidence: u8,
    pub fit_intent: FitIntent,
    pub insights: Vec<String>,
    pub missing: Vec<String>,
    /// Every scored size, best first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ranking: Vec<SizeScore>,
}

impl FitRecommendation {
    pub fn is_ok(&self) -> bool {
        self.status == FitStatus::Ok
    }

    fn insufficient(intent: FitIntent, missing: Vec<String>, insights: Vec<String>) -> Self {
        Self {
            status: FitStatus::InsufficientData,
            recommended_size: None,
            backup_size: None,
            risk: RiskLevel::High,
            confidence: 0,
            fit_intent: intent,
            insights,
            missing,
            ranking: Vec::new(),
        }
    }
}

/// Rows carrying every required chart zone, with their chart positions
fn usable_rows<'a>(
    category: GarmentCategory,
    chart: &'a [GarmentSizeRow],
    insights: &mut Vec<String>,
    missing: &mut Vec<String>,
) -> Vec<(usize, &'a GarmentSizeRow)> {
    let required = required_chart_zones(category);
    let mut usable = Vec::with_capacity(chart.len());
    let mut absent = Vec::new();

    for (index, row) in chart.iter().enumerate() {
        let lacking: Vec<&str> = required
            .iter()
            .filter(|z| row.measurements.get(**z).is_none())
            .map(|z| z.field_name(category))
            .collect();

        if lacking.is_empty() {
            usable.push((index, row));
            continue;
        }

        tracing::warn!("Skipping size '{}': chart row lacks {}", row.size_label, lacking.join(", "));
        insights.push(format!(
            "Size {} was skipped because the chart has no {} measurement for it",
            row.size_label,
            lacking.join(" or ")
        ));
        for key in lacking {
            if !absent.contains(&key) {
                absent.push(key);
            }
        }
    }

    if usable.is_empty() {
        // Keep category order in the report
        for zone in &required {
            let name = zone.field_name(category);
            if absent.contains(&name) {
                missing.push(format!("sizeChart.{}", name));
            }
        }
    }

    usable
}

/// Recommend a size for one body and one garment
pub fn recommend_size(body: &BodyMeasurementSet, request: &FitRequest, config: &FitConfig) -> FitRecommendation {
    let intent = request.intent;
    let mut missing = Vec::new();
    let mut insights = Vec::new();

    if request.category.is_none() {
        missing.push("category".to_string());
    }
    if request.chart.is_empty() {
        missing.push("sizeChart".to_string());
    }

    let Some(category) = request.category else {
        return FitRecommendation::insufficient(intent, missing, insights);
    };

    for zone in required_user_zones(category) {
        if body.get(zone).is_none() {
            missing.push(zone.field_name(category).to_string());
            insights.push(format!(
                "Add your {} measurement to get a size recommendation",
                zone.label(category).to_lowercase()
            ));
        }
    }

    let rows = usable_rows(category, &request.chart, &mut insights, &mut missing);

    if !missing.is_empty() {
        tracing::debug!("Insufficient fit data, missing: {:?}", missing);
        return FitRecommendation::insufficient(intent, missing, insights);
    }

    let profile = ease_profile(category, intent, request.stretch);
    let mut ranking: Vec<SizeScore> = rows
        .into_iter()
        .filter_map(|(index, row)| score_size(row, index, body, &profile, config))
        .collect();
    rank_sizes(&mut ranking);

    let Some(best) = ranking.first() else {
        // Required zones are present on both sides, so every usable row scores
        return FitRecommendation::insufficient(intent, vec!["sizeChart".to_string()], insights);
    };

    let risk = assess_risk(best, config);
    let score_confidence = confidence(best, risk, config);
    let backup = backup_size(&ranking, risk);

    tracing::debug!(
        "Recommended {} ({:.2}, risk {:?}, confidence {}) out of {} sizes",
        best.size_label,
        best.aggregate_score,
        risk,
        score_confidence,
        ranking.len()
    );

    let mut all_insights = fit_insights(best, backup, ranking.get(1), risk, &profile, config);
    all_insights.extend(insights);
    let recommended_size = Some(best.size_label.clone());
    let backup_size = backup.map(|s| s.size_label.clone());

    FitRecommendation {
        status: FitStatus::Ok,
        recommended_size,
        backup_size,
        risk,
        confidence: score_confidence,
        fit_intent: intent,
        insights: all_insights,
        missing,
        ranking,
    }
}

fn fit_insights(
    best: &SizeScore,
    backup: Option<&SizeScore>,
    runner_up: Option<&SizeScore>,
    risk: RiskLevel,
    profile: &EaseProfile,
    config: &FitConfig,
) -> Vec<String> {
    let category = profile.category;
    let mut insights = Vec::with_capacity(best.breakdown.len() + 3);

    let stretch_note = if profile.stretch.is_stretch() { " in a stretch fabric" } else { "" };
    insights.push(format!(
        "Size {} is the best {} for a {} fit{}",
        best.size_label,
        category.display_text(),
        profile.intent,
        stretch_note
    ));

    for zone in &best.breakdown {
        let label = zone.zone.label(category);
        let line = if zone.is_too_tight() {
            format!(
                "{} is {} smaller than your body in size {}",
                label,
                format_inches(-zone.ease),
                best.size_label
            )
        } else {
            let off_target = zone.garment - zone.target;
            if off_target.abs() <= config.band_edges[0] {
                format!(
                    "{} fits as intended ({} garment on {} body)",
                    label,
                    format_inches(zone.garment),
                    format_inches(zone.body)
                )
            } else if off_target > 0.0 {
                format!("{} runs {} roomier than a {} fit", label, format_inches(off_target), profile.intent)
            } else {
                format!("{} is {} closer than a {} fit", label, format_inches(-off_target), profile.intent)
            }
        };
        insights.push(line);
    }

    if let Some(runner) = runner_up {
        if best.aggregate_score - runner.aggregate_score < config.close_call_margin {
            insights.push(format!(
                "You are between sizes {} and {}",
                best.size_label, runner.size_label
            ));
        }
    }

    match (risk, backup) {
        (RiskLevel::High, Some(b)) => insights.push(format!(
            "No size clears every measurement; size {} gives more room",
            b.size_label
        )),
        (RiskLevel::High, None) => {
            insights.push("No size in this chart clears every measurement".to_string())
        }
        (RiskLevel::Medium, _) => {
            insights.push("Even the closest size is a compromise on fit".to_string())
        }
        (RiskLevel::Low, _) => {}
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::types::{GarmentMeasurements, Zone};
    use approx::assert_relative_eq;

    fn chest_row(label: &str, chest: f64) -> GarmentSizeRow {
        GarmentSizeRow {
            size_label: label.to_string(),
            measurements: GarmentMeasurements { chest: Some(chest), ..Default::default() },
        }
    }

    fn top_request(chart: Vec<GarmentSizeRow>) -> FitRequest {
        FitRequest {
            category: Some(GarmentCategory::UpperBody),
            intent: FitIntent::Regular,
            stretch: FabricStretch::None,
            chart,
        }
    }

    fn body_chest(chest: f64) -> BodyMeasurementSet {
        BodyMeasurementSet { chest: Some(chest), ..Default::default() }
    }

    #[test]
    fn test_exact_target_is_recommended() {
        // Regular tops carry 4" chest ease
        let request = top_request(vec![chest_row("S", 40.0), chest_row("M", 44.0), chest_row("L", 48.0)]);
        let rec = recommend_size(&body_chest(40.0), &request, &FitConfig::default());

        assert_eq!(rec.status, FitStatus::Ok);
        assert_eq!(rec.recommended_size.as_deref(), Some("M"));
        assert_eq!(rec.risk, RiskLevel::Low);
        assert_eq!(rec.confidence, 100);
        assert_relative_eq!(rec.ranking[0].aggregate_score, 6.0, epsilon = 1e-9);
        assert!(rec.missing.is_empty());
    }

    #[test]
    fn test_only_small_size_is_high_risk() {
        let request = top_request(vec![chest_row("S", 38.0)]);
        let rec = recommend_size(&body_chest(40.0), &request, &FitConfig::default());

        assert_eq!(rec.status, FitStatus::Ok);
        assert_eq!(rec.risk, RiskLevel::High);
        assert!(rec.confidence <= 45);
        assert!(rec.ranking[0].aggregate_score < -10.0);
        assert_eq!(rec.ranking[0].too_tight, vec![Zone::Chest]);
    }

    #[test]
    fn test_high_risk_backup_falls_back_to_runner_up() {
        let request = top_request(vec![chest_row("XS", 36.0), chest_row("S", 38.0), chest_row("M", 39.0)]);
        let rec = recommend_size(&body_chest(40.0), &request, &FitConfig::default());
        // M is least tight and also the largest; no larger entry, so runner-up S
        assert_eq!(rec.recommended_size.as_deref(), Some("M"));
        assert_eq!(rec.backup_size.as_deref(), Some("S"));
    }

    #[test]
    fn test_empty_chart() {
        let rec = recommend_size(&body_chest(40.0), &top_request(Vec::new()), &FitConfig::default());
        assert_eq!(rec.status, FitStatus::InsufficientData);
        assert_eq!(rec.missing, vec!["sizeChart".to_string()]);
        assert!(rec.recommended_size.is_none());
    }

    #[test]
    fn test_missing_category_and_body() {
        let request = FitRequest {
            category: None,
            intent: FitIntent::Regular,
            stretch: FabricStretch::None,
            chart: Vec::new(),
        };
        let rec = recommend_size(&BodyMeasurementSet::default(), &request, &FitConfig::default());
        assert_eq!(rec.missing, vec!["category".to_string(), "sizeChart".to_string()]);

        let rec = recommend_size(
            &BodyMeasurementSet::default(),
            &top_request(vec![chest_row("M", 44.0)]),
            &FitConfig::default(),
        );
        assert_eq!(rec.missing, vec!["chest".to_string()]);
    }

    #[test]
    fn test_rows_without_required_field_are_skipped() {
        let mut no_chest = chest_row("XS", 0.0);
        no_chest.measurements.chest = None;
        let request = top_request(vec![no_chest.clone(), chest_row("M", 44.0)]);
        let rec = recommend_size(&body_chest(40.0), &request, &FitConfig::default());
        assert_eq!(rec.status, FitStatus::Ok);
        assert_eq!(rec.ranking.len(), 1);
        assert!(rec.insights.iter().any(|i| i.contains("Size XS was skipped")));

        let rec = recommend_size(&body_chest(40.0), &top_request(vec![no_chest]), &FitConfig::default());
        assert_eq!(rec.status, FitStatus::InsufficientData);
        assert_eq!(rec.missing, vec!["sizeChart.chest".to_string()]);
    }

    #[test]
    fn test_dress_needs_three_measurements() {
        let request = FitRequest {
            category: Some(GarmentCategory::Dresses),
            intent: FitIntent::Regular,
            stretch: FabricStretch::None,
            chart: vec![chest_row("M", 39.0)],
        };
        let rec = recommend_size(&body_chest(36.0), &request, &FitConfig::default());
        assert_eq!(rec.status, FitStatus::InsufficientData);
        assert_eq!(
            rec.missing,
            vec!["waist".to_string(), "hips".to_string(), "sizeChart.waist".to_string(), "sizeChart.hips".to_string()]
        );
    }

    #[test]
    fn test_dress_reports_bust_not_chest() {
        let request = FitRequest {
            category: Some(GarmentCategory::Dresses),
            intent: FitIntent::Regular,
            stretch: FabricStretch::None,
            chart: vec![GarmentSizeRow {
                size_label: "M".to_string(),
                measurements: GarmentMeasurements {
                    waist: Some(30.0),
                    hips: Some(41.0),
                    ..Default::default()
                },
            }],
        };
        let body = BodyMeasurementSet { waist: Some(28.0), hips: Some(38.0), ..Default::default() };
        let rec = recommend_size(&body, &request, &FitConfig::default());

        assert_eq!(rec.status, FitStatus::InsufficientData);
        assert_eq!(rec.missing, vec!["bust".to_string(), "sizeChart.bust".to_string()]);
        assert!(rec.insights.iter().any(|i| i.contains("bust measurement")));
        assert!(rec.insights.iter().any(|i| i.contains("no bust measurement")));
    }
}
