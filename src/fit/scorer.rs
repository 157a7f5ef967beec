//! Size Scorer - per-zone and aggregate scoring of size-chart candidates
//!
//! Each zone compares the garment measurement to the body:
//!
//! - ease < 0 (garment smaller than body): `-(hard_penalty + slope·|ease|)`,
//!   unbounded below and strictly worse the tighter it gets
//! - ease ≥ 0: banded on distance from the target (body + profile ease),
//!   best band first
//!
//! The aggregate is the weighted mean over the zones that could actually be
//! scored, so a chart without sleeve lengths is not punished for it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ease::EaseProfile;
use super::types::{BodyMeasurementSet, GarmentCategory, GarmentSizeRow, Zone, ZoneList};
use crate::config::FitConfig;

/// Construction-priority weight of a zone within a category
pub fn zone_weight(category: GarmentCategory, zone: Zone) -> f64 {
    match (category, zone) {
        (GarmentCategory::UpperBody, Zone::Chest) => 0.45,
        (GarmentCategory::UpperBody, Zone::Shoulder) => 0.25,
        (GarmentCategory::UpperBody, Zone::Sleeve) => 0.15,
        (GarmentCategory::UpperBody, Zone::Length) => 0.15,

        (GarmentCategory::LowerBody, Zone::Waist) => 0.40,
        (GarmentCategory::LowerBody, Zone::Hips) => 0.30,
        (GarmentCategory::LowerBody, Zone::Inseam) => 0.20,
        (GarmentCategory::LowerBody, Zone::Rise) => 0.10,

        (GarmentCategory::Dresses, Zone::Chest) => 0.30,
        (GarmentCategory::Dresses, Zone::Waist) => 0.30,
        (GarmentCategory::Dresses, Zone::Hips) => 0.30,
        (GarmentCategory::Dresses, Zone::Length) => 0.10,

        _ => 0.0,
    }
}

/// User measurements a category cannot be scored without
pub fn required_user_zones(category: GarmentCategory) -> ZoneList {
    match category {
        GarmentCategory::UpperBody => SmallVec::from_slice(&[Zone::Chest]),
        GarmentCategory::LowerBody => SmallVec::from_slice(&[Zone::Waist]),
        GarmentCategory::Dresses => SmallVec::from_slice(&[Zone::Chest, Zone::Waist, Zone::Hips]),
    }
}

/// Chart measurements every scored row must carry
pub fn required_chart_zones(category: GarmentCategory) -> ZoneList {
    // Same zones on both sides today
    required_user_zones(category)
}

/// Score one zone
pub fn score_metric(garment: f64, target: f64, body: f64, config: &FitConfig) -> f64 {
    let ease = garment - body;
    if ease < 0.0 {
        return -(config.hard_penalty + config.tightness_slope * ease.abs());
    }

    let distance = (garment - target).abs();
    let [edge_1, edge_2, edge_3] = config.band_edges;
    let [s1, s2, s3, s4] = config.band_scores;
    if distance <= edge_1 {
        s1
    } else if distance <= edge_2 {
        s2
    } else if distance <= edge_3 {
        s3
    } else {
        s4
    }
}

/// Scored zone with the numbers that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneScore {
    pub zone: Zone,
    pub garment: f64,
    pub body: f64,
    pub target: f64,
    /// garment − body
    pub ease: f64,
    pub score: f64,
    pub weight: f64,
}

impl ZoneScore {
    pub fn is_too_tight(&self) -> bool {
        self.ease < 0.0
    }
}

/// One candidate size after scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeScore {
    pub size_label: String,
    /// Position in the original chart
    pub chart_index: usize,
    pub aggregate_score: f64,
    pub breakdown: Vec<ZoneScore>,
    pub too_tight: Vec<Zone>,
}

impl SizeScore {
    pub fn is_too_tight(&self) -> bool {
        !self.too_tight.is_empty()
    }

    pub fn zone(&self, zone: Zone) -> Option<&ZoneScore> {
        self.breakdown.iter().find(|z| z.zone == zone)
    }
}

/// Score a chart row; `None` when no zone has both a body and garment value
pub fn score_size(
    row: &GarmentSizeRow,
    chart_index: usize,
    body: &BodyMeasurementSet,
    profile: &EaseProfile,
    config: &FitConfig,
) -> Option<SizeScore> {
    let mut breakdown = Vec::with_capacity(profile.zones.len());

    for zone_ease in &profile.zones {
        let zone = zone_ease.zone;
        let (Some(garment), Some(body_value)) = (row.measurements.get(zone), body.get(zone)) else {
            continue;
        };
        let target = body_value + zone_ease.ease;
        breakdown.push(ZoneScore {
            zone,
            garment,
            body: body_value,
            target,
            ease: garment - body_value,
            score: score_metric(garment, target, body_value, config),
            weight: zone_weight(profile.category, zone),
        });
    }

    let total_weight: f64 = breakdown.iter().map(|z| z.weight).sum();
    if breakdown.is_empty() || total_weight <= 0.0 {
        return None;
    }

    let aggregate_score = breakdown.iter().map(|z| z.score * z.weight).sum::<f64>() / total_weight;
    let too_tight = breakdown.iter().filter(|z| z.is_too_tight()).map(|z| z.zone).collect();

    Some(SizeScore {
        size_label: row.size_label.clone(),
        chart_index,
        aggregate_score,
        breakdown,
        too_tight,
    })
}

/// Order candidates best first; equal aggregates keep chart order
pub fn rank_sizes(scores: &mut [SizeScore]) {
    scores.sort_by(|a, b| {
        b.aggregate_score
            .total_cmp(&a.aggregate_score)
            .then(a.chart_index.cmp(&b.chart_index))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::ease::ease_profile;
    use crate::fit::types::{FabricStretch, FitIntent, GarmentMeasurements};
    use approx::assert_relative_eq;

    fn row(label: &str, chest: f64) -> GarmentSizeRow {
        GarmentSizeRow {
            size_label: label.to_string(),
            measurements: GarmentMeasurements { chest: Some(chest), ..Default::default() },
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        for category in [GarmentCategory::UpperBody, GarmentCategory::LowerBody, GarmentCategory::Dresses] {
            let sum: f64 = category.zones().iter().map(|&z| zone_weight(category, z)).sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_tightness_penalty() {
        let config = FitConfig::default();
        // 2" too small: -(10 + 1.5·2)
        assert_relative_eq!(score_metric(38.0, 44.0, 40.0, &config), -13.0);
        // Tighter is strictly worse
        assert!(score_metric(36.0, 44.0, 40.0, &config) < score_metric(38.0, 44.0, 40.0, &config));
        // Any negative ease is below every looseness band
        assert!(score_metric(39.99, 44.0, 40.0, &config) < 0.0);
    }

    #[test]
    fn test_looseness_bands() {
        let config = FitConfig::default();
        assert_eq!(score_metric(44.0, 44.0, 40.0, &config), 6.0);
        assert_eq!(score_metric(46.0, 44.0, 40.0, &config), 6.0);
        assert_eq!(score_metric(49.0, 44.0, 40.0, &config), 4.0);
        assert_eq!(score_metric(53.0, 44.0, 40.0, &config), 2.0);
        assert_eq!(score_metric(60.0, 44.0, 40.0, &config), 1.0);
        // Under target but not under body still uses the band
        assert_eq!(score_metric(41.0, 44.0, 40.0, &config), 4.0);
    }

    #[test]
    fn test_aggregate_normalizes_by_scored_weights() {
        let config = FitConfig::default();
        let profile = ease_profile(GarmentCategory::UpperBody, FitIntent::Regular, FabricStretch::None);
        let body = BodyMeasurementSet { chest: Some(40.0), ..Default::default() };

        // Only the chest is measurable; a perfect chest is a perfect aggregate
        let score = score_size(&row("M", 44.0), 0, &body, &profile, &config).unwrap();
        assert_eq!(score.breakdown.len(), 1);
        assert_relative_eq!(score.aggregate_score, 6.0);
        assert!(!score.is_too_tight());
    }

    #[test]
    fn test_unscorable_row() {
        let config = FitConfig::default();
        let profile = ease_profile(GarmentCategory::UpperBody, FitIntent::Regular, FabricStretch::None);
        let body = BodyMeasurementSet { waist: Some(30.0), ..Default::default() };
        assert!(score_size(&row("M", 44.0), 0, &body, &profile, &config).is_none());
    }

    #[test]
    fn test_too_tight_flag() {
        let config = FitConfig::default();
        let profile = ease_profile(GarmentCategory::UpperBody, FitIntent::Regular, FabricStretch::None);
        let body = BodyMeasurementSet { chest: Some(40.0), ..Default::default() };
        let score = score_size(&row("S", 38.0), 0, &body, &profile, &config).unwrap();
        assert_eq!(score.too_tight, vec![Zone::Chest]);
        assert_relative_eq!(score.aggregate_score, -13.0);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let config = FitConfig::default();
        let profile = ease_profile(GarmentCategory::UpperBody, FitIntent::Regular, FabricStretch::None);
        let body = BodyMeasurementSet { chest: Some(40.0), ..Default::default() };

        let chart = [row("A", 45.0), row("B", 44.0), row("C", 38.0), row("D", 43.0)];
        let mut scores: Vec<SizeScore> = chart
            .iter()
            .enumerate()
            .filter_map(|(i, r)| score_size(r, i, &body, &profile, &config))
            .collect();
        rank_sizes(&mut scores);

        let labels: Vec<&str> = scores.iter().map(|s| s.size_label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "D", "C"]);
    }
}
