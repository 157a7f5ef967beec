//! Risk and confidence for the winning size

use serde::{Deserialize, Serialize};

use super::scorer::SizeScore;
use crate::config::FitConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn display_text(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low fit risk",
            RiskLevel::Medium => "Some fit risk",
            RiskLevel::High => "High fit risk",
        }
    }
}

/// High if any zone is too tight, medium below the aggregate floor
pub fn assess_risk(best: &SizeScore, config: &FitConfig) -> RiskLevel {
    if best.is_too_tight() {
        RiskLevel::High
    } else if best.aggregate_score < config.risk_floor {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Percentage of the best possible score, capped by risk tier
pub fn confidence(best: &SizeScore, risk: RiskLevel, config: &FitConfig) -> u8 {
    let raw = (best.aggregate_score / config.max_zone_score() * 100.0)
        .round()
        .clamp(0.0, 100.0) as u8;

    match risk {
        RiskLevel::High => raw.min(config.high_risk_confidence_cap),
        RiskLevel::Medium => raw.min(config.medium_risk_confidence_cap),
        RiskLevel::Low => raw,
    }
}

/// Pick the fallback size from a ranked candidate list
///
/// High risk prefers the next larger size in chart order, otherwise the
/// score runner-up; either falls back to the other choice. The last
/// resort is the previous chart entry.
pub fn backup_size<'a>(ranked: &'a [SizeScore], risk: RiskLevel) -> Option<&'a SizeScore> {
    let best = ranked.first()?;

    let next_larger = ranked
        .iter()
        .filter(|s| s.chart_index > best.chart_index)
        .min_by_key(|s| s.chart_index);
    let runner_up = ranked.get(1);
    let previous = ranked
        .iter()
        .filter(|s| s.chart_index < best.chart_index)
        .max_by_key(|s| s.chart_index);

    let preferred = match risk {
        RiskLevel::High => next_larger.or(runner_up),
        RiskLevel::Medium | RiskLevel::Low => runner_up.or(next_larger),
    };
    preferred.or(previous)
}
