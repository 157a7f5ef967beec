//! Palette Classifier
//!
//! Nearest-neighbor lookup of a garment color against the seasonal palette,
//! gated twice:
//!
//! 1. `unclassified` when even the best swatch is farther than the
//!    unclassified threshold (the color belongs to no season)
//! 2. `ambiguous` when the best swatch from a *different* (season, group)
//!    cell is within the ambiguity threshold of the best match
//!
//! The runner-up deliberately skips swatches from the best match's own cell:
//! two near-identical corals in Spring/Bright are not an ambiguity, a coral
//! sitting between Spring/Bright and Autumn/Bright is.
//!
//! The nearest swatch and its ΔE are always reported for diagnostics.

use serde::{Deserialize, Serialize};

use super::conversion::{delta_e_76, hex_to_rgb, rgb_to_hex, rgb_to_lab, LabColor};
use super::palette::{PaletteCatalog, PaletteColor, PaletteGroup, Season};
use crate::config::ColorConfig;

/// Gating outcome of a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationStatus {
    Ok,
    Unclassified,
    Ambiguous,
}

impl ClassificationStatus {
    pub fn display_text(&self) -> &'static str {
        match self {
            ClassificationStatus::Ok => "Classified",
            ClassificationStatus::Unclassified => "Outside all palettes",
            ClassificationStatus::Ambiguous => "Between palettes",
        }
    }
}

/// One palette candidate with its distance from the input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteMatch {
    pub color: PaletteColor,
    pub delta_e: f64,
}

/// Result of classifying one color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub status: ClassificationStatus,
    /// Set only when `status == Ok`
    pub season: Option<Season>,
    /// Set only when `status == Ok`
    pub group: Option<PaletteGroup>,
    /// Normalized input hex (the raw input when it could not be parsed)
    pub dominant_hex: String,
    pub lab: Option<LabColor>,
    pub nearest_palette_color: Option<PaletteColor>,
    pub min_delta_e: Option<f64>,
    /// Best swatch from a different (season, group) cell
    pub runner_up: Option<PaletteMatch>,
}

impl ClassificationResult {
    pub fn is_ok(&self) -> bool {
        self.status == ClassificationStatus::Ok
    }

    /// ΔE gap between runner-up and best match
    pub fn margin(&self) -> Option<f64> {
        match (self.min_delta_e, &self.runner_up) {
            (Some(best), Some(runner)) => Some(runner.delta_e - best),
            _ => None,
        }
    }

    /// Seasons of the best match and runner-up, best first
    pub fn candidate_seasons(&self) -> Vec<Season> {
        let mut seasons = Vec::with_capacity(2);
        if let Some(best) = &self.nearest_palette_color {
            seasons.push(best.season);
        }
        if let Some(runner) = &self.runner_up {
            if !seasons.contains(&runner.color.season) {
                seasons.push(runner.color.season);
            }
        }
        seasons
    }
}

/// Classifier over a borrowed, precomputed catalog
#[derive(Debug, Clone, Copy)]
pub struct PaletteClassifier<'a> {
    catalog: &'a PaletteCatalog,
    unclassified_threshold: f64,
    ambiguity_threshold: f64,
}

impl<'a> PaletteClassifier<'a> {
    pub fn new(catalog: &'a PaletteCatalog, config: &ColorConfig) -> Self {
        Self {
            catalog,
            unclassified_threshold: config.unclassified_threshold,
            ambiguity_threshold: config.ambiguity_threshold,
        }
    }

    /// Classify a hex color; malformed input yields `Unclassified`
    pub fn classify(&self, hex: &str) -> ClassificationResult {
        match hex_to_rgb(hex) {
            Some(rgb) => self.classify_lab_with_hex(rgb_to_lab(rgb), rgb_to_hex(rgb)),
            None => {
                tracing::debug!("Unparseable garment color '{}'", hex);
                ClassificationResult {
                    status: ClassificationStatus::Unclassified,
                    season: None,
                    group: None,
                    dominant_hex: hex.trim().to_string(),
                    lab: None,
                    nearest_palette_color: None,
                    min_delta_e: None,
                    runner_up: None,
                }
            }
        }
    }

    /// Classify a color already in Lab
    pub fn classify_lab(&self, lab: LabColor) -> ClassificationResult {
        self.classify_lab_with_hex(lab, super::conversion::lab_to_hex(lab))
    }

    fn classify_lab_with_hex(&self, lab: LabColor, hex: String) -> ClassificationResult {
        let distances: Vec<(usize, f64)> = self
            .catalog
            .colors()
            .iter()
            .enumerate()
            .map(|(i, c)| (i, delta_e_76(&lab, &c.lab)))
            .collect();

        let colors = self.catalog.colors();

        // Strict `<` keeps the earliest catalog entry on exact ties
        let best = distances
            .iter()
            .copied()
            .fold(None::<(usize, f64)>, |acc, (i, d)| match acc {
                Some((_, best_d)) if d >= best_d => acc,
                _ => Some((i, d)),
            });

        let Some((best_idx, best_de)) = best else {
            return ClassificationResult {
                status: ClassificationStatus::Unclassified,
                season: None,
                group: None,
                dominant_hex: hex,
                lab: Some(lab),
                nearest_palette_color: None,
                min_delta_e: None,
                runner_up: None,
            };
        };
        let best_color = &colors[best_idx];

        let runner_up = distances
            .iter()
            .copied()
            .filter(|&(i, _)| !colors[i].same_cell(best_color))
            .fold(None::<(usize, f64)>, |acc, (i, d)| match acc {
                Some((_, best_d)) if d >= best_d => acc,
                _ => Some((i, d)),
            })
            .map(|(i, d)| PaletteMatch { color: colors[i].clone(), delta_e: d });

        let status = if best_de > self.unclassified_threshold {
            ClassificationStatus::Unclassified
        } else if runner_up
            .as_ref()
            .is_some_and(|r| r.delta_e - best_de < self.ambiguity_threshold)
        {
            ClassificationStatus::Ambiguous
        } else {
            ClassificationStatus::Ok
        };

        tracing::debug!(
            "Classified {} as {:?}: nearest {} ({} / {}) ΔE {:.2}",
            hex,
            status,
            best_color.name,
            best_color.season,
            best_color.group,
            best_de
        );

        let (season, group) = if status == ClassificationStatus::Ok {
            (Some(best_color.season), Some(best_color.group))
        } else {
            (None, None)
        };

        ClassificationResult {
            status,
            season,
            group,
            dominant_hex: hex,
            lab: Some(lab),
            nearest_palette_color: Some(best_color.clone()),
            min_delta_e: Some(best_de),
            runner_up,
        }
    }
}
