//! Style Engine - main coordinator for color and fit recommendations
//!
//! Owns everything that is built once: the validated configuration, the
//! precomputed palette catalog and the color namer. All operations take
//! `&self`; the namer's cache is the only interior mutability, so one
//! engine can serve many threads (see [`StyleEngine::recommend_batch`]).

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::color::{
    ClassificationResult, ColorNamer, NamedColorMatch, NamedColorResolver, PaletteCatalog,
    PaletteClassifier,
};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::fit::recommend::{recommend_size, FitRecommendation};
use crate::profile::{GarmentDescriptor, UserProfile};
use crate::suitability::{
    body_shape_suitability, color_suitability, BodyShapeSuitability, ColorSuitability,
    SuitabilityVerdict,
};

/// One user/garment pair to assess
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub user: UserProfile,
    pub garment: GarmentDescriptor,
}

/// Full answer for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub garment_name: Option<String>,
    pub suitability: SuitabilityVerdict,
    pub fit: FitRecommendation,
}

/// Main style engine
pub struct StyleEngine {
    config: EngineConfig,
    catalog: PaletteCatalog,
    namer: Box<dyn ColorNamer>,
}

impl StyleEngine {
    /// Engine with the stock configuration
    pub fn new() -> Self {
        let config = EngineConfig::default();
        let namer = Box::new(NamedColorResolver::new(config.color.name_cache_capacity));
        Self::build(config, namer)
    }

    /// Engine with a custom configuration, validated first
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let namer = Box::new(NamedColorResolver::new(config.color.name_cache_capacity));
        Ok(Self::build(config, namer))
    }

    /// Engine with a caller-supplied color namer
    pub fn with_namer(config: EngineConfig, namer: Box<dyn ColorNamer>) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, namer))
    }

    fn build(config: EngineConfig, namer: Box<dyn ColorNamer>) -> Self {
        let catalog = PaletteCatalog::build();

        tracing::info!(
            "Style engine ready: {} palette swatches, ΔE gates {}/{}, name cache {}",
            catalog.len(),
            config.color.unclassified_threshold,
            config.color.ambiguity_threshold,
            config.color.name_cache_capacity
        );

        Self { config, catalog, namer }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &PaletteCatalog {
        &self.catalog
    }

    pub fn classifier(&self) -> PaletteClassifier<'_> {
        PaletteClassifier::new(&self.catalog, &self.config.color)
    }

    /// Classify a hex color against the seasonal palette
    pub fn classify(&self, hex: &str) -> ClassificationResult {
        self.classifier().classify(hex)
    }

    /// Nearest human-friendly name for a hex color
    pub fn color_name(&self, hex: &str) -> NamedColorMatch {
        self.namer.nearest_color_name(hex)
    }

    pub fn color_suitability(&self, user: &UserProfile, garment: &GarmentDescriptor) -> ColorSuitability {
        color_suitability(user, garment.color(), &self.classifier(), self.namer.as_ref())
    }

    pub fn body_shape_suitability(&self, user: &UserProfile, garment: &GarmentDescriptor) -> BodyShapeSuitability {
        body_shape_suitability(
            user.body_shape.as_deref(),
            &user.body_measurements(),
            garment.category(),
            garment.fit_intent(user),
        )
    }

    /// Color and body-shape verdicts with a joined summary
    pub fn suitability(&self, user: &UserProfile, garment: &GarmentDescriptor) -> SuitabilityVerdict {
        SuitabilityVerdict::new(
            Some(self.color_suitability(user, garment)),
            Some(self.body_shape_suitability(user, garment)),
        )
    }

    pub fn recommend_size(&self, user: &UserProfile, garment: &GarmentDescriptor) -> FitRecommendation {
        let body = user.body_measurements();
        let request = garment.fit_request(user);
        recommend_size(&body, &request, &self.config.fit)
    }

    /// Suitability and size for one request
    pub fn recommend(&self, request: &RecommendationRequest) -> Recommendation {
        let RecommendationRequest { user, garment } = request;
        Recommendation {
            garment_name: garment.name.clone(),
            suitability: self.suitability(user, garment),
            fit: self.recommend_size(user, garment),
        }
    }

    /// Score many requests in parallel; output order matches input order
    pub fn recommend_batch(&self, requests: &[RecommendationRequest]) -> Vec<Recommendation> {
        tracing::debug!("Scoring {} recommendations in parallel", requests.len());
        requests.par_iter().map(|r| self.recommend(r)).collect()
    }
}

impl Default for StyleEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ClassificationStatus;
    use crate::error::StyleError;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_engine_is_shareable() {
        assert_send_sync::<StyleEngine>();
    }

    #[test]
    fn test_engine_builds_catalog() {
        let engine = StyleEngine::new();
        assert_eq!(engine.catalog().len(), 80);
        assert_eq!(engine.classify("#FF6F61").status, ClassificationStatus::Ok);
        assert_eq!(engine.color_name("#FF6F61").name, "Living Coral");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = EngineConfig::default();
        config.color.name_cache_capacity = 0;
        assert_eq!(StyleEngine::with_config(config).err(), Some(StyleError::ZeroCacheCapacity));
    }

    #[test]
    fn test_custom_thresholds_flow_through() {
        let mut config = EngineConfig::default();
        config.color.unclassified_threshold = 40.0;
        let engine = StyleEngine::with_config(config).unwrap();
        assert_ne!(engine.classify("#39FF14").status, ClassificationStatus::Unclassified);
    }
}
