//! Color suitability
//!
//! Turns a palette classification into a verdict for one user. Seasons
//! that share a temperature (spring/autumn, summer/winter) are siblings, so
//! a swatch from the sibling season is still wearable; the opposite
//! temperature is not, unless the user has a neutral undertone.
//!
//! | classification | condition                                   | verdict |
//! |----------------|---------------------------------------------|---------|
//! | ok             | own season, group matches depth/clarity     | great   |
//! | ok             | own season                                  | good    |
//! | ok             | sibling season, group matches               | good    |
//! | ok             | sibling season                              | ok      |
//! | ok             | opposite temperature                        | risky (ok if neutral) |
//! | ambiguous      | user's season among the candidates          | good    |
//! | ambiguous      | a candidate shares the user's temperature   | ok      |
//! | ambiguous      | otherwise                                   | risky   |
//! | unclassified   |                                             | risky   |

use super::assessment::{AssessmentStatus, ColorSuitability, ColorVerdict};
use crate::color::{
    ClassificationResult, ClassificationStatus, ColorNamer, PaletteClassifier, PaletteGroup, Season,
};
use crate::profile::{Clarity, Depth, Undertone, UserProfile};

/// Whether a palette group fits the user's depth or clarity
fn group_matches(group: PaletteGroup, depth: Depth, clarity: Clarity) -> bool {
    match group {
        PaletteGroup::Light => depth == Depth::Light,
        PaletteGroup::Deep => depth == Depth::Deep,
        PaletteGroup::Bright => clarity == Clarity::Bright,
        PaletteGroup::Muted => clarity == Clarity::Muted,
    }
}

fn insufficient(bullets: Vec<String>, classification: Option<ClassificationResult>) -> ColorSuitability {
    ColorSuitability {
        status: AssessmentStatus::InsufficientData,
        verdict: ColorVerdict::InsufficientData,
        summary: "Not enough information to judge this color.".to_string(),
        bullets,
        classification,
        color_name: None,
    }
}

/// Assess a garment color for a user
pub fn color_suitability(
    user: &UserProfile,
    garment_hex: Option<&str>,
    classifier: &PaletteClassifier<'_>,
    namer: &dyn ColorNamer,
) -> ColorSuitability {
    let season = user.season();
    let hex = garment_hex.map(str::trim).filter(|h| !h.is_empty());

    let (Some(season), Some(hex)) = (season, hex) else {
        let mut bullets = Vec::new();
        if season.is_none() {
            bullets.push("Add your color season to get color advice".to_string());
        }
        if hex.is_none() {
            bullets.push("The garment has no color".to_string());
        }
        return insufficient(bullets, None);
    };

    let classification = classifier.classify(hex);
    if classification.lab.is_none() {
        return insufficient(vec![format!("'{}' is not a valid hex color", hex)], Some(classification));
    }

    let color_name = namer.nearest_color_name(hex);
    let depth = user.depth();
    let clarity = user.clarity();
    let neutral = user.undertone() == Some(Undertone::Neutral);

    let mut bullets = Vec::with_capacity(4);
    bullets.push(format!("This color reads as {}", color_name.name));

    let verdict = match classification.status {
        ClassificationStatus::Ok => {
            // Ok always carries the winning swatch
            let (Some(best), Some(delta_e)) =
                (classification.nearest_palette_color.clone(), classification.min_delta_e)
            else {
                return insufficient(bullets, Some(classification));
            };

            bullets.push(format!(
                "Closest palette swatch: {} ({} {}), ΔE {:.1}",
                best.name, best.season, best.group, delta_e
            ));

            let matches = group_matches(best.group, depth, clarity);
            if best.season == season {
                if matches {
                    bullets.push(format!(
                        "It sits in your own {} palette, in the {} group that suits your coloring",
                        season, best.group
                    ));
                    ColorVerdict::Great
                } else {
                    bullets.push(format!("It sits in your own {} palette", season));
                    ColorVerdict::Good
                }
            } else if best.season == season.sibling() {
                bullets.push(format!(
                    "{} shares your {:?} temperature",
                    best.season,
                    season.temperature()
                ));
                if matches {
                    ColorVerdict::Good
                } else {
                    ColorVerdict::Ok
                }
            } else if neutral {
                bullets.push(format!(
                    "{} is the opposite temperature, but a neutral undertone can carry it",
                    best.season
                ));
                ColorVerdict::Ok
            } else {
                bullets.push(format!(
                    "{} is the opposite temperature to your {} coloring",
                    best.season, season
                ));
                ColorVerdict::Risky
            }
        }
        ClassificationStatus::Ambiguous => {
            let candidates = classification.candidate_seasons();
            let names: Vec<&str> = candidates.iter().map(Season::display_text).collect();
            bullets.push(format!(
                "This color sits between the {} palettes",
                names.join(" and ")
            ));

            if candidates.contains(&season) {
                bullets.push(format!("One of them is your {} palette", season));
                ColorVerdict::Good
            } else if candidates.iter().any(|c| c.temperature() == season.temperature()) {
                bullets.push(format!("It leans toward your {:?} temperature", season.temperature()));
                ColorVerdict::Ok
            } else {
                bullets.push(format!("Neither palette shares your {} coloring", season));
                ColorVerdict::Risky
            }
        }
        ClassificationStatus::Unclassified => {
            match (&classification.nearest_palette_color, classification.min_delta_e) {
                (Some(best), Some(delta_e)) => bullets.push(format!(
                    "Far from every seasonal palette (nearest {}, ΔE {:.1})",
                    best.name, delta_e
                )),
                _ => bullets.push("Far from every seasonal palette".to_string()),
            }
            ColorVerdict::Risky
        }
    };

    tracing::debug!("Color {} for {}: {:?}", hex, season, verdict);

    let summary = format!("{}: {} for your {} coloring.", verdict.display_text(), color_name.name, season);

    ColorSuitability {
        status: AssessmentStatus::Ok,
        verdict,
        summary,
        bullets,
        classification: Some(classification),
        color_name: Some(color_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{NamedColorMatch, PaletteCatalog};
    use crate::config::ColorConfig;

    /// Namer that echoes the hex back
    struct EchoNamer;

    impl ColorNamer for EchoNamer {
        fn nearest_color_name(&self, hex: &str) -> NamedColorMatch {
            NamedColorMatch { hex: hex.to_string(), name: format!("color {}", hex) }
        }
    }

    fn user(season: &str) -> UserProfile {
        UserProfile { season: Some(season.to_string()), ..Default::default() }
    }

    fn assess(user: &UserProfile, hex: &str) -> ColorSuitability {
        let catalog = PaletteCatalog::build();
        let classifier = PaletteClassifier::new(&catalog, &ColorConfig::default());
        color_suitability(user, Some(hex), &classifier, &EchoNamer)
    }

    #[test]
    fn test_group_matching() {
        assert!(group_matches(PaletteGroup::Muted, Depth::Medium, Clarity::Muted));
        assert!(!group_matches(PaletteGroup::Bright, Depth::Medium, Clarity::Muted));
        assert!(group_matches(PaletteGroup::Light, Depth::Light, Clarity::Muted));
        assert!(group_matches(PaletteGroup::Deep, Depth::Deep, Clarity::Bright));
    }

    #[test]
    fn test_own_season_matching_group_is_great() {
        let mut spring = user("Spring");
        spring.clarity = Some("bright".into());
        let result = assess(&spring, "#FF6F61");
        assert_eq!(result.verdict, ColorVerdict::Great);
        assert_eq!(result.status, AssessmentStatus::Ok);
        assert_eq!(result.color_name.unwrap().name, "color #FF6F61");
    }

    #[test]
    fn test_own_season_other_group_is_good() {
        // Coral is Spring/Bright; default clarity is muted
        assert_eq!(assess(&user("Spring"), "#FF6F61").verdict, ColorVerdict::Good);
    }

    #[test]
    fn test_sibling_season() {
        // Autumn's sibling is Spring; bright group does not match muted default
        assert_eq!(assess(&user("Autumn"), "#FF6F61").verdict, ColorVerdict::Ok);

        let mut bright_autumn = user("Autumn");
        bright_autumn.clarity = Some("bright".into());
        assert_eq!(assess(&bright_autumn, "#FF6F61").verdict, ColorVerdict::Good);
    }

    #[test]
    fn test_opposite_temperature() {
        assert_eq!(assess(&user("Winter"), "#FF6F61").verdict, ColorVerdict::Risky);

        let mut neutral_winter = user("Winter");
        neutral_winter.undertone = Some("neutral".into());
        assert_eq!(assess(&neutral_winter, "#FF6F61").verdict, ColorVerdict::Ok);
    }

    #[test]
    fn test_ambiguous_color() {
        // Between Camel (Spring) and Khaki Brown (Autumn)
        assert_eq!(assess(&user("Autumn"), "#B08962").verdict, ColorVerdict::Good);
        assert_eq!(assess(&user("Winter"), "#B08962").verdict, ColorVerdict::Risky);
    }

    #[test]
    fn test_unclassified_is_risky() {
        let result = assess(&user("Spring"), "#39FF14");
        assert_eq!(result.verdict, ColorVerdict::Risky);
        assert!(result.bullets.iter().any(|b| b.contains("Far from every seasonal palette")));
    }

    #[test]
    fn test_insufficient_inputs() {
        assert_eq!(assess(&user("Spring"), "#zzzzzz").verdict, ColorVerdict::InsufficientData);
        assert_eq!(assess(&UserProfile::default(), "#FF6F61").verdict, ColorVerdict::InsufficientData);

        let catalog = PaletteCatalog::build();
        let classifier = PaletteClassifier::new(&catalog, &ColorConfig::default());
        let result = color_suitability(&user("Spring"), None, &classifier, &EchoNamer);
        assert_eq!(result.status, AssessmentStatus::InsufficientData);
        assert_eq!(result.bullets, vec!["The garment has no color".to_string()]);
    }
}
