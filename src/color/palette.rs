//! Seasonal Palette Catalog
//!
//! Fixed reference palette: 4 seasons × 4 groups × 5 swatches.
//! The swatches are converted to Lab once, when a [`PaletteCatalog`] is
//! built, and are read-only afterwards.
//!
//! Seasons split along temperature (spring/autumn warm, summer/winter cool);
//! groups describe depth (light, deep) or clarity (bright, muted).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::conversion::{hex_to_lab, LabColor};

/// Classical color-analysis season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// Warm or cool undertone family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Warm,
    Cool,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    pub fn temperature(&self) -> Temperature {
        match self {
            Season::Spring | Season::Autumn => Temperature::Warm,
            Season::Summer | Season::Winter => Temperature::Cool,
        }
    }

    /// The other season sharing this season's temperature
    pub fn sibling(&self) -> Season {
        match self {
            Season::Spring => Season::Autumn,
            Season::Autumn => Season::Spring,
            Season::Summer => Season::Winter,
            Season::Winter => Season::Summer,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }

    /// Parse a season name, tolerating sub-season labels like "Light Spring"
    /// or "deep winter" and the "fall" spelling
    pub fn parse(text: &str) -> Option<Season> {
        let lower = text.trim().to_lowercase();
        if lower.contains("spring") {
            Some(Season::Spring)
        } else if lower.contains("summer") {
            Some(Season::Summer)
        } else if lower.contains("autumn") || lower.contains("fall") {
            Some(Season::Autumn)
        } else if lower.contains("winter") {
            Some(Season::Winter)
        } else {
            None
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

/// Palette group within a season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteGroup {
    Light,
    Bright,
    Muted,
    Deep,
}

impl PaletteGroup {
    pub fn display_text(&self) -> &'static str {
        match self {
            PaletteGroup::Light => "Light",
            PaletteGroup::Bright => "Bright",
            PaletteGroup::Muted => "Muted",
            PaletteGroup::Deep => "Deep",
        }
    }
}

impl fmt::Display for PaletteGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

/// Literal catalog entry
#[derive(Debug, Clone, Copy)]
struct Swatch {
    season: Season,
    group: PaletteGroup,
    name: &'static str,
    hex: &'static str,
}

// ============================================================================
// EMBEDDED SEASONAL PALETTE
// ============================================================================

static SWATCHES: &[Swatch] = &[
    // Spring
    Swatch { season: Season::Spring, group: PaletteGroup::Light, name: "Peach", hex: "#FFDAB9" },
    Swatch { season: Season::Spring, group: PaletteGroup::Light, name: "Buttercream", hex: "#F9E79F" },
    Swatch { season: Season::Spring, group: PaletteGroup::Light, name: "Light Aqua", hex: "#A0E6D0" },
    Swatch { season: Season::Spring, group: PaletteGroup::Light, name: "Warm Pink", hex: "#FFB6A3" },
    Swatch { season: Season::Spring, group: PaletteGroup::Light, name: "Light Camel", hex: "#E3C49A" },
    Swatch { season: Season::Spring, group: PaletteGroup::Bright, name: "Coral", hex: "#FF6F61" },
    Swatch { season: Season::Spring, group: PaletteGroup::Bright, name: "Poppy", hex: "#F2552C" },
    Swatch { season: Season::Spring, group: PaletteGroup::Bright, name: "Golden Yellow", hex: "#FFC72C" },
    Swatch { season: Season::Spring, group: PaletteGroup::Bright, name: "Turquoise", hex: "#30D5C8" },
    Swatch { season: Season::Spring, group: PaletteGroup::Bright, name: "Kelly Green", hex: "#4CBB17" },
    Swatch { season: Season::Spring, group: PaletteGroup::Muted, name: "Camel", hex: "#C19A6B" },
    Swatch { season: Season::Spring, group: PaletteGroup::Muted, name: "Warm Khaki", hex: "#C3B091" },
    Swatch { season: Season::Spring, group: PaletteGroup::Muted, name: "Soft Teal", hex: "#5FA8A0" },
    Swatch { season: Season::Spring, group: PaletteGroup::Muted, name: "Salmon Rose", hex: "#E9967A" },
    Swatch { season: Season::Spring, group: PaletteGroup::Muted, name: "Moss", hex: "#8A9A5B" },
    Swatch { season: Season::Spring, group: PaletteGroup::Deep, name: "Golden Brown", hex: "#996515" },
    Swatch { season: Season::Spring, group: PaletteGroup::Deep, name: "Chestnut", hex: "#954535" },
    Swatch { season: Season::Spring, group: PaletteGroup::Deep, name: "Warm Teal", hex: "#2A8F6E" },
    Swatch { season: Season::Spring, group: PaletteGroup::Deep, name: "Clear Navy", hex: "#24356B" },
    Swatch { season: Season::Spring, group: PaletteGroup::Deep, name: "Olive Gold", hex: "#A08A2E" },
    // Summer
    Swatch { season: Season::Summer, group: PaletteGroup::Light, name: "Powder Blue", hex: "#B0E0E6" },
    Swatch { season: Season::Summer, group: PaletteGroup::Light, name: "Lavender", hex: "#C7B8EA" },
    Swatch { season: Season::Summer, group: PaletteGroup::Light, name: "Soft Pink", hex: "#F4C2C2" },
    Swatch { season: Season::Summer, group: PaletteGroup::Light, name: "Mint", hex: "#C8F0DC" },
    Swatch { season: Season::Summer, group: PaletteGroup::Light, name: "Light Gray", hex: "#D3D6DB" },
    Swatch { season: Season::Summer, group: PaletteGroup::Bright, name: "Watermelon", hex: "#E8536F" },
    Swatch { season: Season::Summer, group: PaletteGroup::Bright, name: "Periwinkle", hex: "#8C9EFF" },
    Swatch { season: Season::Summer, group: PaletteGroup::Bright, name: "Sky Blue", hex: "#5DADE2" },
    Swatch { season: Season::Summer, group: PaletteGroup::Bright, name: "Orchid", hex: "#DA70D6" },
    Swatch { season: Season::Summer, group: PaletteGroup::Bright, name: "Cool Aqua", hex: "#3FB8C4" },
    Swatch { season: Season::Summer, group: PaletteGroup::Muted, name: "Dusty Rose", hex: "#B5838D" },
    Swatch { season: Season::Summer, group: PaletteGroup::Muted, name: "Mauve", hex: "#9E7B9B" },
    Swatch { season: Season::Summer, group: PaletteGroup::Muted, name: "Slate Blue", hex: "#6E7F99" },
    Swatch { season: Season::Summer, group: PaletteGroup::Muted, name: "Sage", hex: "#9CAF88" },
    Swatch { season: Season::Summer, group: PaletteGroup::Muted, name: "Rose Brown", hex: "#A0695F" },
    Swatch { season: Season::Summer, group: PaletteGroup::Deep, name: "Plum", hex: "#673147" },
    Swatch { season: Season::Summer, group: PaletteGroup::Deep, name: "Slate Navy", hex: "#2F3E5C" },
    Swatch { season: Season::Summer, group: PaletteGroup::Deep, name: "Spruce", hex: "#2A5D67" },
    Swatch { season: Season::Summer, group: PaletteGroup::Deep, name: "Cocoa", hex: "#5D4A44" },
    Swatch { season: Season::Summer, group: PaletteGroup::Deep, name: "Raspberry", hex: "#8E2C48" },
    // Autumn
    Swatch { season: Season::Autumn, group: PaletteGroup::Light, name: "Cream", hex: "#FCEBC0" },
    Swatch { season: Season::Autumn, group: PaletteGroup::Light, name: "Light Terracotta", hex: "#E8A87C" },
    Swatch { season: Season::Autumn, group: PaletteGroup::Light, name: "Sand", hex: "#D6C29F" },
    Swatch { season: Season::Autumn, group: PaletteGroup::Light, name: "Light Sage", hex: "#C9D1A4" },
    Swatch { season: Season::Autumn, group: PaletteGroup::Light, name: "Buff", hex: "#F0C98B" },
    Swatch { season: Season::Autumn, group: PaletteGroup::Bright, name: "Pumpkin", hex: "#FF7518" },
    Swatch { season: Season::Autumn, group: PaletteGroup::Bright, name: "Mustard", hex: "#E1AD01" },
    Swatch { season: Season::Autumn, group: PaletteGroup::Bright, name: "Tomato", hex: "#D0312D" },
    Swatch { season: Season::Autumn, group: PaletteGroup::Bright, name: "Teal", hex: "#008080" },
    Swatch { season: Season::Autumn, group: PaletteGroup::Bright, name: "Lime Olive", hex: "#9ACD32" },
    Swatch { season: Season::Autumn, group: PaletteGroup::Muted, name: "Olive", hex: "#808000" },
    Swatch { season: Season::Autumn, group: PaletteGroup::Muted, name: "Khaki Brown", hex: "#A0785A" },
    Swatch { season: Season::Autumn, group: PaletteGroup::Muted, name: "Terracotta", hex: "#C66B3D" },
    Swatch { season: Season::Autumn, group: PaletteGroup::Muted, name: "Sage Olive", hex: "#8F9779" },
    Swatch { season: Season::Autumn, group: PaletteGroup::Muted, name: "Muted Teal", hex: "#4F7C74" },
    Swatch { season: Season::Autumn, group: PaletteGroup::Deep, name: "Chocolate", hex: "#5C3317" },
    Swatch { season: Season::Autumn, group: PaletteGroup::Deep, name: "Forest Green", hex: "#2E5339" },
    Swatch { season: Season::Autumn, group: PaletteGroup::Deep, name: "Oxblood", hex: "#6D2E2A" },
    Swatch { season: Season::Autumn, group: PaletteGroup::Deep, name: "Deep Teal", hex: "#0F4F4A" },
    Swatch { season: Season::Autumn, group: PaletteGroup::Deep, name: "Bronze", hex: "#8C6A2F" },
    // Winter
    Swatch { season: Season::Winter, group: PaletteGroup::Light, name: "Icy Blue", hex: "#DCEBFA" },
    Swatch { season: Season::Winter, group: PaletteGroup::Light, name: "Icy Pink", hex: "#F8E1EC" },
    Swatch { season: Season::Winter, group: PaletteGroup::Light, name: "Icy Lemon", hex: "#FBF9D3" },
    Swatch { season: Season::Winter, group: PaletteGroup::Light, name: "Icy Violet", hex: "#E0D8F8" },
    Swatch { season: Season::Winter, group: PaletteGroup::Light, name: "Silver", hex: "#BCC2CC" },
    Swatch { season: Season::Winter, group: PaletteGroup::Bright, name: "True Red", hex: "#D2042D" },
    Swatch { season: Season::Winter, group: PaletteGroup::Bright, name: "Royal Blue", hex: "#4169E1" },
    Swatch { season: Season::Winter, group: PaletteGroup::Bright, name: "Emerald", hex: "#009B77" },
    Swatch { season: Season::Winter, group: PaletteGroup::Bright, name: "Magenta", hex: "#C6007E" },
    Swatch { season: Season::Winter, group: PaletteGroup::Bright, name: "Lemon Yellow", hex: "#FFF44F" },
    Swatch { season: Season::Winter, group: PaletteGroup::Muted, name: "Taupe Gray", hex: "#8B8589" },
    Swatch { season: Season::Winter, group: PaletteGroup::Muted, name: "Blue Gray", hex: "#7D8CA3" },
    Swatch { season: Season::Winter, group: PaletteGroup::Muted, name: "Pine Gray", hex: "#5E7468" },
    Swatch { season: Season::Winter, group: PaletteGroup::Muted, name: "Cool Burgundy", hex: "#7F3F5A" },
    Swatch { season: Season::Winter, group: PaletteGroup::Muted, name: "Steel", hex: "#5B6770" },
    Swatch { season: Season::Winter, group: PaletteGroup::Deep, name: "Black", hex: "#000000" },
    Swatch { season: Season::Winter, group: PaletteGroup::Deep, name: "Charcoal", hex: "#36454F" },
    Swatch { season: Season::Winter, group: PaletteGroup::Deep, name: "Black Cherry", hex: "#4A0E2E" },
    Swatch { season: Season::Winter, group: PaletteGroup::Deep, name: "Navy", hex: "#000080" },
    Swatch { season: Season::Winter, group: PaletteGroup::Deep, name: "Pine", hex: "#01796F" },
];

/// Palette swatch with precomputed Lab coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub name: String,
    pub hex: String,
    pub lab: LabColor,
    pub season: Season,
    pub group: PaletteGroup,
}

impl PaletteColor {
    /// True when both colors sit in the same (season, group) cell
    pub fn same_cell(&self, other: &PaletteColor) -> bool {
        self.season == other.season && self.group == other.group
    }
}

/// Read-only, precomputed palette
#[derive(Debug, Clone)]
pub struct PaletteCatalog {
    colors: Vec<PaletteColor>,
}

impl PaletteCatalog {
    /// Convert the embedded swatches to Lab
    pub fn build() -> Self {
        let colors = SWATCHES
            .iter()
            .filter_map(|s| {
                let lab = hex_to_lab(s.hex)?;
                Some(PaletteColor {
                    name: s.name.to_string(),
                    hex: s.hex.to_string(),
                    lab,
                    season: s.season,
                    group: s.group,
                })
            })
            .collect();
        Self { colors }
    }

    pub fn colors(&self) -> &[PaletteColor] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Swatches belonging to one season, in catalog order
    pub fn season_colors(&self, season: Season) -> impl Iterator<Item = &PaletteColor> {
        self.colors.iter().filter(move |c| c.season == season)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&PaletteColor> {
        self.colors.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::conversion::delta_e_76;

    #[test]
    fn test_catalog_shape() {
        let catalog = PaletteCatalog::build();
        assert_eq!(catalog.len(), 80);

        for season in Season::ALL {
            assert_eq!(catalog.season_colors(season).count(), 20);
            for group in [PaletteGroup::Light, PaletteGroup::Bright, PaletteGroup::Muted, PaletteGroup::Deep] {
                let n = catalog
                    .season_colors(season)
                    .filter(|c| c.group == group)
                    .count();
                assert_eq!(n, 5, "{} / {}", season, group);
            }
        }
    }

    #[test]
    fn test_cross_cell_swatches_are_distinct() {
        // Swatches from different cells must not be near-duplicates,
        // otherwise an exact catalog hit would gate as ambiguous.
        let catalog = PaletteCatalog::build();
        let colors = catalog.colors();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                if !a.same_cell(b) {
                    assert!(delta_e_76(&a.lab, &b.lab) > 2.0, "{} vs {}", a.name, b.name);
                }
            }
        }
    }

    #[test]
    fn test_season_parse() {
        assert_eq!(Season::parse("Spring"), Some(Season::Spring));
        assert_eq!(Season::parse("light summer"), Some(Season::Summer));
        assert_eq!(Season::parse("Deep Autumn"), Some(Season::Autumn));
        assert_eq!(Season::parse("fall"), Some(Season::Autumn));
        assert_eq!(Season::parse(" WINTER "), Some(Season::Winter));
        assert_eq!(Season::parse("monsoon"), None);
    }

    #[test]
    fn test_temperature_siblings() {
        for season in Season::ALL {
            assert_ne!(season.sibling(), season);
            assert_eq!(season.sibling().temperature(), season.temperature());
            assert_eq!(season.sibling().sibling(), season);
        }
    }

    #[test]
    fn test_find_by_name() {
        let catalog = PaletteCatalog::build();
        let coral = catalog.find_by_name("coral").unwrap();
        assert_eq!(coral.hex, "#FF6F61");
        assert_eq!(coral.season, Season::Spring);
        assert_eq!(coral.group, PaletteGroup::Bright);
    }
}
