//! Color pipeline
//!
//! - `conversion.rs` - hex ↔ sRGB ↔ XYZ ↔ Lab, ΔE76
//! - `palette.rs` - 4 seasons × 4 groups seasonal palette, precomputed to Lab
//! - `classifier.rs` - nearest-swatch lookup with unclassified/ambiguity gating
//! - `named.rs` - nearest human-friendly color name with a bounded FIFO cache
//! - `named_table.rs` - embedded named-color reference data

pub mod conversion;
pub mod palette;
pub mod classifier;
pub mod named;
mod named_table;

pub use conversion::{
    delta_e_76, hex_to_lab, hex_to_rgb, lab_to_hex, normalize_hex, rgb_to_hex, rgb_to_lab,
    rgb_to_xyz, xyz_to_lab, ColorSample, LabColor, Rgb, Xyz,
};
pub use palette::{PaletteCatalog, PaletteColor, PaletteGroup, Season, Temperature};
pub use classifier::{ClassificationResult, ClassificationStatus, PaletteClassifier, PaletteMatch};
pub use named::{ColorNamer, NamedColorMatch, NamedColorResolver, UNKNOWN_COLOR_NAME};
