//! Suitability Synthesizer
//!
//! - `color.rs` - garment color against the user's seasonal coloring
//! - `body_shape.rs` - cut against body shape (rule table + shape inference)
//! - `assessment.rs` - verdict enums and result structures

pub mod assessment;
pub mod body_shape;
pub mod color;

pub use assessment::{
    AssessmentStatus, BodyShapeSuitability, BodyShapeVerdict, ColorSuitability, ColorVerdict,
    SuitabilityVerdict,
};
pub use body_shape::{body_shape_suitability, infer_body_shape, BodyShape};
pub use color::color_suitability;
