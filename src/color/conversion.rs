//! Color space conversion utilities
//!
//! hex ↔ sRGB ↔ CIE XYZ ↔ CIE L*a*b* under the D65 illuminant, plus the
//! ΔE76 perceptual distance.
//!
//! Malformed hex input converts to `None` here, at the lowest layer; callers
//! turn that into an explicit status instead of raising.

use serde::{Deserialize, Serialize};

/// D65 reference white in XYZ, scaled ×100
pub const D65_WHITE: [f64; 3] = [95.047, 100.0, 108.883];

/// sRGB (linear) → XYZ matrix for the D65 white point
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// XYZ → sRGB (linear) matrix, inverse of [`SRGB_TO_XYZ`]
const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// CIE Lab breakpoint δ = 6/29
const DELTA: f64 = 6.0 / 29.0;

/// 8-bit sRGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// CIE XYZ tristimulus values (Y of reference white = 100)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CIE L*a*b* color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabColor {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl LabColor {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma (distance from the neutral axis)
    pub fn chroma(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Component-wise midpoint of two colors
    pub fn midpoint(&self, other: &LabColor) -> LabColor {
        LabColor::new(
            (self.l + other.l) / 2.0,
            (self.a + other.a) / 2.0,
            (self.b + other.b) / 2.0,
        )
    }
}

/// A hex color together with its Lab coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSample {
    pub hex: String,
    pub lab: LabColor,
}

impl ColorSample {
    /// Build a sample from any accepted hex spelling
    pub fn from_hex(hex: &str) -> Option<Self> {
        let rgb = hex_to_rgb(hex)?;
        Some(Self {
            hex: rgb_to_hex(rgb),
            lab: rgb_to_lab(rgb),
        })
    }
}

/// Parse `#RGB`, `#RRGGBB`, `RGB` or `RRGGBB` (case-insensitive)
///
/// Returns `None` for any other shape.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        3 => {
            let mut channels = [0u8; 3];
            for (slot, c) in channels.iter_mut().zip(digits.chars()) {
                let v = c.to_digit(16)? as u8;
                *slot = v * 16 + v;
            }
            Some(Rgb::new(channels[0], channels[1], channels[2]))
        }
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

/// Canonical `#RRGGBB` spelling (uppercase)
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Normalize any accepted hex spelling to `#RRGGBB`
pub fn normalize_hex(hex: &str) -> Option<String> {
    hex_to_rgb(hex).map(rgb_to_hex)
}

#[inline]
fn srgb_decode(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        libm::pow((c + 0.055) / 1.055, 2.4)
    }
}

#[inline]
fn srgb_encode(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        12.92 * linear
    } else {
        1.055 * libm::pow(linear, 1.0 / 2.4) - 0.055
    }
}

/// Gamma-decode sRGB and project into XYZ (×100)
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let lin = [srgb_decode(rgb.r), srgb_decode(rgb.g), srgb_decode(rgb.b)];
    let row = |m: [f64; 3]| (m[0] * lin[0] + m[1] * lin[1] + m[2] * lin[2]) * 100.0;
    Xyz {
        x: row(SRGB_TO_XYZ[0]),
        y: row(SRGB_TO_XYZ[1]),
        z: row(SRGB_TO_XYZ[2]),
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > DELTA * DELTA * DELTA {
        libm::cbrt(t)
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

#[inline]
fn lab_f_inv(t: f64) -> f64 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

/// XYZ → Lab, normalized by the D65 white point
pub fn xyz_to_lab(xyz: Xyz) -> LabColor {
    let fx = lab_f(xyz.x / D65_WHITE[0]);
    let fy = lab_f(xyz.y / D65_WHITE[1]);
    let fz = lab_f(xyz.z / D65_WHITE[2]);

    LabColor {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Lab → XYZ (inverse of [`xyz_to_lab`])
pub fn lab_to_xyz(lab: LabColor) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    Xyz {
        x: D65_WHITE[0] * lab_f_inv(fx),
        y: D65_WHITE[1] * lab_f_inv(fy),
        z: D65_WHITE[2] * lab_f_inv(fz),
    }
}

/// XYZ → 8-bit sRGB, clamped into gamut
pub fn xyz_to_rgb(xyz: Xyz) -> Rgb {
    let v = [xyz.x / 100.0, xyz.y / 100.0, xyz.z / 100.0];
    let channel = |m: [f64; 3]| {
        let linear = m[0] * v[0] + m[1] * v[1] + m[2] * v[2];
        (srgb_encode(linear).clamp(0.0, 1.0) * 255.0).round() as u8
    };
    Rgb::new(
        channel(XYZ_TO_SRGB[0]),
        channel(XYZ_TO_SRGB[1]),
        channel(XYZ_TO_SRGB[2]),
    )
}

pub fn rgb_to_lab(rgb: Rgb) -> LabColor {
    xyz_to_lab(rgb_to_xyz(rgb))
}

/// Hex → Lab, `None` for malformed hex
pub fn hex_to_lab(hex: &str) -> Option<LabColor> {
    hex_to_rgb(hex).map(rgb_to_lab)
}

/// Render a Lab color as the nearest in-gamut `#RRGGBB`
pub fn lab_to_hex(lab: LabColor) -> String {
    rgb_to_hex(xyz_to_rgb(lab_to_xyz(lab)))
}

/// ΔE76: Euclidean distance in Lab space
pub fn delta_e_76(a: &LabColor, b: &LabColor) -> f64 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    (dl * dl + da * da + db * db).sqrt()
}
