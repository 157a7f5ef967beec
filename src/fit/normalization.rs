//! Measurement normalization
//!
//! User profiles and size charts arrive as loosely-typed JSON: numbers or
//! strings, inches or centimeters, and a zoo of field names. Everything is
//! converted to canonical inch-valued zones here so the scorer only ever
//! sees `Option<f64>`.
//!
//! A value that cannot be read (unparseable, non-finite, zero or negative)
//! becomes `None` and is later reported as missing. It is never coerced to
//! zero.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::{BodyMeasurementSet, GarmentMeasurements, Zone};

const CM_PER_INCH: f64 = 2.54;
const MM_PER_INCH: f64 = 25.4;

/// Unit assumed for bare numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Inches,
    Centimeters,
    Millimeters,
}

impl Unit {
    fn to_inches(self, value: f64) -> f64 {
        match self {
            Unit::Inches => value,
            Unit::Centimeters => value / CM_PER_INCH,
            Unit::Millimeters => value / MM_PER_INCH,
        }
    }

    /// Read a profile/chart `units` declaration
    pub fn parse(text: &str) -> Option<Unit> {
        match text.trim().to_lowercase().as_str() {
            "metric" | "cm" | "centimeters" | "centimetres" => Some(Unit::Centimeters),
            "mm" | "millimeters" | "millimetres" => Some(Unit::Millimeters),
            "imperial" | "in" | "inch" | "inches" | "us" => Some(Unit::Inches),
            _ => None,
        }
    }
}

/// Unit suffixes, longest first so `inches` is not read as `in` + "ches"
const SUFFIXES: [(&str, Unit); 10] = [
    ("centimeters", Unit::Centimeters),
    ("centimetres", Unit::Centimeters),
    ("inches", Unit::Inches),
    ("inch", Unit::Inches),
    ("cm", Unit::Centimeters),
    ("mm", Unit::Millimeters),
    ("in", Unit::Inches),
    ("\"", Unit::Inches),
    ("″", Unit::Inches),
    ("''", Unit::Inches),
];

fn positive(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Parse a numeric string, accepting a `38-40` range as its midpoint
fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if let Ok(v) = text.parse::<f64>() {
        return Some(v);
    }

    // Range: split on a dash that is not a leading sign
    let split = text
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '-' || c == '–')
        .map(|(i, c)| (i, c.len_utf8()))?;
    let low = text[..split.0].trim().parse::<f64>().ok()?;
    let high = text[split.0 + split.1..].trim().parse::<f64>().ok()?;
    Some((low + high) / 2.0)
}

/// Convert a JSON measurement to inches, bare numbers read as inches
pub fn to_inches(value: &Value) -> Option<f64> {
    to_inches_with_unit(value, Unit::Inches)
}

/// Convert a JSON measurement to inches, bare numbers read in `default_unit`
pub fn to_inches_with_unit(value: &Value, default_unit: Unit) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().and_then(positive).map(|v| default_unit.to_inches(v)),
        Value::String(s) => {
            let lower = s.trim().to_lowercase();
            if lower.is_empty() {
                return None;
            }
            let (number, unit) = SUFFIXES
                .iter()
                .find_map(|&(suffix, unit)| lower.strip_suffix(suffix).map(|rest| (rest, unit)))
                .unwrap_or((lower.as_str(), default_unit));
            parse_number(number).and_then(positive).map(|v| unit.to_inches(v))
        }
        _ => None,
    }
}

/// Canonical field key: lowercase, `-` and spaces become `_`
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace(['-', ' '], "_")
}

/// Chart field name aliases, in lookup priority
const CHART_ALIASES: [(Zone, &[&str]); 8] = [
    (Zone::Chest, &["chest", "bust", "chest_width", "bust_width"]),
    (Zone::Waist, &["waist"]),
    (Zone::Hips, &["hips", "hip"]),
    (Zone::Shoulder, &["shoulder", "shoulders", "shoulder_width"]),
    (Zone::Sleeve, &["sleeve", "sleeve_length", "arm"]),
    (Zone::Inseam, &["inseam", "inside_leg"]),
    (Zone::Rise, &["rise", "front_rise"]),
    (Zone::Length, &["length", "garment_length", "dress_length", "body_length"]),
];

const OUTSEAM_ALIASES: &[&str] = &["outseam", "outside_leg"];

/// User-profile aliases layered over the chart aliases
const BODY_EXTRA_ALIASES: [(Zone, &[&str]); 5] = [
    (Zone::Chest, &["bust_in", "chest_in", "chest_size", "bust_size"]),
    (Zone::Waist, &["waist_in", "waist_size"]),
    (Zone::Hips, &["hips_in", "hip_in", "hip_size"]),
    (Zone::Inseam, &["inseam_in", "inseam_length"]),
    (Zone::Length, &["preferred_length"]),
];

const HEIGHT_ALIASES: &[&str] = &["height", "height_in", "body_height"];
const UNIT_KEYS: &[&str] = &["units", "unit", "measurement_system"];

/// Index a JSON object by canonical key; the first spelling of a key wins
fn index_fields(map: &Map<String, Value>) -> FxHashMap<String, &Value> {
    let mut fields = FxHashMap::default();
    for (key, value) in map {
        fields.entry(normalize_key(key)).or_insert(value);
    }
    fields
}

fn first_alias(
    fields: &FxHashMap<String, &Value>,
    aliases: &[&str],
    unit: Unit,
) -> Option<f64> {
    aliases
        .iter()
        .filter_map(|alias| fields.get(*alias))
        .find_map(|value| to_inches_with_unit(value, unit))
}

fn declared_unit(fields: &FxHashMap<String, &Value>) -> Option<Unit> {
    UNIT_KEYS
        .iter()
        .filter_map(|key| fields.get(*key))
        .find_map(|value| value.as_str().and_then(Unit::parse))
}

/// Normalize one size-chart row, bare numbers read as inches
pub fn normalize_chart_row(row: &Map<String, Value>) -> GarmentMeasurements {
    normalize_chart_row_with_unit(row, Unit::Inches)
}

/// Normalize one size-chart row; a `units` field in the row overrides `default_unit`
pub fn normalize_chart_row_with_unit(row: &Map<String, Value>, default_unit: Unit) -> GarmentMeasurements {
    let fields = index_fields(row);
    let unit = declared_unit(&fields).unwrap_or(default_unit);

    let mut measurements = GarmentMeasurements::default();
    for (zone, aliases) in CHART_ALIASES {
        measurements.set(zone, first_alias(&fields, aliases, unit));
    }
    measurements.outseam = first_alias(&fields, OUTSEAM_ALIASES, unit);

    if measurements.inseam.is_none() {
        if let (Some(outseam), Some(rise)) = (measurements.outseam, measurements.rise) {
            measurements.inseam = positive(outseam - rise);
        }
    }

    measurements
}

/// Normalize a user measurement profile
///
/// `units: "metric"` (or `"cm"`) switches bare numbers to centimeters.
pub fn normalize_body(profile: &Map<String, Value>) -> BodyMeasurementSet {
    let fields = index_fields(profile);
    let unit = declared_unit(&fields).unwrap_or_default();

    let mut body = BodyMeasurementSet::default();
    for (zone, aliases) in CHART_ALIASES {
        body.set(zone, first_alias(&fields, aliases, unit));
    }
    for (zone, aliases) in BODY_EXTRA_ALIASES {
        if body.get(zone).is_none() {
            body.set(zone, first_alias(&fields, aliases, unit));
        }
    }

    if body.inseam.is_none() {
        let outseam = first_alias(&fields, OUTSEAM_ALIASES, unit);
        if let (Some(outseam), Some(rise)) = (outseam, body.rise) {
            body.inseam = positive(outseam - rise);
        }
    }

    body.height = HEIGHT_ALIASES
        .iter()
        .filter_map(|key| fields.get(*key))
        .find_map(|value| parse_height_with_unit(value, unit));

    body
}

/// Feet-point-inches number (`5.10` → 5'10") or decimal feet (`5.5` → 5'6")
fn feet_number_to_inches(value: f64) -> Option<f64> {
    let feet = value.trunc();
    let hundredths = ((value - feet) * 100.0).round();
    if hundredths <= 11.0 {
        Some(feet * 12.0 + hundredths)
    } else {
        Some(value * 12.0)
    }
}

fn numeric_tokens(text: &str) -> Vec<f64> {
    text.split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter(|t| !t.is_empty())
        .filter_map(|t| t.parse::<f64>().ok())
        .collect()
}

/// Parse a height in inches
///
/// Accepts `5'10"`, `5 ft 10 in`, `178cm`, meters (`1.78`) and plain
/// inches (anything above 8).
///
/// A bare value between 3 and 8 is feet-point-inches, read the same way
/// whether it arrives as a number or a string: the fraction counts in
/// hundredths, so `5.1`, `5.10` and `"5.1"` are all 5'10" and `5.05` is
/// 5'5". A fraction above `.11` cannot be inches and is read as decimal
/// feet (`5.5` → 66).
pub fn parse_height(value: &Value) -> Option<f64> {
    parse_height_with_unit(value, Unit::Inches)
}

pub fn parse_height_with_unit(value: &Value, default_unit: Unit) -> Option<f64> {
    let number_height = |n: f64| -> Option<f64> {
        let n = positive(n)?;
        match default_unit {
            Unit::Inches if n < 3.0 => Some(n * 100.0 / CM_PER_INCH),
            Unit::Inches if n < 8.0 => feet_number_to_inches(n),
            // Nobody is 100 inches tall; read as centimeters
            Unit::Inches if n >= 100.0 => Some(n / CM_PER_INCH),
            unit => Some(unit.to_inches(n)),
        }
    };

    match value {
        Value::Number(n) => n.as_f64().and_then(number_height),
        Value::String(s) => {
            let lower = s.trim().to_lowercase();
            if lower.is_empty() {
                return None;
            }

            if lower.contains('\'') || lower.contains('′') || lower.contains("ft") || lower.contains("feet") {
                let tokens = numeric_tokens(&lower);
                let feet = *tokens.first()?;
                let inches = tokens.get(1).copied().unwrap_or(0.0);
                if !(0.0..12.0).contains(&inches) {
                    return None;
                }
                return positive(feet * 12.0 + inches);
            }

            if lower.ends_with("cm") || lower.ends_with("mm") || lower.ends_with("in")
                || lower.ends_with('"') || lower.ends_with("inches")
            {
                return to_inches(&Value::String(lower));
            }

            lower.parse::<f64>().ok().and_then(number_height)
        }
        _ => None,
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Render inches to the nearest 1/8 with a reduced fraction: `34 1/4"`
pub fn format_inches(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let eighths = (value.abs() * 8.0).round() as u64;
    let whole = eighths / 8;
    let rem = eighths % 8;

    if rem == 0 {
        return format!("{}{}\"", sign, whole);
    }

    let g = gcd(rem, 8);
    let (num, den) = (rem / g, 8 / g);
    if whole == 0 {
        format!("{}{}/{}\"", sign, num, den)
    } else {
        format!("{}{} {}/{}\"", sign, whole, num, den)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_to_inches_units() {
        assert_eq!(to_inches(&json!(40)), Some(40.0));
        assert_eq!(to_inches(&json!("40")), Some(40.0));
        assert_eq!(to_inches(&json!("40in")), Some(40.0));
        assert_eq!(to_inches(&json!("40 inches")), Some(40.0));
        assert_eq!(to_inches(&json!("40\"")), Some(40.0));
        assert_relative_eq!(to_inches(&json!("101.6cm")).unwrap(), 40.0, epsilon = 1e-9);
        assert_relative_eq!(to_inches(&json!("1016 mm")).unwrap(), 40.0, epsilon = 1e-9);
        assert_relative_eq!(
            to_inches_with_unit(&json!(101.6), Unit::Centimeters).unwrap(),
            40.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_to_inches_rejects_garbage() {
        assert_eq!(to_inches(&json!("forty")), None);
        assert_eq!(to_inches(&json!(0)), None);
        assert_eq!(to_inches(&json!(-3)), None);
        assert_eq!(to_inches(&json!("")), None);
        assert_eq!(to_inches(&json!(null)), None);
        assert_eq!(to_inches(&json!(true)), None);
        assert_eq!(to_inches(&json!("-2cm")), None);
    }

    #[test]
    fn test_range_reads_midpoint() {
        assert_eq!(to_inches(&json!("38-40")), Some(39.0));
        assert_relative_eq!(to_inches(&json!("96-101 cm")).unwrap(), 98.5 / 2.54, epsilon = 1e-9);
    }

    #[test]
    fn test_chart_row_aliases() {
        let row = obj(json!({
            "Bust": "36in",
            "Hip": 40,
            "Shoulder-Width": "16",
            "Dress Length": "38"
        }));
        let m = normalize_chart_row(&row);
        assert_eq!(m.chest, Some(36.0));
        assert_eq!(m.hips, Some(40.0));
        assert_eq!(m.shoulder, Some(16.0));
        assert_eq!(m.length, Some(38.0));
        assert_eq!(m.waist, None);
    }

    #[test]
    fn test_inseam_from_outseam_minus_rise() {
        let row = obj(json!({"waist": 32, "outseam": 42, "rise": 10}));
        let m = normalize_chart_row(&row);
        assert_eq!(m.inseam, Some(32.0));

        let row = obj(json!({"waist": 32, "inseam": 30, "outseam": 42, "rise": 10}));
        assert_eq!(normalize_chart_row(&row).inseam, Some(30.0));
    }

    #[test]
    fn test_chart_row_declared_units() {
        let row = obj(json!({"units": "cm", "chest": 101.6}));
        assert_relative_eq!(normalize_chart_row(&row).chest.unwrap(), 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_body_legacy_aliases() {
        let profile = obj(json!({
            "bust_in": 36,
            "waist_size": "28",
            "hip_size": "39 in",
            "inseam_length": 30,
            "height": "5'6\""
        }));
        let body = normalize_body(&profile);
        assert_eq!(body.chest, Some(36.0));
        assert_eq!(body.waist, Some(28.0));
        assert_eq!(body.hips, Some(39.0));
        assert_eq!(body.inseam, Some(30.0));
        assert_eq!(body.height, Some(66.0));
    }

    #[test]
    fn test_body_metric_profile() {
        let profile = obj(json!({"units": "metric", "chest": 101.6, "height": 178}));
        let body = normalize_body(&profile);
        assert_relative_eq!(body.chest.unwrap(), 40.0, epsilon = 1e-9);
        assert_relative_eq!(body.height.unwrap(), 178.0 / 2.54, epsilon = 1e-9);
    }

    #[test]
    fn test_numeric_and_string_heights_agree() {
        for text in ["5.1", "5.10", "5.5", "5.05", "6", "1.78", "70", "178"] {
            let number: f64 = text.parse().unwrap();
            assert_eq!(
                parse_height(&json!(text)),
                parse_height(&json!(number)),
                "height {text}"
            );
        }
        assert_eq!(parse_height(&json!("5.1")), Some(70.0));
    }

    #[test]
    fn test_parse_height_forms() {
        assert_eq!(parse_height(&json!(5.10)), Some(70.0));
        assert_eq!(parse_height(&json!("5.10")), Some(70.0));
        assert_eq!(parse_height(&json!("5'10\"")), Some(70.0));
        assert_eq!(parse_height(&json!("5 ft 10 in")), Some(70.0));
        assert_eq!(parse_height(&json!("6 ft")), Some(72.0));
        assert_eq!(parse_height(&json!(68)), Some(68.0));
        assert_eq!(parse_height(&json!("5.5")), Some(66.0));
        assert_eq!(parse_height(&json!(5.05)), Some(65.0));
        assert_relative_eq!(parse_height(&json!("178cm")).unwrap(), 178.0 / 2.54, epsilon = 1e-9);
        assert_relative_eq!(parse_height(&json!(1.78)).unwrap(), 178.0 / 2.54, epsilon = 1e-9);
        assert_eq!(parse_height(&json!("tall")), None);
        assert_eq!(parse_height(&json!("5'14\"")), None);
    }

    #[test]
    fn test_format_inches() {
        assert_eq!(format_inches(34.3), "34 1/4\"");
        assert_eq!(format_inches(34.0), "34\"");
        assert_eq!(format_inches(34.5), "34 1/2\"");
        assert_eq!(format_inches(34.375), "34 3/8\"");
        assert_eq!(format_inches(0.25), "1/4\"");
        assert_eq!(format_inches(-2.0), "-2\"");
        assert_eq!(format_inches(39.99), "40\"");
    }
}
