//! Chainage labels in the `K<km>+<m>` notation.
//!
//! Formatting rounds the station to a precision before splitting it into
//! kilometres and metres. Parsing is lenient: any label that cannot be read
//! yields `0.0` so a single malformed value never aborts a batch.

use std::fmt;

/// Rounding applied when turning a station into a label.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainageFormat {
    /// Stations are rounded to a multiple of this before formatting.
    /// Values `<= 0` disable rounding.
    pub precision: f64,
}

impl Default for ChainageFormat {
    fn default() -> Self {
        Self { precision: 10.0 }
    }
}

impl ChainageFormat {
    /// Creates a format with the given rounding precision.
    #[must_use]
    pub fn new(precision: f64) -> Self {
        Self { precision }
    }

    /// Rounds `station` to the configured precision.
    #[must_use]
    pub fn round(&self, station: f64) -> f64 {
        if self.precision > 0.0 && self.precision.is_finite() {
            (station / self.precision).round() * self.precision
        } else {
            station
        }
    }

    /// Formats `station` as `K<km>+<m:03>`.
    #[must_use]
    pub fn format(&self, station: f64) -> String {
        format_chainage(self.round(station))
    }
}

/// Formats an already-rounded station as `K<km>+<m:03>`.
///
/// Kilometres use floor division and metres are truncated, so `2968.7`
/// formats as `K2+968`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_chainage(station: f64) -> String {
    let km = (station / 1000.0).floor() as i64;
    let m = station.rem_euclid(1000.0).floor() as i64;
    format!("K{km}+{m:03}")
}

/// Parses a chainage label.
///
/// Accepts `K<int>+<float>` (case-insensitive, whitespace ignored) and bare
/// numbers. Only the first two `+`-separated parts are read, so `K1+2+3`
/// parses as `1002`. Anything else parses as `0.0`.
#[must_use]
pub fn parse_chainage(text: &str) -> f64 {
    let clean: String = text
        .to_uppercase()
        .chars()
        .filter(|c| *c != 'K' && !c.is_whitespace())
        .collect();

    let value = if clean.contains('+') {
        let mut parts = clean.split('+');
        match (parts.next().map(str::parse::<f64>), parts.next().map(str::parse::<f64>)) {
            (Some(Ok(km)), Some(Ok(m))) => km * 1000.0 + m,
            _ => 0.0,
        }
    } else {
        clean.parse::<f64>().unwrap_or(0.0)
    };

    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// A chainage given either as a number or as a label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ChainageValue {
    Number(f64),
    Label(String),
}

impl ChainageValue {
    /// Numeric station value. Malformed labels resolve to `0.0`.
    #[must_use]
    pub fn resolve(&self) -> f64 {
        match self {
            Self::Number(v) if v.is_finite() => *v,
            Self::Number(_) => 0.0,
            Self::Label(text) => parse_chainage(text),
        }
    }
}

impl Default for ChainageValue {
    fn default() -> Self {
        Self::Number(0.0)
    }
}

impl From<f64> for ChainageValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ChainageValue {
    fn from(value: &str) -> Self {
        Self::Label(value.to_owned())
    }
}

impl From<String> for ChainageValue {
    fn from(value: String) -> Self {
        Self::Label(value)
    }
}

impl fmt::Display for ChainageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Label(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_km_and_padded_metres() {
        assert_eq!(format_chainage(2968.0), "K2+968");
        assert_eq!(format_chainage(5.0), "K0+005");
        assert_eq!(format_chainage(12_000.0), "K12+000");
    }

    #[test]
    fn format_rounds_to_precision() {
        let fmt = ChainageFormat::default();
        assert_eq!(fmt.format(2964.9), "K2+960");
        assert_eq!(fmt.format(2965.0), "K2+970");
        assert_eq!(fmt.format(999.0), "K1+000");
        assert_eq!(ChainageFormat::new(0.0).format(2968.7), "K2+968");
    }

    #[test]
    fn parses_labels_and_numbers() {
        assert!((parse_chainage("K2+968") - 2968.0).abs() < 1e-9);
        assert!((parse_chainage("k12 + 345.5") - 12_345.5).abs() < 1e-9);
        assert!((parse_chainage("1500") - 1500.0).abs() < 1e-9);
        assert!((parse_chainage("K1500") - 1500.0).abs() < 1e-9);
        assert!((parse_chainage("K1+2+3") - 1002.0).abs() < 1e-9);
    }

    #[test]
    fn malformed_labels_fall_back_to_zero() {
        assert!(parse_chainage("").abs() < f64::EPSILON);
        assert!(parse_chainage("abc").abs() < f64::EPSILON);
        assert!(parse_chainage("K1+x").abs() < f64::EPSILON);
        assert!(parse_chainage("K1+").abs() < f64::EPSILON);
        assert!(parse_chainage("inf").abs() < f64::EPSILON);
    }

    #[test]
    fn label_round_trip_matches_rounding() {
        let fmt = ChainageFormat::default();
        for x in [0.0, 4.9, 5.0, 123.4, 999.99, 2968.0, 15_004.0, 87_654.3] {
            let expected = (x / 10.0_f64).round() * 10.0;
            let parsed = parse_chainage(&fmt.format(x));
            assert!((parsed - expected).abs() < 1e-9, "x={x} parsed={parsed}");
        }
    }

    #[test]
    fn integer_metres_round_trip_without_rounding() {
        let fmt = ChainageFormat::new(1.0);
        for x in [0.0, 1.0, 999.0, 1000.0, 2968.0] {
            assert!((parse_chainage(&fmt.format(x)) - x).abs() < 1e-9);
        }
    }

    #[test]
    fn chainage_value_conversions() {
        assert!((ChainageValue::from("K0+500").resolve() - 500.0).abs() < 1e-9);
        assert!((ChainageValue::from(42.0).resolve() - 42.0).abs() < 1e-9);
        assert!(ChainageValue::from(f64::NAN).resolve().abs() < f64::EPSILON);
        assert_eq!(ChainageValue::from("K1+000").to_string(), "K1+000");
    }
}
