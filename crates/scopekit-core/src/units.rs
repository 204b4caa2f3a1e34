//! Unit conversion utilities
//!
//! Handles conversion between the physical units a calibration can be
//! expressed in (microns, millimeters, centimeters). All conversion goes
//! through a fixed micron-equivalent factor table so that re-expressing a
//! value or a calibration factor is exact and invertible.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical unit for calibrated measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Micrometers (µm)
    Microns,
    /// Millimeters (mm)
    Millimeters,
    /// Centimeters (cm)
    Centimeters,
}

impl Default for Unit {
    fn default() -> Self {
        Self::Microns
    }
}

impl Unit {
    /// Micron-equivalents of one unit. The table all conversion runs through.
    pub fn microns_per_unit(&self) -> f64 {
        match self {
            Self::Microns => 1.0,
            Self::Millimeters => 1_000.0,
            Self::Centimeters => 10_000.0,
        }
    }

    /// Short label for display ("µm", "mm", "cm")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Microns => "µm",
            Self::Millimeters => "mm",
            Self::Centimeters => "cm",
        }
    }

    /// Label for squared quantities ("µm²", ...)
    pub fn area_label(&self) -> &'static str {
        match self {
            Self::Microns => "µm²",
            Self::Millimeters => "mm²",
            Self::Centimeters => "cm²",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "microns" | "micron" | "um" | "µm" => Ok(Self::Microns),
            "mm" | "millimeters" | "millimeter" => Ok(Self::Millimeters),
            "cm" | "centimeters" | "centimeter" => Ok(Self::Centimeters),
            _ => Err(format!("Unknown unit: {}", s)),
        }
    }
}

/// Convert a measured value from one unit to another.
///
/// A no-op when `from == to` (early return, not a round trip through the
/// factor table).
pub fn convert_value(value: f64, from: Unit, to: Unit) -> f64 {
    if from == to {
        return value;
    }
    value * from.microns_per_unit() / to.microns_per_unit()
}

/// Convert a per-unit rate (e.g. pixels per unit) from one unit to another.
///
/// Rates scale in the opposite direction to values: pixels per millimeter is
/// a thousand times pixels per micron.
pub fn convert_rate(rate: f64, from: Unit, to: Unit) -> f64 {
    if from == to {
        return rate;
    }
    rate * to.microns_per_unit() / from.microns_per_unit()
}

/// Format a measured value for display, 3 decimal places.
pub fn format_value(value: f64) -> String {
    format!("{:.3}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_micron_equivalents() {
        assert_eq!(Unit::Microns.microns_per_unit(), 1.0);
        assert_eq!(Unit::Millimeters.microns_per_unit(), 1_000.0);
        assert_eq!(Unit::Centimeters.microns_per_unit(), 10_000.0);
    }

    #[test]
    fn test_value_conversion() {
        // 1 mm = 1000 µm
        assert_eq!(convert_value(1.0, Unit::Millimeters, Unit::Microns), 1000.0);
        // 2500 µm = 2.5 mm
        assert_eq!(convert_value(2500.0, Unit::Microns, Unit::Millimeters), 2.5);
        // 1 cm = 10 mm
        assert_eq!(
            convert_value(1.0, Unit::Centimeters, Unit::Millimeters),
            10.0
        );
    }

    #[test]
    fn test_same_unit_is_noop() {
        let awkward = 0.1 + 0.2; // not exactly representable
        assert_eq!(convert_value(awkward, Unit::Microns, Unit::Microns), awkward);
        assert_eq!(
            convert_rate(awkward, Unit::Centimeters, Unit::Centimeters),
            awkward
        );
    }

    #[test]
    fn test_conversion_invertible() {
        let v = 123.456;
        let there = convert_value(v, Unit::Millimeters, Unit::Centimeters);
        let back = convert_value(there, Unit::Centimeters, Unit::Millimeters);
        assert!((back - v).abs() < 1e-9);
    }

    #[test]
    fn test_rate_conversion() {
        // 2 px/µm means 2000 px/mm
        assert_eq!(
            convert_rate(2.0, Unit::Microns, Unit::Millimeters),
            2000.0
        );
        assert_eq!(
            convert_rate(2000.0, Unit::Millimeters, Unit::Microns),
            2.0
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(Unit::Microns.label(), "µm");
        assert_eq!(Unit::Millimeters.label(), "mm");
        assert_eq!(Unit::Centimeters.area_label(), "cm²");
    }

    #[test]
    fn test_parsing() {
        assert_eq!("microns".parse::<Unit>().unwrap(), Unit::Microns);
        assert_eq!("um".parse::<Unit>().unwrap(), Unit::Microns);
        assert_eq!(" mm ".parse::<Unit>().unwrap(), Unit::Millimeters);
        assert_eq!("Centimeters".parse::<Unit>().unwrap(), Unit::Centimeters);
        assert!("inch".parse::<Unit>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Unit::Millimeters).unwrap();
        assert_eq!(json, "\"millimeters\"");
        let unit: Unit = serde_json::from_str("\"microns\"").unwrap();
        assert_eq!(unit, Unit::Microns);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(10.5), "10.500");
        assert_eq!(format_value(0.12349), "0.123");
    }
}
