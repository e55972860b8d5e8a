//! Measurement units and conversion to canonical SI
//!
//! All calculator inputs are normalized to kilograms and meters before any
//! BMI math runs. Unit strings arriving over the wire are parsed once, case
//! insensitively, into the enums here; downstream code never sees raw
//! strings.

use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Constants
// ============================================================================

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;
/// Meters per inch
pub const M_PER_INCH: f64 = 0.0254;
/// Meters per foot
pub const M_PER_FOOT: f64 = 0.3048;
/// Centimeters per meter
pub const CM_PER_M: f64 = 100.0;

/// Weight units accepted by the BMI calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms (canonical)
    Kg,
    /// Pounds
    Lbs,
}

impl WeightUnit {
    /// Parse from a wire string, case-insensitive
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Some(WeightUnit::Kg),
            "lbs" | "lb" | "pound" | "pounds" => Some(WeightUnit::Lbs),
            _ => None,
        }
    }

    /// Canonical wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

/// Height units accepted by the BMI calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    /// Centimeters
    Cm,
    /// Meters (canonical)
    M,
    /// Feet, optionally with an inches component
    Ft,
}

impl HeightUnit {
    /// Parse from a wire string, case-insensitive
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Some(HeightUnit::Cm),
            "m" | "meter" | "meters" => Some(HeightUnit::M),
            "ft" | "feet" | "foot" => Some(HeightUnit::Ft),
            _ => None,
        }
    }

    /// Canonical wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::M => "m",
            HeightUnit::Ft => "ft",
        }
    }
}

// ============================================================================
// Conversion Functions
// ============================================================================
//
// Converters never signal errors; callers validate ranges first.

/// Convert a weight value to kilograms
pub fn weight_to_kg(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => value,
        WeightUnit::Lbs => value * KG_PER_LB,
    }
}

/// Convert a height value to meters
///
/// For `Ft` the value is whole feet without an inches component; heights
/// given as feet plus inches go through [`feet_inches_to_meters`].
pub fn height_to_meters(value: f64, unit: HeightUnit) -> f64 {
    match unit {
        HeightUnit::Cm => value / CM_PER_M,
        HeightUnit::M => value,
        HeightUnit::Ft => value * M_PER_FOOT,
    }
}

/// Convert a feet + inches height to meters
pub fn feet_inches_to_meters(feet: f64, inches: f64) -> f64 {
    let total_inches = feet * 12.0 + inches;
    total_inches * M_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_kg_identity() {
        assert_eq!(weight_to_kg(70.0, WeightUnit::Kg), 70.0);
    }

    #[test]
    fn test_weight_lbs_conversion() {
        let kg = weight_to_kg(150.0, WeightUnit::Lbs);
        assert!((kg - 150.0 * KG_PER_LB).abs() < 1e-9);
    }

    #[test]
    fn test_height_cm_conversion() {
        assert!((height_to_meters(175.0, HeightUnit::Cm) - 1.75).abs() < 1e-9);
    }

    #[test]
    fn test_height_m_identity() {
        assert_eq!(height_to_meters(1.75, HeightUnit::M), 1.75);
    }

    #[test]
    fn test_height_bare_feet_conversion() {
        assert!((height_to_meters(6.0, HeightUnit::Ft) - 6.0 * M_PER_FOOT).abs() < 1e-9);
    }

    #[test]
    fn test_feet_inches_conversion() {
        let m = feet_inches_to_meters(5.0, 6.0);
        assert!((m - (5.0 * 12.0 + 6.0) * M_PER_INCH).abs() < 1e-9);
    }

    #[test]
    fn test_weight_unit_parse_aliases() {
        assert_eq!(WeightUnit::from_str("KG"), Some(WeightUnit::Kg));
        assert_eq!(WeightUnit::from_str("Lbs"), Some(WeightUnit::Lbs));
        assert_eq!(WeightUnit::from_str("pounds"), Some(WeightUnit::Lbs));
        assert_eq!(WeightUnit::from_str("stone"), None);
    }

    #[test]
    fn test_height_unit_parse_aliases() {
        assert_eq!(HeightUnit::from_str("cm"), Some(HeightUnit::Cm));
        assert_eq!(HeightUnit::from_str("Meters"), Some(HeightUnit::M));
        assert_eq!(HeightUnit::from_str("FT"), Some(HeightUnit::Ft));
        assert_eq!(HeightUnit::from_str("in"), None);
    }

    #[test]
    fn test_wire_round_trip() {
        for unit in [WeightUnit::Kg, WeightUnit::Lbs] {
            assert_eq!(WeightUnit::from_str(unit.as_str()), Some(unit));
        }
        for unit in [HeightUnit::Cm, HeightUnit::M, HeightUnit::Ft] {
            assert_eq!(HeightUnit::from_str(unit.as_str()), Some(unit));
        }
    }
}
