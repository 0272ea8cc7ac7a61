//! Units and measurement systems for StandKit
//!
//! All internal lengths are millimeters. These helpers exist for the
//! editing layer, which accepts metric or imperial text and shows values
//! back in the user's preferred system.

use crate::error::DimensionParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement system for displaying values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MeasurementSystem {
    /// Metric system (millimeters)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementSystem::Metric => write!(f, "Metric (mm)"),
            MeasurementSystem::Imperial => write!(f, "Imperial (in)"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" | "millimeters" => Ok(MeasurementSystem::Metric),
            "imperial" | "in" | "inches" => Ok(MeasurementSystem::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Converts millimeters to inches
pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

/// Converts inches to millimeters
pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

/// Short unit label for the given measurement system
pub fn unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}

/// Formats a length in millimeters for display in the given system
pub fn format_length(value_mm: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.3} mm", value_mm),
        MeasurementSystem::Imperial => format!("{:.4} in", mm_to_inches(value_mm)),
    }
}

/// Parses a length entered in the given system, returning millimeters.
///
/// Metric input is a plain decimal. Imperial input also accepts fractions
/// ("3/8") and mixed numbers ("1 1/2"). Empty input parses as zero.
pub fn parse_length(
    input: &str,
    system: MeasurementSystem,
) -> std::result::Result<f64, DimensionParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    match system {
        MeasurementSystem::Metric => {
            input
                .parse::<f64>()
                .map_err(|e| DimensionParseError::InvalidNumber {
                    input: input.to_string(),
                    reason: e.to_string(),
                })
        }
        MeasurementSystem::Imperial => {
            let mut total_inches = 0.0;
            for part in input.split_whitespace() {
                if part.contains('/') {
                    let pieces: Vec<&str> = part.split('/').collect();
                    if pieces.len() != 2 {
                        return Err(DimensionParseError::InvalidFraction {
                            input: input.to_string(),
                        });
                    }
                    let numerator = pieces[0].parse::<f64>().map_err(|_| {
                        DimensionParseError::InvalidFraction {
                            input: input.to_string(),
                        }
                    })?;
                    let denominator = pieces[1].parse::<f64>().map_err(|_| {
                        DimensionParseError::InvalidFraction {
                            input: input.to_string(),
                        }
                    })?;
                    if denominator == 0.0 {
                        return Err(DimensionParseError::ZeroDenominator {
                            input: input.to_string(),
                        });
                    }
                    total_inches += numerator / denominator;
                } else {
                    total_inches +=
                        part.parse::<f64>()
                            .map_err(|e| DimensionParseError::InvalidNumber {
                                input: input.to_string(),
                                reason: e.to_string(),
                            })?;
                }
            }
            Ok(inches_to_mm(total_inches))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_inch_round_trip() {
        assert!((mm_to_inches(25.4) - 1.0).abs() < 1e-12);
        assert!((inches_to_mm(2.0) - 50.8).abs() < 1e-12);
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(unit_label(MeasurementSystem::Metric), "mm");
        assert_eq!(unit_label(MeasurementSystem::Imperial), "in");
    }

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(12.5, MeasurementSystem::Metric), "12.500 mm");
        assert_eq!(
            format_length(25.4, MeasurementSystem::Imperial),
            "1.0000 in"
        );
    }

    #[test]
    fn test_parse_length_metric() {
        assert_eq!(parse_length("100", MeasurementSystem::Metric), Ok(100.0));
        assert_eq!(parse_length("3.5", MeasurementSystem::Metric), Ok(3.5));
        assert_eq!(parse_length("  -7.25 ", MeasurementSystem::Metric), Ok(-7.25));
    }

    #[test]
    fn test_parse_length_empty_is_zero() {
        assert_eq!(parse_length("", MeasurementSystem::Metric), Ok(0.0));
        assert_eq!(parse_length("   ", MeasurementSystem::Imperial), Ok(0.0));
    }

    #[test]
    fn test_parse_length_imperial_decimal() {
        let mm = parse_length("2.5", MeasurementSystem::Imperial).unwrap();
        assert!((mm - 63.5).abs() < 1e-9);
    }

    #[test]
    fn test_parse_length_imperial_fraction() {
        let mm = parse_length("3/8", MeasurementSystem::Imperial).unwrap();
        assert!((mm - 9.525).abs() < 1e-9);
    }

    #[test]
    fn test_parse_length_imperial_mixed_number() {
        let mm = parse_length("1 1/2", MeasurementSystem::Imperial).unwrap();
        assert!((mm - 38.1).abs() < 1e-9);
    }

    #[test]
    fn test_parse_length_invalid_number() {
        let err = parse_length("abc", MeasurementSystem::Metric).unwrap_err();
        assert!(matches!(err, DimensionParseError::InvalidNumber { .. }));
    }

    #[test]
    fn test_parse_length_malformed_fraction() {
        let err = parse_length("1/2/3", MeasurementSystem::Imperial).unwrap_err();
        assert!(matches!(err, DimensionParseError::InvalidFraction { .. }));
    }

    #[test]
    fn test_parse_length_zero_denominator() {
        let err = parse_length("1/0", MeasurementSystem::Imperial).unwrap_err();
        assert!(matches!(err, DimensionParseError::ZeroDenominator { .. }));
    }

    #[test]
    fn test_measurement_system_from_str() {
        assert_eq!(
            "metric".parse::<MeasurementSystem>(),
            Ok(MeasurementSystem::Metric)
        );
        assert_eq!(
            "IN".parse::<MeasurementSystem>(),
            Ok(MeasurementSystem::Imperial)
        );
        assert!("furlongs".parse::<MeasurementSystem>().is_err());
    }
}
