//! Hemisphere-suffixed coordinate tokens
//!
//! HURDAT2 stores positions as an unsigned magnitude followed by a hemisphere
//! letter (`28.0N`, `94.8W`). Map libraries want signed decimal degrees, with
//! south and west negative.

use super::error::{HurdatError, Result};
use std::fmt;

/// Which coordinate a token encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest absolute value allowed on this axis
    pub fn limit(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }

    /// (positive, negative) hemisphere letters
    fn hemispheres(self) -> (char, char) {
        match self {
            Axis::Latitude => ('N', 'S'),
            Axis::Longitude => ('E', 'W'),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// Convert a token such as `80W` into signed decimal degrees
///
/// The hemisphere letter is required and must belong to `axis`
/// (N/S for latitude, E/W for longitude). Range is not checked here;
/// the record parser validates it with the row context attached.
pub fn convert(token: &str, axis: Axis) -> Result<f64> {
    let trimmed = token.trim();
    let err = |reason: String| HurdatError::Coordinate {
        token: token.to_string(),
        reason,
    };

    let hemisphere = trimmed
        .chars()
        .last()
        .ok_or_else(|| err("empty token".to_string()))?;
    let magnitude = &trimmed[..trimmed.len() - hemisphere.len_utf8()];

    let (positive, negative) = axis.hemispheres();
    let sign = match hemisphere.to_ascii_uppercase() {
        c if c == positive => 1.0,
        c if c == negative => -1.0,
        other => {
            return Err(err(format!(
                "unrecognized {} hemisphere '{}'",
                axis, other
            )))
        }
    };

    if magnitude.is_empty() {
        return Err(err("missing numeric value".to_string()));
    }
    if !magnitude.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(err(format!(
            "magnitude '{}' must be unsigned decimal digits",
            magnitude
        )));
    }

    let value: f64 = magnitude
        .parse()
        .map_err(|e| err(format!("invalid number '{}': {}", magnitude, e)))?;

    if !value.is_finite() {
        return Err(err(format!("non-finite value '{}'", magnitude)));
    }

    Ok(sign * value)
}

/// Format signed decimal degrees back into a hemisphere token
pub fn format_coordinate(value: f64, axis: Axis) -> String {
    let (positive, negative) = axis.hemispheres();
    let hemisphere = if value < 0.0 { negative } else { positive };
    format!("{:.1}{}", value.abs(), hemisphere)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_examples() {
        assert_eq!(convert("80W", Axis::Longitude).unwrap(), -80.0);
        assert_eq!(convert("25N", Axis::Latitude).unwrap(), 25.0);
        assert_eq!(convert("10E", Axis::Longitude).unwrap(), 10.0);
        assert_eq!(convert("12.5S", Axis::Latitude).unwrap(), -12.5);
    }

    #[test]
    fn test_convert_trims_and_ignores_case() {
        assert_eq!(convert("  94.8W ", Axis::Longitude).unwrap(), -94.8);
        assert_eq!(convert("28.0n", Axis::Latitude).unwrap(), 28.0);
    }

    #[test]
    fn test_convert_rejects_wrong_axis_letter() {
        // E/W on a latitude and N/S on a longitude are unrecognized
        assert!(convert("25E", Axis::Latitude).is_err());
        assert!(convert("80N", Axis::Longitude).is_err());
    }

    #[test]
    fn test_convert_rejects_missing_parts() {
        assert!(convert("", Axis::Latitude).is_err());
        assert!(convert("N", Axis::Latitude).is_err());
        assert!(convert("25", Axis::Latitude).is_err());
        assert!(convert("abcW", Axis::Longitude).is_err());
        assert!(convert("infW", Axis::Longitude).is_err());
    }

    #[test]
    fn test_convert_rejects_signed_and_exponent_magnitudes() {
        assert!(convert("-80W", Axis::Longitude).is_err());
        assert!(convert("+80W", Axis::Longitude).is_err());
        assert!(convert("-25N", Axis::Latitude).is_err());
        assert!(convert("1e2N", Axis::Latitude).is_err());
        assert!(convert("8.0E1W", Axis::Longitude).is_err());
    }

    #[test]
    fn test_convert_error_is_parse_error() {
        let err = convert("12X", Axis::Longitude).unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("12X"));
    }

    #[test]
    fn test_round_trip_preserves_sign() {
        let cases = [
            ("28.0N", Axis::Latitude),
            ("12.5S", Axis::Latitude),
            ("94.8W", Axis::Longitude),
            ("0.3E", Axis::Longitude),
        ];
        for (token, axis) in cases {
            let value = convert(token, axis).unwrap();
            let formatted = format_coordinate(value, axis);
            assert_eq!(formatted, token);
            assert_eq!(convert(&formatted, axis).unwrap(), value);
        }
    }
}
