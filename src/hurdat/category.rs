//! Storm intensity categories derived from maximum sustained wind

use super::data::ObservationRow;
use serde::{Serialize, Serializer};
use std::fmt;

/// Intensity label at a single observation
///
/// Ordering is TS < 1 < 2 < 3 < 4 < 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    TropicalStorm,
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::TropicalStorm,
        Category::One,
        Category::Two,
        Category::Three,
        Category::Four,
        Category::Five,
    ];

    /// Classify a wind speed
    ///
    /// Thresholds are half-open so every value lands in exactly one bucket:
    /// ≤73 TS, 74–95 → 1, 96–110 → 2, 111–129 → 3, 130–156 → 4, ≥157 → 5.
    /// NaN is treated as TS.
    pub fn from_wind(max_wind: f64) -> Self {
        if max_wind.is_nan() || max_wind < 74.0 {
            Category::TropicalStorm
        } else if max_wind < 96.0 {
            Category::One
        } else if max_wind < 111.0 {
            Category::Two
        } else if max_wind < 130.0 {
            Category::Three
        } else if max_wind < 157.0 {
            Category::Four
        } else {
            Category::Five
        }
    }

    /// Hurricane strength (any numbered category)
    pub fn is_hurricane(self) -> bool {
        self != Category::TropicalStorm
    }

    /// Short label as shown in tables and popups
    pub fn label(self) -> &'static str {
        match self {
            Category::TropicalStorm => "TS",
            Category::One => "1",
            Category::Two => "2",
            Category::Three => "3",
            Category::Four => "4",
            Category::Five => "5",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// An observation tagged with its point-in-time category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedRow {
    #[serde(flatten)]
    pub observation: ObservationRow,
    pub category: Category,
}

/// Tag every observation with its category, preserving order
pub fn classify_rows(rows: Vec<ObservationRow>) -> Vec<ClassifiedRow> {
    rows.into_iter()
        .map(|observation| ClassifiedRow {
            category: Category::from_wind(observation.max_wind),
            observation,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(Category::from_wind(73.0), Category::TropicalStorm);
        assert_eq!(Category::from_wind(74.0), Category::One);
        assert_eq!(Category::from_wind(95.0), Category::One);
        assert_eq!(Category::from_wind(96.0), Category::Two);
        assert_eq!(Category::from_wind(110.0), Category::Two);
        assert_eq!(Category::from_wind(111.0), Category::Three);
        assert_eq!(Category::from_wind(129.0), Category::Three);
        assert_eq!(Category::from_wind(130.0), Category::Four);
        assert_eq!(Category::from_wind(156.0), Category::Four);
        assert_eq!(Category::from_wind(157.0), Category::Five);
    }

    #[test]
    fn test_between_integer_boundaries() {
        assert_eq!(Category::from_wind(73.5), Category::TropicalStorm);
        assert_eq!(Category::from_wind(95.5), Category::One);
        assert_eq!(Category::from_wind(156.9), Category::Four);
    }

    #[test]
    fn test_extremes_and_missing() {
        // HURDAT2 uses -999 for unknown wind
        assert_eq!(Category::from_wind(-999.0), Category::TropicalStorm);
        assert_eq!(Category::from_wind(0.0), Category::TropicalStorm);
        assert_eq!(Category::from_wind(200.0), Category::Five);
        assert_eq!(Category::from_wind(f64::NAN), Category::TropicalStorm);
    }

    #[test]
    fn test_ordering_and_labels() {
        assert!(Category::TropicalStorm < Category::One);
        assert!(Category::Four < Category::Five);
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["TS", "1", "2", "3", "4", "5"]);
        assert_eq!(Category::Three.to_string(), "3");
        assert!(!Category::TropicalStorm.is_hurricane());
        assert!(Category::One.is_hurricane());
    }
}
