//! Track export configuration
//!
//! All default values come from properties.json via `PropertyReader`; this
//! module only gathers them into typed settings. Overrides come from a flat
//! JSON object (`{"color.5": "#330000", "line.weight": 4}`) and/or the
//! command line.

use crate::hurdat::{Category, HurdatError, Result};
use crate::properties::PropertyReader;
use crate::render::palette::{color_property, Palette};
use crate::render::RenderStyle;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct TrackConfig {
    /// Path color per category
    pub palette: Palette,

    /// Line weight, opacity and wind unit label
    pub style: RenderStyle,

    /// Only keep storms from this season (None = all seasons)
    pub season: Option<i32>,
}

impl TrackConfig {
    /// Create config from property overrides
    ///
    /// Unset or invalid values fall back to the properties.json defaults.
    pub fn from_properties(overrides: Option<&HashMap<String, String>>) -> Self {
        let props = PropertyReader::new(overrides);

        for name in props.unknown_names() {
            log::warn!("Ignoring unknown property '{}'", name);
        }

        let palette = Palette::from_fn(|category: Category| props.get_color(&color_property(category)));

        let style = RenderStyle {
            weight: props.get_f64_in_range("line.weight", 0.5, 20.0),
            opacity: props.get_f64_in_range("line.opacity", 0.0, 1.0),
            wind_unit: props.get_enum("wind.unit"),
        };

        let season = props.get_optional_i32("season");

        Self {
            palette,
            style,
            season,
        }
    }

    /// Load overrides from a JSON file and build the config
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let overrides = load_overrides(path)?;
        Ok(Self::from_properties(Some(&overrides)))
    }
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self::from_properties(None)
    }
}

/// Read a flat JSON object of property overrides
///
/// Strings, numbers and booleans are accepted; other values are skipped.
pub fn load_overrides(path: impl AsRef<Path>) -> Result<HashMap<String, String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        HurdatError::Config(format!("failed to read {}: {}", path.display(), e))
    })?;
    let overrides = parse_overrides(&content)?;
    log::info!(
        "Loaded {} property overrides from {}",
        overrides.len(),
        path.display()
    );
    Ok(overrides)
}

/// Parse a flat JSON object of property overrides
pub fn parse_overrides(json: &str) -> Result<HashMap<String, String>> {
    let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

    let mut overrides = HashMap::new();
    for (key, value) in map {
        let value_str = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            other => {
                log::warn!("Skipping non-scalar value for property '{}': {}", key, other);
                continue;
            }
        };
        overrides.insert(key, value_str);
    }

    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrackConfig::default();
        assert_eq!(config.palette, Palette::default());
        assert_eq!(config.style, RenderStyle::default());
        assert_eq!(config.season, None);
    }

    #[test]
    fn test_parse_overrides() {
        let overrides = parse_overrides(
            r##"{"color.5": "#330000", "line.weight": 4, "season": 2005, "legend": {"x": 1}}"##,
        )
        .unwrap();

        assert_eq!(overrides.get("color.5").map(String::as_str), Some("#330000"));
        assert_eq!(overrides.get("line.weight").map(String::as_str), Some("4"));
        assert_eq!(overrides.get("season").map(String::as_str), Some("2005"));
        assert!(!overrides.contains_key("legend"));
    }

    #[test]
    fn test_parse_overrides_rejects_non_object() {
        let err = parse_overrides("[1, 2]").unwrap_err();
        assert!(matches!(err, HurdatError::Json(_)));
    }

    #[test]
    fn test_from_properties() {
        let overrides = parse_overrides(
            r##"{"color.5": "#330000", "line.weight": 4, "line.opacity": 0.6, "wind.unit": "kt", "season": "2005"}"##,
        )
        .unwrap();
        let config = TrackConfig::from_properties(Some(&overrides));

        assert_eq!(config.palette.color(Category::Five), "#330000");
        assert_eq!(config.palette.color(Category::TropicalStorm), "#ffe6e6");
        assert_eq!(config.style.weight, 4.0);
        assert_eq!(config.style.opacity, 0.6);
        assert_eq!(config.style.wind_unit, "kt");
        assert_eq!(config.season, Some(2005));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracks.json");
        std::fs::write(&path, r#"{"line.weight": "100"}"#).unwrap();

        // Out of range falls back to the default
        let config = TrackConfig::from_json_file(&path).unwrap();
        assert_eq!(config.style.weight, 3.0);

        let missing = TrackConfig::from_json_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, HurdatError::Config(_)));
    }
}
