//! Property definitions with defaults from properties.json
//!
//! properties.json is embedded at compile time and is the single place where
//! defaults live. User overrides (from a config file or the command line) are
//! layered on top and validated against the definitions here; invalid values
//! fall back to the default with a warning.

use crate::render::palette::parse_hex_color;
use std::collections::HashMap;

/// properties.json embedded at compile time
const PROPERTIES_JSON: &str = include_str!("../properties.json");

/// Property definition from properties.json
#[derive(Debug, Clone)]
pub struct PropertyDef {
    pub name: String,
    pub kind: PropertyKind,
    pub default_value: String,
    pub description: String,
    /// For EnumeratedProperty, the valid values
    pub valid_values: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKind {
    String,
    Number,
    Enumerated,
}

/// Registry of all properties with their defaults from properties.json
pub struct PropertyRegistry {
    properties: HashMap<String, PropertyDef>,
}

impl PropertyRegistry {
    /// Parse properties.json and build the registry
    ///
    /// Panics if properties.json is malformed, which can only happen at
    /// development time since the file is embedded.
    pub fn from_properties_json() -> Self {
        Self::from_json(PROPERTIES_JSON).expect("properties.json is invalid")
    }

    /// Parse a properties document
    pub fn from_json(json: &str) -> Result<Self, String> {
        let json: serde_json::Value =
            serde_json::from_str(json).map_err(|e| format!("invalid JSON: {}", e))?;

        let properties_array = json["properties"]
            .as_array()
            .ok_or("missing 'properties' array")?;

        let mut properties = HashMap::new();

        for prop in properties_array {
            let name = prop["name"]
                .as_str()
                .ok_or("property missing 'name'")?
                .to_string();

            let kind = match prop["kind"].as_str() {
                Some("StringProperty") => PropertyKind::String,
                Some("NumberProperty") => PropertyKind::Number,
                Some("EnumeratedProperty") => PropertyKind::Enumerated,
                other => return Err(format!("unknown kind {:?} for property '{}'", other, name)),
            };

            let default_value = prop["defaultValue"].as_str().unwrap_or("").to_string();
            let description = prop["description"].as_str().unwrap_or("").to_string();

            let valid_values = if kind == PropertyKind::Enumerated {
                prop["values"].as_array().map(|arr| {
                    arr.iter()
                        .filter_map(|v| v.as_str().map(|s| s.to_string()))
                        .collect()
                })
            } else {
                None
            };

            properties.insert(
                name.clone(),
                PropertyDef {
                    name,
                    kind,
                    default_value,
                    description,
                    valid_values,
                },
            );
        }

        Ok(Self { properties })
    }

    /// Get the default value for a property
    pub fn get_default(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(|p| p.default_value.as_str())
    }

    /// Get the property definition
    pub fn get_property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.get(name)
    }

    /// Whether `name` is a known property
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Check if a value is valid for an enumerated property
    pub fn is_valid_enum_value(&self, name: &str, value: &str) -> bool {
        self.properties
            .get(name)
            .and_then(|p| p.valid_values.as_ref())
            .map(|values| values.iter().any(|v| v.eq_ignore_ascii_case(value)))
            .unwrap_or(true) // Non-enumerated properties accept any value
    }
}

/// Global registry instance (initialized lazily)
static REGISTRY: std::sync::OnceLock<PropertyRegistry> = std::sync::OnceLock::new();

/// Get the global property registry
pub fn registry() -> &'static PropertyRegistry {
    REGISTRY.get_or_init(PropertyRegistry::from_properties_json)
}

/// Typed property reader
///
/// User values take precedence over the properties.json defaults.
/// Empty user values count as unset.
pub struct PropertyReader {
    user_values: HashMap<String, String>,
}

impl PropertyReader {
    pub fn new(user_values: Option<&HashMap<String, String>>) -> Self {
        let user_values = user_values
            .map(|values| {
                values
                    .iter()
                    .filter(|(_, v)| !v.is_empty())
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect()
            })
            .unwrap_or_default();

        Self { user_values }
    }

    /// Get string property (user value or default)
    pub fn get_string(&self, name: &str) -> String {
        if let Some(value) = self.user_values.get(name) {
            return value.clone();
        }
        registry().get_default(name).unwrap_or("").to_string()
    }

    /// Get optional string property (None if empty)
    pub fn get_optional_string(&self, name: &str) -> Option<String> {
        let value = self.get_string(name);
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// Get enumerated property, falling back to the default on invalid values
    pub fn get_enum(&self, name: &str) -> String {
        let reg = registry();
        let default = reg.get_default(name).unwrap_or("");

        if let Some(value) = self.user_values.get(name) {
            if reg.is_valid_enum_value(name, value) {
                return value.to_lowercase();
            }
            let valid_values = reg
                .get_property(name)
                .and_then(|p| p.valid_values.as_ref())
                .map(|v| v.join(", "))
                .unwrap_or_default();
            log::warn!(
                "Invalid value '{}' for property '{}'. Valid values: [{}]. Using default: '{}'",
                value,
                name,
                valid_values,
                default
            );
        }

        default.to_string()
    }

    /// Get f64 property, falling back to the default when unparsable
    pub fn get_f64(&self, name: &str) -> f64 {
        let default = default_f64(name);
        let value = self.get_string(name);

        match value.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                log::warn!(
                    "Invalid numeric value '{}' for property '{}'. Using default: {}",
                    value,
                    name,
                    default
                );
                default
            }
        }
    }

    /// Get f64 property with range validation
    pub fn get_f64_in_range(&self, name: &str, min: f64, max: f64) -> f64 {
        let value = self.get_f64(name);
        if value >= min && value <= max {
            value
        } else {
            let default = default_f64(name);
            log::warn!(
                "Value {} for property '{}' out of range [{}, {}]. Using default: {}",
                value,
                name,
                min,
                max,
                default
            );
            default
        }
    }

    /// Get optional i32 property (None if empty or invalid)
    pub fn get_optional_i32(&self, name: &str) -> Option<i32> {
        let value = self.get_optional_string(name)?;
        match value.trim().parse::<i32>() {
            Ok(v) => Some(v),
            Err(_) => {
                log::warn!(
                    "Invalid integer value '{}' for property '{}'. Ignoring it",
                    value,
                    name
                );
                None
            }
        }
    }

    /// Get a hex color property, falling back to the default when invalid
    pub fn get_color(&self, name: &str) -> String {
        let value = self.get_string(name);
        if parse_hex_color(&value).is_some() {
            return value;
        }

        let default = registry().get_default(name).unwrap_or("#808080");
        log::warn!(
            "Invalid color '{}' for property '{}'. Using default: '{}'",
            value,
            name,
            default
        );
        default.to_string()
    }

    /// User-supplied names that properties.json does not define
    pub fn unknown_names(&self) -> Vec<&str> {
        let reg = registry();
        let mut names: Vec<&str> = self
            .user_values
            .keys()
            .map(String::as_str)
            .filter(|name| !reg.contains(name))
            .collect();
        names.sort_unstable();
        names
    }
}

fn default_f64(name: &str) -> f64 {
    registry()
        .get_default(name)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(pairs: &[(&str, &str)]) -> PropertyReader {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PropertyReader::new(Some(&values))
    }

    #[test]
    fn test_registry_loads() {
        let reg = registry();
        assert!(reg.get_property("color.TS").is_some());
        assert!(reg.get_property("line.weight").is_some());
        assert_eq!(
            reg.get_property("wind.unit").map(|p| &p.kind),
            Some(&PropertyKind::Enumerated)
        );
    }

    #[test]
    fn test_registry_defaults() {
        let reg = registry();
        assert_eq!(reg.get_default("color.TS"), Some("#ffe6e6"));
        assert_eq!(reg.get_default("color.5"), Some("#580808"));
        assert_eq!(reg.get_default("wind.unit"), Some("mph"));
        assert_eq!(reg.get_default("season"), Some(""));
    }

    #[test]
    fn test_enum_validation() {
        let reg = registry();
        assert!(reg.is_valid_enum_value("wind.unit", "mph"));
        assert!(reg.is_valid_enum_value("wind.unit", "KT"));
        assert!(!reg.is_valid_enum_value("wind.unit", "furlongs"));
    }

    #[test]
    fn test_from_json_rejects_unknown_kind() {
        let json = r#"{"properties": [{"name": "x", "kind": "BooleanProperty"}]}"#;
        assert!(PropertyRegistry::from_json(json).is_err());
        assert!(PropertyRegistry::from_json("{}").is_err());
    }

    #[test]
    fn test_reader_defaults() {
        let reader = PropertyReader::new(None);
        assert_eq!(reader.get_enum("wind.unit"), "mph");
        assert_eq!(reader.get_f64("line.weight"), 3.0);
        assert_eq!(reader.get_color("color.1"), "#ffb3b3");
        assert_eq!(reader.get_optional_i32("season"), None);
    }

    #[test]
    fn test_reader_overrides() {
        let reader = reader(&[
            ("wind.unit", "KT"),
            ("line.weight", "5.5"),
            ("color.3", "#123456"),
            ("season", "2005"),
        ]);
        assert_eq!(reader.get_enum("wind.unit"), "kt");
        assert_eq!(reader.get_f64("line.weight"), 5.5);
        assert_eq!(reader.get_color("color.3"), "#123456");
        assert_eq!(reader.get_optional_i32("season"), Some(2005));
    }

    #[test]
    fn test_reader_invalid_values_fall_back() {
        let reader = reader(&[
            ("wind.unit", "furlongs"),
            ("line.weight", "heavy"),
            ("line.opacity", "7"),
            ("color.3", "red"),
            ("season", "last year"),
        ]);
        assert_eq!(reader.get_enum("wind.unit"), "mph");
        assert_eq!(reader.get_f64("line.weight"), 3.0);
        assert_eq!(reader.get_f64_in_range("line.opacity", 0.0, 1.0), 1.0);
        assert_eq!(reader.get_color("color.3"), "#e60000");
        assert_eq!(reader.get_optional_i32("season"), None);
    }

    #[test]
    fn test_reader_unknown_names() {
        let reader = reader(&[("line.weight", "2"), ("zoom", "4"), ("basemap", "osm")]);
        assert_eq!(reader.unknown_names(), vec!["basemap", "zoom"]);
    }
}
