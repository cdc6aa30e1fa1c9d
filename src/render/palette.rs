//! Category color palette
//!
//! Every intensity category maps to one hex color. The defaults come from
//! properties.json (a light-to-dark red ramp, TS palest), and any entry can
//! be overridden through configuration.

use crate::hurdat::Category;

/// Property name holding the color of `category`, e.g. `color.TS`
pub fn color_property(category: Category) -> String {
    format!("color.{}", category.label())
}

/// Hex color per category, indexed in [`Category::ALL`] order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [String; 6],
}

impl Palette {
    /// Build a palette by looking up each category's color
    pub fn from_fn(mut color_of: impl FnMut(Category) -> String) -> Self {
        Palette {
            colors: Category::ALL.map(&mut color_of),
        }
    }

    /// Hex color for a category
    pub fn color(&self, category: Category) -> &str {
        &self.colors[category as usize]
    }
}

impl Default for Palette {
    fn default() -> Self {
        let defaults = crate::properties::registry();
        Palette::from_fn(|category| {
            defaults
                .get_default(&color_property(category))
                .unwrap_or("#808080")
                .to_string()
        })
    }
}

/// Parse a hex color string to RGB array
///
/// Supports formats:
/// - `#RRGGBB` (6 hex digits)
/// - `#RRGGBBAA` (8 hex digits, alpha ignored)
/// - `RRGGBB` / `RRGGBBAA` (without #)
pub fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.trim_start_matches('#');

    if hex.len() != 6 && hex.len() != 8 {
        log::debug!("Invalid hex color length '{}': {}", hex, hex.len());
        return None;
    }

    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;

    Some([r, g, b])
}
