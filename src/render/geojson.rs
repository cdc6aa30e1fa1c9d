//! GeoJSON export of storm path segments
//!
//! Produces a FeatureCollection of LineString features that web map
//! libraries (Leaflet, folium, MapLibre) can load directly. GeoJSON
//! positions are `[lon, lat]`, the reverse of the (lat, lon) pairs used
//! elsewhere in the crate.

use super::paths::{PathRenderer, PathSegment};
use crate::hurdat::Result;
use serde_json::{json, Value};
use std::path::Path;

/// Collects segments as GeoJSON features
#[derive(Debug, Default)]
pub struct GeoJsonRenderer {
    features: Vec<Value>,
}

impl GeoJsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of features collected so far
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// The complete FeatureCollection
    pub fn feature_collection(&self) -> Value {
        json!({
            "type": "FeatureCollection",
            "features": self.features,
        })
    }

    /// Write the FeatureCollection as pretty-printed JSON
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(&self.feature_collection())?;
        std::fs::write(path, content)?;
        log::info!("Wrote {} features to {}", self.features.len(), path.display());
        Ok(())
    }
}

fn feature(segment: &PathSegment) -> Value {
    let coordinates: Vec<[f64; 2]> = segment
        .points
        .iter()
        .map(|&(lat, lon)| [lon, lat])
        .collect();

    json!({
        "type": "Feature",
        "geometry": {
            "type": "LineString",
            "coordinates": coordinates,
        },
        "properties": {
            "storm_id": segment.storm_id,
            "name": segment.name,
            "category": segment.category,
            "color": segment.color,
            "weight": segment.weight,
            "opacity": segment.opacity,
            "tooltip": segment.tooltip,
            "popup": segment.popup,
        },
    })
}

impl PathRenderer for GeoJsonRenderer {
    fn draw_segment(&mut self, segment: &PathSegment) -> Result<()> {
        self.features.push(feature(segment));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hurdat::Category;

    fn sample_segment() -> PathSegment {
        PathSegment {
            storm_id: "AL092021".to_string(),
            name: "IDA".to_string(),
            points: vec![(28.7, -89.6), (29.1, -90.2)],
            category: Category::Four,
            color: "#ff0000".to_string(),
            weight: 3.0,
            opacity: 1.0,
            tooltip: "IDA".to_string(),
            popup: "Storm:    IDA".to_string(),
        }
    }

    #[test]
    fn test_feature_swaps_to_lon_lat() {
        let mut renderer = GeoJsonRenderer::new();
        renderer.draw_segment(&sample_segment()).unwrap();
        assert_eq!(renderer.len(), 1);

        let collection = renderer.feature_collection();
        assert_eq!(collection["type"], "FeatureCollection");

        let feature = &collection["features"][0];
        assert_eq!(feature["geometry"]["type"], "LineString");
        assert_eq!(feature["geometry"]["coordinates"], json!([[-89.6, 28.7], [-90.2, 29.1]]));
        assert_eq!(feature["properties"]["category"], "4");
        assert_eq!(feature["properties"]["color"], "#ff0000");
        assert_eq!(feature["properties"]["storm_id"], "AL092021");
    }

    #[test]
    fn test_empty_collection() {
        let renderer = GeoJsonRenderer::new();
        assert!(renderer.is_empty());
        assert_eq!(renderer.feature_collection()["features"], json!([]));
    }

    #[test]
    fn test_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracks.geojson");

        let mut renderer = GeoJsonRenderer::new();
        renderer.draw_segment(&sample_segment()).unwrap();
        renderer.write(&path).unwrap();

        let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, renderer.feature_collection());
    }
}
