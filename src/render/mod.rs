//! Map path rendering interface
//!
//! The crate does not draw maps itself. It turns storm tracks into styled
//! segments and hands them to a `PathRenderer`.
//!
//! Structure:
//! - `palette.rs`: Category → color mapping
//! - `paths.rs`: Segments, tooltip/popup text and the `PathRenderer` trait
//! - `geojson.rs`: GeoJSON FeatureCollection renderer

pub mod geojson;
pub mod palette;
pub mod paths;

pub use geojson::GeoJsonRenderer;
pub use palette::Palette;
pub use paths::{render_tracks, track_segments, PathRenderer, PathSegment, RenderStyle};
