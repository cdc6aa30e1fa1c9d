//! HURDAT2 hurricane track library
//!
//! Parses NOAA best-track archives into a flat table of observations,
//! classifies each observation by intensity, annotates storms with their
//! peak category and turns tracks into styled map segments.
//!
//! Module organization:
//! - `hurdat`: Archive reading, parsing, classification and aggregation
//! - `render`: Palette, path segments and GeoJSON export
//! - `pipeline`: parse → classify → aggregate in one call
//! - `config` / `properties`: Settings with defaults from properties.json

pub mod config;
pub mod hurdat;
pub mod pipeline;
pub mod properties;
pub mod render;
