//! HURDAT2 parsing and normalization
//!
//! Structure:
//! - `archive.rs`: Grouping archive lines into raw storm records, season filter, download
//! - `coordinates.rs`: Hemisphere tokens to signed decimal degrees
//! - `parser.rs`: Raw records to typed observation rows
//! - `category.rs`: Wind speed to intensity category
//! - `aggregate.rs`: Per-storm peak category, tracks and summaries
//! - `table.rs`: Polars DataFrame materialization and CSV export
//! - `progress.rs`: Optional progress reporting
//! - `error.rs`: Error types

pub mod aggregate;
pub mod archive;
pub mod category;
pub mod coordinates;
pub mod data;
pub mod error;
pub mod parser;
pub mod progress;
pub mod table;

// Re-exports for convenience
pub use aggregate::{StormSummary, StormTrack, TrackRow};
pub use category::{Category, ClassifiedRow};
pub use coordinates::Axis;
pub use data::{ObservationRow, RawStormRecord};
pub use error::{HurdatError, Result};
pub use progress::{LogProgress, NoProgress, ProgressReporter};
