//! Shared track processing pipeline
//!
//! The pipeline:
//! 1. Parses raw storm records into observation rows
//! 2. Classifies each observation by wind speed
//! 3. Annotates every row with its storm's peak category
//! 4. Groups rows into per-storm tracks for rendering
//!
//! Every stage builds a new structure from the previous one; nothing is
//! mutated in place and the first parse failure aborts the run.

use crate::hurdat::aggregate::{annotate_peak_category, group_tracks, summarize};
use crate::hurdat::category::classify_rows;
use crate::hurdat::parser::parse_records_with_progress;
use crate::hurdat::{
    NoProgress, ProgressReporter, RawStormRecord, Result, StormSummary, StormTrack, TrackRow,
};

/// Output of a full pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSet {
    /// Denormalized table, one row per observation, in input order
    pub rows: Vec<TrackRow>,
}

impl TrackSet {
    /// Per-storm tracks in order of first appearance
    pub fn tracks(&self) -> Vec<StormTrack> {
        group_tracks(&self.rows)
    }

    /// Per-storm summaries in order of first appearance
    pub fn summaries(&self) -> Vec<StormSummary> {
        summarize(&self.rows)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Run parse → classify → aggregate over a batch of records
pub fn process_records(records: &[RawStormRecord]) -> Result<TrackSet> {
    process_records_with_progress(records, &mut NoProgress)
}

/// Same as [`process_records`], reporting parse progress
pub fn process_records_with_progress(
    records: &[RawStormRecord],
    progress: &mut dyn ProgressReporter,
) -> Result<TrackSet> {
    let observations = parse_records_with_progress(records, progress)?;
    let classified = classify_rows(observations);
    let rows = annotate_peak_category(classified);
    Ok(TrackSet { rows })
}
