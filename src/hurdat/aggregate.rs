//! Per-storm aggregation
//!
//! The peak category of a storm is the highest numbered category reached by
//! any of its observations. Storms that never reach hurricane strength peak
//! at TS. The peak is broadcast back onto every row so the table stays
//! denormalized.

use super::category::{Category, ClassifiedRow};
use super::data::ObservationRow;
use serde::Serialize;
use std::collections::HashMap;

/// An observation annotated with its own category and its storm's peak
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackRow {
    #[serde(flatten)]
    pub observation: ObservationRow,
    pub category: Category,
    pub peak_category: Category,
}

/// All rows of one storm, in observation order
#[derive(Debug, Clone, PartialEq)]
pub struct StormTrack {
    pub storm_id: String,
    pub name: String,
    pub rows: Vec<TrackRow>,
}

impl StormTrack {
    pub fn peak_category(&self) -> Option<Category> {
        self.rows.first().map(|r| r.peak_category)
    }

    /// Ordered (lat, lon) points of the whole track
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.rows.iter().map(|r| r.observation.point()).collect()
    }
}

/// Collapsed, one-row-per-storm view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StormSummary {
    pub storm_id: String,
    pub name: String,
    pub peak_category: Category,
    pub observation_count: usize,
}

/// Highest numbered category among `categories`, or TS if none is numbered
pub fn peak_category<I>(categories: I) -> Category
where
    I: IntoIterator<Item = Category>,
{
    let highest = categories.into_iter().filter(|c| c.is_hurricane()).max();
    match highest {
        Some(category) => category,
        None => Category::TropicalStorm,
    }
}

/// Annotate every row with the peak category of its storm
pub fn annotate_peak_category(rows: Vec<ClassifiedRow>) -> Vec<TrackRow> {
    let mut peaks: HashMap<String, Category> = HashMap::new();
    for row in &rows {
        let peak = peaks
            .entry(row.observation.storm_id.clone())
            .or_insert(Category::TropicalStorm);
        *peak = peak_category([*peak, row.category]);
    }

    let annotated: Vec<TrackRow> = rows
        .into_iter()
        .map(|row| {
            let peak_category = peaks
                .get(&row.observation.storm_id)
                .copied()
                .unwrap_or(Category::TropicalStorm);
            TrackRow {
                observation: row.observation,
                category: row.category,
                peak_category,
            }
        })
        .collect();

    log::info!(
        "Annotated {} rows across {} storms",
        annotated.len(),
        peaks.len()
    );
    annotated
}

/// Group annotated rows into tracks, in order of first appearance
pub fn group_tracks(rows: &[TrackRow]) -> Vec<StormTrack> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tracks: Vec<StormTrack> = Vec::new();

    for row in rows {
        let id = row.observation.storm_id.as_str();
        let slot = match index.get(id) {
            Some(&slot) => slot,
            None => {
                index.insert(id, tracks.len());
                tracks.push(StormTrack {
                    storm_id: row.observation.storm_id.clone(),
                    name: row.observation.name.clone(),
                    rows: Vec::new(),
                });
                tracks.len() - 1
            }
        };
        tracks[slot].rows.push(row.clone());
    }

    tracks
}

/// One summary per storm, in order of first appearance
pub fn summarize(rows: &[TrackRow]) -> Vec<StormSummary> {
    group_tracks(rows)
        .into_iter()
        .map(|track| StormSummary {
            peak_category: peak_category(track.rows.iter().map(|r| r.category)),
            observation_count: track.rows.len(),
            storm_id: track.storm_id,
            name: track.name,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hurdat::category::classify_rows;
    use chrono::NaiveDate;

    fn observation(storm_id: &str, hour: u32, max_wind: f64) -> ObservationRow {
        let timestamp = NaiveDate::from_ymd_opt(2021, 8, 29)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        ObservationRow {
            storm_id: storm_id.to_string(),
            name: "TEST".to_string(),
            date: "20210829".to_string(),
            time: format!("{:02}00", hour),
            timestamp,
            status: "HU".to_string(),
            latitude: 25.0,
            longitude: -80.0 - hour as f64,
            max_wind,
            min_pressure: 990.0,
        }
    }

    #[test]
    fn test_peak_category_mixed_order() {
        let peak = peak_category([
            Category::TropicalStorm,
            Category::One,
            Category::Three,
            Category::Two,
        ]);
        assert_eq!(peak, Category::Three);
    }

    #[test]
    fn test_peak_category_all_tropical_storm() {
        assert_eq!(
            peak_category([Category::TropicalStorm, Category::TropicalStorm]),
            Category::TropicalStorm
        );
        assert_eq!(
            peak_category(Vec::<Category>::new()),
            Category::TropicalStorm
        );
    }

    #[test]
    fn test_annotate_broadcasts_peak_per_storm() {
        // Winds map to TS, 1, 3, 2 for the first storm and TS-only for the second
        let rows = classify_rows(vec![
            observation("AL01", 0, 50.0),
            observation("AL01", 6, 80.0),
            observation("AL01", 12, 120.0),
            observation("AL01", 18, 100.0),
            observation("AL02", 0, 40.0),
            observation("AL02", 6, 73.0),
        ]);

        let annotated = annotate_peak_category(rows);
        assert_eq!(annotated.len(), 6);

        let categories: Vec<Category> = annotated.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![
                Category::TropicalStorm,
                Category::One,
                Category::Three,
                Category::Two,
                Category::TropicalStorm,
                Category::TropicalStorm,
            ]
        );
        assert!(annotated[..4]
            .iter()
            .all(|r| r.peak_category == Category::Three));
        assert!(annotated[4..]
            .iter()
            .all(|r| r.peak_category == Category::TropicalStorm));
    }

    #[test]
    fn test_group_tracks_and_summaries_keep_first_appearance_order() {
        let annotated = annotate_peak_category(classify_rows(vec![
            observation("AL05", 0, 160.0),
            observation("AL05", 6, 140.0),
            observation("AL01", 0, 60.0),
        ]));

        let tracks = group_tracks(&annotated);
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].storm_id, "AL05");
        assert_eq!(tracks[0].rows.len(), 2);
        assert_eq!(tracks[0].peak_category(), Some(Category::Five));
        assert_eq!(tracks[0].points(), vec![(25.0, -80.0), (25.0, -86.0)]);
        assert_eq!(tracks[1].storm_id, "AL01");

        let summaries = summarize(&annotated);
        assert_eq!(
            summaries,
            vec![
                StormSummary {
                    storm_id: "AL05".to_string(),
                    name: "TEST".to_string(),
                    peak_category: Category::Five,
                    observation_count: 2,
                },
                StormSummary {
                    storm_id: "AL01".to_string(),
                    name: "TEST".to_string(),
                    peak_category: Category::TropicalStorm,
                    observation_count: 1,
                },
            ]
        );
    }
}
