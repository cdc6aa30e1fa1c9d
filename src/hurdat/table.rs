//! Annotated rows to Polars DataFrame conversion
//!
//! Materializes the denormalized track table in columnar form for analysis
//! and CSV export. Column order matches [`COLUMNS`].

use super::aggregate::TrackRow;
use super::error::Result;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Column names in output order
pub const COLUMNS: [&str; 12] = [
    "storm_id",
    "name",
    "date",
    "time",
    "timestamp",
    "status",
    "latitude",
    "longitude",
    "max_wind",
    "min_pressure",
    "category",
    "peak_category",
];

/// Build a DataFrame with one row per observation
pub fn to_dataframe(rows: &[TrackRow]) -> Result<DataFrame> {
    let millis: Vec<i64> = rows
        .iter()
        .map(|r| r.observation.timestamp.and_utc().timestamp_millis())
        .collect();
    let timestamp = Series::new("timestamp".into(), millis)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?
        .into_column();

    let columns = vec![
        text_column("storm_id", rows, |r| r.observation.storm_id.as_str()),
        text_column("name", rows, |r| r.observation.name.as_str()),
        text_column("date", rows, |r| r.observation.date.as_str()),
        text_column("time", rows, |r| r.observation.time.as_str()),
        timestamp,
        text_column("status", rows, |r| r.observation.status.as_str()),
        number_column("latitude", rows, |r| r.observation.latitude),
        number_column("longitude", rows, |r| r.observation.longitude),
        number_column("max_wind", rows, |r| r.observation.max_wind),
        number_column("min_pressure", rows, |r| r.observation.min_pressure),
        text_column("category", rows, |r| r.category.label()),
        text_column("peak_category", rows, |r| r.peak_category.label()),
    ];

    let df = DataFrame::new(columns)?;
    log::debug!("Track table: {} rows, {} columns", df.height(), df.width());
    Ok(df)
}

fn text_column(name: &str, rows: &[TrackRow], f: impl Fn(&TrackRow) -> &str) -> Column {
    let values: Vec<&str> = rows.iter().map(f).collect();
    Series::new(name.into(), values).into_column()
}

fn number_column(name: &str, rows: &[TrackRow], f: impl Fn(&TrackRow) -> f64) -> Column {
    let values: Vec<f64> = rows.iter().map(f).collect();
    Series::new(name.into(), values).into_column()
}

/// Write the track table as CSV with a header row
pub fn write_csv(rows: &[TrackRow], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut df = to_dataframe(rows)?;
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    log::info!("Wrote {} rows to {}", df.height(), path.display());
    Ok(())
}
