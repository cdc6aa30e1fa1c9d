//! HURDAT2 archive reading
//!
//! The archive is line oriented: every storm starts with a header
//! (`id, name, count,`) followed by exactly `count` observation lines.
//! This module only groups lines into [`RawStormRecord`]s; field parsing
//! lives in the parser.

use super::data::RawStormRecord;
use super::error::{HurdatError, Result};
use super::parser::FIELD_DELIMITER;
use std::path::Path;

/// NOAA's Atlantic basin HURDAT2 archive
pub const ATLANTIC_ARCHIVE_URL: &str =
    "https://www.nhc.noaa.gov/data/hurdat/hurdat2-1851-2023-051124.txt";

/// Number of observation lines announced by a header (third field)
fn observation_count(header: &str) -> Result<usize> {
    let field = header
        .split(FIELD_DELIMITER)
        .nth(2)
        .map(str::trim)
        .ok_or_else(|| HurdatError::schema(header, "missing observation count"))?;

    field
        .parse()
        .map_err(|e| HurdatError::schema(header, format!("invalid observation count '{}': {}", field, e)))
}

/// Group archive text into storm records
///
/// Blank lines between records are skipped. An archive that ends before a
/// header's count is satisfied is a parse error for that storm.
pub fn group_records(text: &str) -> Result<Vec<RawStormRecord>> {
    let mut lines = text.lines().map(|l| l.trim_end_matches('\r'));
    let mut records = Vec::new();

    while let Some(line) = lines.next() {
        if line.trim().is_empty() {
            continue;
        }

        let header = line.to_string();
        let expected = observation_count(&header)?;
        let observations: Vec<String> = lines.by_ref().take(expected).map(String::from).collect();

        let record = RawStormRecord::new(header, observations);
        if record.observations.len() < expected {
            return Err(HurdatError::parse(
                record.storm_id(),
                &record.header,
                format!(
                    "archive ended after {} of {} observations",
                    record.observations.len(),
                    expected
                ),
            ));
        }
        records.push(record);
    }

    log::info!("Grouped archive into {} storm records", records.len());
    Ok(records)
}

/// Read and group an archive file
pub fn read_archive(path: impl AsRef<Path>) -> Result<Vec<RawStormRecord>> {
    let path = path.as_ref();
    log::info!("Reading archive {}", path.display());
    let text = std::fs::read_to_string(path)?;
    group_records(&text)
}

/// Keep only the storms of one season, preserving order
pub fn filter_by_year(records: Vec<RawStormRecord>, year: i32) -> Vec<RawStormRecord> {
    let total = records.len();
    let kept: Vec<RawStormRecord> = records
        .into_iter()
        .filter(|r| r.year() == Some(year))
        .collect();
    log::info!("Kept {} of {} storms for season {}", kept.len(), total, year);
    kept
}

/// Download archive text over HTTP
#[cfg(feature = "download")]
pub fn download(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(120))
        .build()
        .map_err(|e| HurdatError::Download(format!("failed to create HTTP client: {}", e)))?;

    log::info!("Downloading archive from {}", url);
    let response = client
        .get(url)
        .send()
        .map_err(|e| HurdatError::Download(format!("request to {} failed: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(HurdatError::Download(format!(
            "{} returned status {}",
            url, status
        )));
    }

    let text = response
        .text()
        .map_err(|e| HurdatError::Download(format!("failed to read body of {}: {}", url, e)))?;
    log::info!("Downloaded {} bytes", text.len());
    Ok(text)
}
