//! HURDAT2 record parsing
//!
//! Converts grouped raw records into a flat, ordered list of typed
//! observations. Parsing is all-or-nothing: the first malformed line aborts
//! the whole batch with the storm identifier and the raw line attached, so a
//! truncated track can never slip through.

use super::coordinates::{convert, Axis};
use super::data::{ObservationRow, RawStormRecord};
use super::error::{HurdatError, Result};
use super::progress::{NoProgress, ProgressReporter};
use chrono::NaiveDateTime;

/// Field delimiter used in headers and observation lines
pub const FIELD_DELIMITER: char = ',';

/// Timestamp format of the concatenated date and time fields
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M";

// Positional offsets within an observation line
const DATE: usize = 0;
const TIME: usize = 1;
const STATUS: usize = 3;
const LATITUDE: usize = 4;
const LONGITUDE: usize = 5;
const MAX_WIND: usize = 6;
const MIN_PRESSURE: usize = 7;

/// Minimum number of fields an observation line must carry
pub const MIN_OBSERVATION_FIELDS: usize = MIN_PRESSURE + 1;

/// Identifier and name extracted from a storm header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StormHeader {
    pub storm_id: String,
    pub name: String,
}

/// Parse a header line such as `AL092021,                IDA,     40,`
pub fn parse_header(header: &str) -> Result<StormHeader> {
    let fields: Vec<&str> = header.split(FIELD_DELIMITER).map(str::trim).collect();

    let storm_id = fields
        .first()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| HurdatError::schema(header, "missing storm identifier"))?;
    let name = fields
        .get(1)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| HurdatError::schema(header, "missing storm name"))?;

    Ok(StormHeader {
        storm_id: storm_id.to_string(),
        name: name.to_string(),
    })
}

/// Parse one observation line belonging to `header`
pub fn parse_observation(header: &StormHeader, line: &str) -> Result<ObservationRow> {
    let fail = |reason: String| HurdatError::parse(&header.storm_id, line, reason);

    let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
    if fields.len() < MIN_OBSERVATION_FIELDS {
        return Err(fail(format!(
            "expected at least {} fields, found {}",
            MIN_OBSERVATION_FIELDS,
            fields.len()
        )));
    }

    let date = fields[DATE];
    let time = fields[TIME];
    let timestamp = parse_timestamp(date, time).map_err(fail)?;

    let latitude = parse_coordinate(fields[LATITUDE], Axis::Latitude).map_err(fail)?;
    let longitude = parse_coordinate(fields[LONGITUDE], Axis::Longitude).map_err(fail)?;

    let max_wind = parse_number(fields[MAX_WIND], "max wind").map_err(fail)?;
    let min_pressure = parse_number(fields[MIN_PRESSURE], "min pressure").map_err(fail)?;

    Ok(ObservationRow {
        storm_id: header.storm_id.clone(),
        name: header.name.clone(),
        date: date.to_string(),
        time: time.to_string(),
        timestamp,
        status: fields[STATUS].to_string(),
        latitude,
        longitude,
        max_wind,
        min_pressure,
    })
}

/// Parse every observation of one storm, checking timestamps never go backwards
pub fn parse_record(record: &RawStormRecord) -> Result<Vec<ObservationRow>> {
    let header = parse_header(&record.header)?;
    let mut rows: Vec<ObservationRow> = Vec::with_capacity(record.observations.len());

    for line in &record.observations {
        let row = parse_observation(&header, line)?;
        if let Some(previous) = rows.last() {
            if row.timestamp < previous.timestamp {
                return Err(HurdatError::parse(
                    &header.storm_id,
                    line,
                    format!(
                        "timestamp {} is earlier than previous observation {}",
                        row.timestamp, previous.timestamp
                    ),
                ));
            }
        }
        rows.push(row);
    }

    log::debug!(
        "Parsed storm {} ({}): {} observations",
        header.storm_id,
        header.name,
        rows.len()
    );
    Ok(rows)
}

/// Parse a batch of records into one flat table, preserving input order
pub fn parse_records(records: &[RawStormRecord]) -> Result<Vec<ObservationRow>> {
    parse_records_with_progress(records, &mut NoProgress)
}

/// Same as [`parse_records`], reporting progress after each storm
pub fn parse_records_with_progress(
    records: &[RawStormRecord],
    progress: &mut dyn ProgressReporter,
) -> Result<Vec<ObservationRow>> {
    let total = records.len();
    let mut rows = Vec::new();

    for (index, record) in records.iter().enumerate() {
        rows.extend(parse_record(record)?);
        progress.advance(index + 1, total);
    }
    progress.finish(total);

    log::info!("Parsed {} storms into {} observations", total, rows.len());
    Ok(rows)
}

/// Combine an 8-digit date and a 4-digit time into a timestamp
fn parse_timestamp(date: &str, time: &str) -> std::result::Result<NaiveDateTime, String> {
    if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("invalid date '{}', expected YYYYMMDD", date));
    }
    if time.len() != 4 || !time.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("invalid time '{}', expected HHMM", time));
    }

    let combined = format!("{}{}", date, time);
    NaiveDateTime::parse_from_str(&combined, TIMESTAMP_FORMAT)
        .map_err(|e| format!("invalid timestamp '{}': {}", combined, e))
}

fn parse_coordinate(token: &str, axis: Axis) -> std::result::Result<f64, String> {
    let value = convert(token, axis).map_err(|e| e.to_string())?;
    if value.abs() > axis.limit() {
        return Err(format!(
            "{} {} outside [-{limit}, {limit}]",
            axis,
            value,
            limit = axis.limit()
        ));
    }
    Ok(value)
}

fn parse_number(field: &str, what: &str) -> std::result::Result<f64, String> {
    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(format!("non-finite {} '{}'", what, field)),
        Err(e) => Err(format!("invalid {} '{}': {}", what, field, e)),
    }
}
