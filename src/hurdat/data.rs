use chrono::NaiveDateTime;
use serde::Serialize;

/// One storm as it appears in the archive: header line plus its observation lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStormRecord {
    pub header: String,
    pub observations: Vec<String>,
}

impl RawStormRecord {
    pub fn new(header: impl Into<String>, observations: Vec<String>) -> Self {
        RawStormRecord {
            header: header.into(),
            observations,
        }
    }

    /// Storm identifier (first header field), e.g. `AL092021`
    ///
    /// Returns the raw, trimmed field; the parser validates it.
    pub fn storm_id(&self) -> &str {
        self.header.split(',').next().unwrap_or("").trim()
    }

    /// Season year, taken from the last four characters of the identifier
    pub fn year(&self) -> Option<i32> {
        let id = self.storm_id();
        let start = id.len().checked_sub(4)?;
        id.get(start..)?.parse().ok()
    }
}

/// A single point-in-time measurement of a storm
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationRow {
    /// Storm identifier (basin, number, year)
    pub storm_id: String,
    /// Storm name, `UNNAMED` for early seasons
    pub name: String,
    /// Calendar date as written in the archive (YYYYMMDD)
    pub date: String,
    /// Clock time as written in the archive (HHMM, UTC)
    pub time: String,
    /// Combined date and time
    pub timestamp: NaiveDateTime,
    /// Status code (HU, TS, TD, EX, ...)
    pub status: String,
    /// Signed decimal degrees, south negative
    pub latitude: f64,
    /// Signed decimal degrees, west negative
    pub longitude: f64,
    /// Maximum sustained wind
    pub max_wind: f64,
    /// Minimum central pressure (mb), -999 when unknown
    pub min_pressure: f64,
}

impl ObservationRow {
    /// (lat, lon) pair in the order map libraries take it
    pub fn point(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}
