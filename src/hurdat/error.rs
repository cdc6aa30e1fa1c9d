use thiserror::Error;

/// Errors that can occur while reading and parsing a HURDAT2 archive
#[derive(Debug, Error)]
pub enum HurdatError {
    /// Malformed observation line, numeric field or timestamp
    #[error("Parse error in storm {storm_id}: {reason} (line: '{line}')")]
    Parse {
        storm_id: String,
        line: String,
        reason: String,
    },

    /// Malformed coordinate token, before record context is attached
    #[error("Invalid coordinate '{token}': {reason}")]
    Coordinate { token: String, reason: String },

    /// Storm header missing its identifier, name or count
    #[error("Schema error: {reason} (header: '{header}')")]
    Schema { header: String, reason: String },

    /// Reading the archive or writing an export failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or GeoJSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Columnar table construction or CSV export error
    #[error("Table error: {0}")]
    Table(#[from] polars::error::PolarsError),

    /// Archive retrieval error
    #[error("Download error: {0}")]
    Download(String),

    /// Configuration error (unreadable override file, bad property value)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HurdatError {
    /// Build a parse error carrying the storm and the offending raw line
    pub fn parse(storm_id: &str, line: &str, reason: impl Into<String>) -> Self {
        HurdatError::Parse {
            storm_id: storm_id.to_string(),
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    /// Build a schema error for a storm header
    pub fn schema(header: &str, reason: impl Into<String>) -> Self {
        HurdatError::Schema {
            header: header.to_string(),
            reason: reason.into(),
        }
    }

    /// True for every failure that stems from malformed record content
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            HurdatError::Parse { .. } | HurdatError::Coordinate { .. }
        )
    }
}

/// Type alias for Results using HurdatError
pub type Result<T> = std::result::Result<T, HurdatError>;
