use thiserror::Error;

/// Errors raised while turning raw shot records into statistics
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShotError {
    /// A required field was absent or could not be read as a number
    #[error("invalid shot record #{index}: field '{field}' {reason}")]
    Validation {
        index: usize,
        field: &'static str,
        reason: String,
    },

    /// Statistics or zone percentages were requested over zero shots
    #[error("no shots to aggregate")]
    EmptyDataset,
}

/// Errors raised when a zone layout does not tile the pitch
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ZoneLayoutError {
    #[error("zones '{first}' and '{second}' overlap")]
    Overlap { first: String, second: String },

    #[error("zone '{zone}' extends past the pitch boundary")]
    OutOfBounds { zone: String },

    #[error("zones cover {covered:.4} of a {expected:.4} pitch area")]
    Coverage { covered: f64, expected: f64 },
}

/// Errors raised by shot data providers
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no shot data found for {0}")]
    NotFound(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
