//! Error types for outdoorsy

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Reasons a single delimited line cannot become a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("vehicle length {raw:?} contains no digits")]
    NoDigits { raw: String },

    #[error("vehicle length {raw:?} is too large")]
    LengthOutOfRange { raw: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid delimiter {0:?}: choose either comma or pipe")]
    InvalidDelimiter(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Malformed record on line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: RecordError,
    },

    #[error("No customer table exists yet")]
    SchemaMissing,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("CSV loader error: {0}")]
    CsvLoader(String),
}

impl Error {
    /// True when the error only means nothing has been imported yet
    pub fn is_no_data(&self) -> bool {
        matches!(self, Error::SchemaMissing)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
