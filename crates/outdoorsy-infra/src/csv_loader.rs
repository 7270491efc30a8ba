//! Loader for comma- or pipe-delimited customer files
//!
//! Files have no header row and no quoting. Every non-blank line is split on
//! the delimiter and normalized on its own, so one bad line never hides the
//! lines around it.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use encoding_rs::UTF_8;
use thiserror::Error;
use tracing::{debug, warn};

use outdoorsy_domain::service::normalize;
use outdoorsy_types::{CustomerVehicleRecord, Delimiter, Error, RecordError};

#[derive(Error, Debug)]
pub enum CsvLoaderError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse delimited file: {0}")]
    CsvError(#[from] csv::Error),
}

impl From<CsvLoaderError> for Error {
    fn from(e: CsvLoaderError) -> Self {
        match e {
            CsvLoaderError::NotFound(path) => Error::FileNotFound(path.display().to_string()),
            CsvLoaderError::IoError(e) => Error::Io(e),
            CsvLoaderError::CsvError(e) => Error::CsvLoader(e.to_string()),
        }
    }
}

/// Outcome of normalizing one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// 1-based line number in the source file
    pub line: usize,
    pub record: Result<CustomerVehicleRecord, RecordError>,
}

/// Load and normalize every line of a delimited file
///
/// The file is decoded as UTF-8; a byte order mark is dropped and invalid
/// sequences are replaced with U+FFFD.
pub fn load_records<P: AsRef<Path>>(
    path: P,
    delimiter: Delimiter,
) -> Result<Vec<ParsedLine>, CsvLoaderError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(CsvLoaderError::NotFound(path.to_path_buf()));
    }

    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    let (decoded, encoding, had_errors) = UTF_8.decode(&bytes);
    if had_errors {
        warn!(path = %path.display(), "some bytes were not valid {} and were replaced", encoding.name());
    }

    let lines = parse_delimited(&decoded, delimiter)?;
    debug!(path = %path.display(), lines = lines.len(), %delimiter, "loaded delimited file");
    Ok(lines)
}

fn parse_delimited(content: &str, delimiter: Delimiter) -> Result<Vec<ParsedLine>, CsvLoaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::None)
        .from_reader(content.as_bytes());

    let mut lines = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 1);

        let fields: Vec<&str> = record.iter().collect();
        lines.push(ParsedLine {
            line,
            record: normalize(&fields),
        });
    }

    Ok(lines)
}
