//! Ingest Service - Import a delimited file into the store
//!
//! Every line is normalized and inserted as its own unit of work, so a bad
//! line never rolls back rows written before it. What happens after a bad
//! line depends on the [`IngestPolicy`].

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use outdoorsy_domain::repository::CustomerRepository;
use outdoorsy_infra::{load_records, ParsedLine};
use outdoorsy_types::{Delimiter, Error, Result};

use crate::repository::open_store_at;

/// What to do when a line cannot be normalized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IngestPolicy {
    /// Stop at the first malformed line; earlier rows stay committed
    #[default]
    Abort,
    /// Reject malformed lines and keep going
    Skip,
}

/// A line that was not imported
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedLine {
    pub line: usize,
    pub reason: String,
}

/// Summary of one import
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    pub source: PathBuf,
    pub inserted: usize,
    pub rejected: Vec<RejectedLine>,
}

impl IngestReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Import every line of `path` into `repo`
///
/// The table is created first if needed. A missing source file fails with
/// [`Error::FileNotFound`] before anything is written.
pub fn ingest_file<R: CustomerRepository>(
    repo: &R,
    path: &Path,
    delimiter: Delimiter,
    policy: IngestPolicy,
) -> Result<IngestReport> {
    let lines = load_records(path, delimiter)?;
    ingest_lines(repo, path, lines, policy)
}

/// Import `path` into the database file `db_file`
///
/// The source is read before the database is opened, so a missing or
/// unreadable source never leaves an empty database file behind.
pub fn ingest_file_at(
    db_file: &Path,
    path: &Path,
    delimiter: Delimiter,
    policy: IngestPolicy,
) -> Result<IngestReport> {
    let lines = load_records(path, delimiter)?;
    let store = open_store_at(db_file.to_path_buf())?;
    ingest_lines(&store, path, lines, policy)
}

fn ingest_lines<R: CustomerRepository>(
    repo: &R,
    path: &Path,
    lines: Vec<ParsedLine>,
    policy: IngestPolicy,
) -> Result<IngestReport> {
    repo.create_schema()?;

    let mut report = IngestReport {
        source: path.to_path_buf(),
        inserted: 0,
        rejected: Vec::new(),
    };

    for parsed in lines {
        match parsed.record {
            Ok(record) => {
                repo.insert(&record)?;
                report.inserted += 1;
            }
            Err(error) => {
                warn!(path = %path.display(), line = parsed.line, %error, "malformed record");
                match policy {
                    IngestPolicy::Abort => {
                        info!(inserted = report.inserted, "import stopped at malformed record");
                        return Err(Error::MalformedRecord {
                            line: parsed.line,
                            source: error,
                        });
                    }
                    IngestPolicy::Skip => report.rejected.push(RejectedLine {
                        line: parsed.line,
                        reason: error.to_string(),
                    }),
                }
            }
        }
    }

    info!(
        path = %path.display(),
        inserted = report.inserted,
        rejected = report.rejected.len(),
        "import finished"
    );
    Ok(report)
}
