//! Infrastructure layer - loaders for delimited customer files

pub mod csv_loader;

pub use csv_loader::{load_records, CsvLoaderError, ParsedLine};
