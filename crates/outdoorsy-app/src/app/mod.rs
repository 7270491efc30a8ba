//! Application Layer
//!
//! Orchestrates between the CLI and the domain/infrastructure layers.
//!
//! - `ingest_service`: import a delimited file into the store
//! - `query_service`: read stored records back in order

pub mod ingest_service;
pub mod query_service;

pub use ingest_service::{ingest_file, ingest_file_at, IngestPolicy, IngestReport, RejectedLine};
pub use query_service::{list_customers, CustomerListing};
