//! Repository trait definitions for data persistence

use outdoorsy_types::{CustomerVehicleRecord, Error, SortKey};

/// Repository for ingested customer/vehicle records
pub trait CustomerRepository {
    /// Ensure the customer table exists. Safe to call repeatedly.
    fn create_schema(&self) -> Result<(), Error>;

    /// Append one record as a new row
    fn insert(&self, record: &CustomerVehicleRecord) -> Result<(), Error>;

    /// Append every record as a new row, all or nothing
    fn insert_all(&self, records: &[CustomerVehicleRecord]) -> Result<usize, Error>;

    /// Read every record back in the requested order
    ///
    /// Fails with [`Error::SchemaMissing`] when no table exists yet.
    fn query(&self, sort_key: SortKey) -> Result<Vec<CustomerVehicleRecord>, Error>;

    /// Number of stored rows
    fn count(&self) -> Result<usize, Error>;
}
