//! Query Service - Read stored records back

use serde::Serialize;

use outdoorsy_domain::repository::CustomerRepository;
use outdoorsy_types::{CustomerVehicleRecord, Result, SortKey};

/// Records in display order together with the order that produced them
#[derive(Debug, Clone, Serialize)]
pub struct CustomerListing {
    pub sort: SortKey,
    pub records: Vec<CustomerVehicleRecord>,
}

impl CustomerListing {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// List every stored record in `sort` order
///
/// Propagates `SchemaMissing` untouched; callers treat it as "no data yet".
pub fn list_customers<R: CustomerRepository>(repo: &R, sort: SortKey) -> Result<CustomerListing> {
    let records = repo.query(sort)?;
    Ok(CustomerListing { sort, records })
}
