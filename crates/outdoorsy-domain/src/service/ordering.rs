//! Vehicle-type ordering for records read back from the store
//!
//! Name order comes straight from SQLite (BINARY collation, so uppercase
//! sorts before lowercase). Vehicle types are compared after folding to
//! lowercase, which SQL alone does not give us.

use outdoorsy_types::CustomerVehicleRecord;

/// Stable sort by `vehicle_type`, ignoring case
///
/// Records that tie keep their incoming (name) order.
pub fn sort_by_vehicle_type(records: &mut [CustomerVehicleRecord]) {
    records.sort_by_cached_key(|r| r.vehicle_type.to_lowercase());
}
