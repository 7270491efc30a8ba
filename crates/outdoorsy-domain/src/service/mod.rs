//! Domain services

pub mod normalizer;
pub mod ordering;

pub use normalizer::{normalize, normalize_line, parse_vehicle_length};
pub use ordering::sort_by_vehicle_type;
