//! Record, delimiter and sort key types

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Column headers shown when records are rendered as a table
pub const COLUMN_HEADERS: [&str; 6] = [
    "First Name",
    "Last Name",
    "Email",
    "Vehicle Type",
    "Vehicle Name",
    "Vehicle Length (in FT.)",
];

/// One normalized customer/vehicle row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerVehicleRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub vehicle_type: String,
    pub vehicle_name: String,
    /// Length in feet
    pub vehicle_length: i64,
}

impl CustomerVehicleRecord {
    /// Number of fields in an input line
    pub const FIELD_COUNT: usize = 6;

    /// Fields in column order, formatted for display
    pub fn display_fields(&self) -> [String; 6] {
        [
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            self.vehicle_type.clone(),
            self.vehicle_name.clone(),
            self.vehicle_length.to_string(),
        ]
    }
}

/// Field separator of an input file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Pipe,
}

impl Delimiter {
    /// Resolve a delimiter by its name ("comma" or "pipe")
    pub fn from_name(name: &str) -> Result<Self, Error> {
        match name {
            "comma" => Ok(Delimiter::Comma),
            "pipe" => Ok(Delimiter::Pipe),
            other => Err(Error::InvalidDelimiter(other.to_string())),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Pipe => '|',
        }
    }

    pub fn as_byte(self) -> u8 {
        self.as_char() as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Delimiter::Comma => "comma",
            Delimiter::Pipe => "pipe",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Ordering applied when records are read back
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum SortKey {
    /// Ascending by (first_name, last_name), case-sensitive
    #[default]
    #[value(name = "name")]
    #[serde(rename = "name")]
    ByName,

    /// Ascending by vehicle_type, case-insensitive
    #[value(name = "vehicle_type")]
    #[serde(rename = "vehicle_type")]
    ByVehicleType,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::ByName => write!(f, "name"),
            SortKey::ByVehicleType => write!(f, "vehicle_type"),
        }
    }
}
