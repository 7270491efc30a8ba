//! Turns raw delimited fields into a [`CustomerVehicleRecord`]
//!
//! Text fields pass through untouched (no trimming, no email check).
//! Only the vehicle length is coerced: every character outside `0-9` is
//! dropped and the remaining digits are parsed as a decimal integer.

use outdoorsy_types::{CustomerVehicleRecord, Delimiter, RecordError};

/// Normalize the six raw fields of one input line
pub fn normalize<S: AsRef<str>>(fields: &[S]) -> Result<CustomerVehicleRecord, RecordError> {
    let [first_name, last_name, email, vehicle_type, vehicle_name, vehicle_length] = fields else {
        return Err(RecordError::FieldCount {
            expected: CustomerVehicleRecord::FIELD_COUNT,
            found: fields.len(),
        });
    };

    Ok(CustomerVehicleRecord {
        first_name: first_name.as_ref().to_string(),
        last_name: last_name.as_ref().to_string(),
        email: email.as_ref().to_string(),
        vehicle_type: vehicle_type.as_ref().to_string(),
        vehicle_name: vehicle_name.as_ref().to_string(),
        vehicle_length: parse_vehicle_length(vehicle_length.as_ref())?,
    })
}

/// Split a raw line on `delimiter` and normalize it
///
/// No quoting or escaping is recognised.
pub fn normalize_line(line: &str, delimiter: Delimiter) -> Result<CustomerVehicleRecord, RecordError> {
    let fields: Vec<&str> = line.split(delimiter.as_char()).collect();
    normalize(&fields)
}

/// Strip non-digits from `raw` and parse what is left
///
/// "22ft" -> 22, "0040" -> 40, "22.5 ft" -> 225. A field without any digit
/// is rejected rather than defaulted to zero.
pub fn parse_vehicle_length(raw: &str) -> Result<i64, RecordError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(RecordError::NoDigits {
            raw: raw.to_string(),
        });
    }

    // only overflow can fail once the string is pure ASCII digits
    digits.parse().map_err(|_| RecordError::LengthOutOfRange {
        raw: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_comma_line() {
        let record = normalize_line("Jane,Doe,jane@x.com,SUV,Explorer,22ft", Delimiter::Comma).unwrap();
        assert_eq!(record.first_name, "Jane");
        assert_eq!(record.last_name, "Doe");
        assert_eq!(record.email, "jane@x.com");
        assert_eq!(record.vehicle_type, "SUV");
        assert_eq!(record.vehicle_name, "Explorer");
        assert_eq!(record.vehicle_length, 22);
    }

    #[test]
    fn test_normalize_pipe_line() {
        let record = normalize_line("Greta|Thunberg|greta@future.com|Sailboat|Fridays For Future|32'", Delimiter::Pipe).unwrap();
        assert_eq!(record.vehicle_name, "Fridays For Future");
        assert_eq!(record.vehicle_length, 32);
    }

    #[test]
    fn test_length_without_digits_is_rejected() {
        let err = normalize_line("Jane,Doe,jane@x.com,SUV,Explorer,none", Delimiter::Comma).unwrap_err();
        assert_eq!(err, RecordError::NoDigits { raw: "none".to_string() });

        assert!(matches!(parse_vehicle_length(""), Err(RecordError::NoDigits { .. })));
        assert!(matches!(parse_vehicle_length("ft"), Err(RecordError::NoDigits { .. })));
    }

    #[test]
    fn test_length_strips_every_non_digit() {
        assert_eq!(parse_vehicle_length("22 ft").unwrap(), 22);
        assert_eq!(parse_vehicle_length("007").unwrap(), 7);
        assert_eq!(parse_vehicle_length("22.5ft").unwrap(), 225);
        assert_eq!(parse_vehicle_length("-5").unwrap(), 5);
    }

    #[test]
    fn test_length_overflow() {
        let err = parse_vehicle_length("99999999999999999999ft").unwrap_err();
        assert!(matches!(err, RecordError::LengthOutOfRange { .. }));
    }

    #[test]
    fn test_text_fields_are_not_trimmed() {
        let record = normalize(&[" Jane", "Doe ", "not-an-email", " suv", "", "10"]).unwrap();
        assert_eq!(record.first_name, " Jane");
        assert_eq!(record.last_name, "Doe ");
        assert_eq!(record.email, "not-an-email");
        assert_eq!(record.vehicle_type, " suv");
        assert_eq!(record.vehicle_name, "");
    }

    #[test]
    fn test_wrong_field_count() {
        let err = normalize_line("Jane,Doe,jane@x.com,SUV,22ft", Delimiter::Comma).unwrap_err();
        assert_eq!(err, RecordError::FieldCount { expected: 6, found: 5 });

        let err = normalize_line("a|b|c|d|e|6|extra", Delimiter::Pipe).unwrap_err();
        assert_eq!(err, RecordError::FieldCount { expected: 6, found: 7 });
    }

    #[test]
    fn test_comma_inside_pipe_line_is_plain_text() {
        let record = normalize_line("Jane|Doe, Jr.|jane@x.com|RV|Big, Blue|40", Delimiter::Pipe).unwrap();
        assert_eq!(record.last_name, "Doe, Jr.");
        assert_eq!(record.vehicle_name, "Big, Blue");
    }
}
