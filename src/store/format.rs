//! Record line format
//!
//! One user per line, fields joined by `|` in the order
//! `full_name|phone|email|age`. Field values are written verbatim; a `|`
//! inside a value shifts the remaining fields on read.

use crate::user::UserRecord;

pub const FIELD_SEPARATOR: &str = "|";

/// Fields a line needs to take part in the duplicate check
pub const IDENTITY_FIELDS: usize = 3;

/// Fields a line needs to be listed as a record
pub const RECORD_FIELDS: usize = 4;

/// Format a record as a store line (without trailing newline)
pub fn format_record(record: &UserRecord) -> String {
    record.fields().join(FIELD_SEPARATOR)
}

/// Parse a store line into a record; extra trailing fields are ignored
pub fn parse_record(line: &str) -> Option<UserRecord> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if parts.len() < RECORD_FIELDS {
        return None;
    }
    Some(UserRecord {
        full_name: parts[0].to_string(),
        phone: parts[1].to_string(),
        email: parts[2].to_string(),
        age: parts[3].to_string(),
    })
}

/// True if any identity field of the line equals the given value, ignoring case
pub fn line_matches(line: &str, full_name: &str, phone: &str, email: &str) -> bool {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if parts.len() < IDENTITY_FIELDS {
        return false;
    }
    eq_ignore_case(parts[0], full_name)
        || eq_ignore_case(parts[1], phone)
        || eq_ignore_case(parts[2], email)
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
