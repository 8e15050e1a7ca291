//! Core types for the ward roster: the patient record, its fixed wire
//! layout, field enumerations, hospital-local time handling, and the shared
//! error taxonomy.

pub mod enums;
pub mod error;
pub mod record;
pub mod time;

pub use enums::{Floor, PatientStatus, Sex, Ward};
pub use error::{CollisionField, Result, RosterError};
pub use record::{
    AGE_MAX, AGE_MIN, ARCHIVE_HEADERS, ArchiveEntry, BED_MAX, BED_MIN, PatientRecord,
    WIRE_FIELD_COUNT, WIRE_HEADERS,
};
pub use time::{
    TIMESTAMP_FORMAT, format_timestamp, hospital_now, hospital_offset, parse_timestamp,
    timestamp_date,
};
