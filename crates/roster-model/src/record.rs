//! The roster record and its 9-column wire layout.

use serde::{Deserialize, Serialize};

use crate::enums::{Floor, PatientStatus, Sex, Ward};
use crate::error::{Result, RosterError};
use crate::time;

/// Number of cells a record occupies in the backing table.
pub const WIRE_FIELD_COUNT: usize = 9;

/// Canonical header row, column A through I.
pub const WIRE_HEADERS: [&str; WIRE_FIELD_COUNT] = [
    "Name",
    "IC Number",
    "Age",
    "Sex",
    "Ward",
    "Bed",
    "Floor",
    "Status",
    "Last Modified",
];

/// Header row of the archive feed: the record columns plus the archive stamp.
pub const ARCHIVE_HEADERS: [&str; WIRE_FIELD_COUNT + 1] = [
    "Name",
    "IC Number",
    "Age",
    "Sex",
    "Ward",
    "Bed",
    "Floor",
    "Status",
    "Last Modified",
    "Archived At",
];

/// Allowed patient age on the intake form.
pub const AGE_MIN: u32 = 1;
pub const AGE_MAX: u32 = 100;

/// Allowed bed numbers across all wards.
pub const BED_MIN: u32 = 1;
pub const BED_MAX: u32 = 120;

/// One active roster entry.
///
/// `name` is stored uppercased and `identifier` trimmed; construction sites
/// apply that normalization before a record is built. `timestamp` stays a
/// raw wire string because historical rows may not parse; use
/// [`time::parse_timestamp`] when a typed value is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub name: String,
    pub identifier: String,
    pub age: u32,
    pub sex: Sex,
    pub ward: Ward,
    pub bed: u32,
    pub floor: Floor,
    pub status: PatientStatus,
    pub timestamp: String,
}

impl PatientRecord {
    /// Render the record in canonical wire order (columns A..I).
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.identifier.clone(),
            self.age.to_string(),
            self.sex.to_string(),
            self.ward.to_string(),
            self.bed.to_string(),
            self.floor.to_string(),
            self.status.to_string(),
            self.timestamp.clone(),
        ]
    }

    /// Parse a raw store row back into a record.
    ///
    /// Enum and numeric cells must carry recognizable values; the timestamp
    /// cell is taken verbatim (it may be empty or malformed on old rows).
    pub fn from_cells(cells: &[String]) -> Result<Self> {
        if cells.len() < WIRE_FIELD_COUNT {
            return Err(RosterError::store(format!(
                "row has {} cells, expected {WIRE_FIELD_COUNT}",
                cells.len()
            )));
        }
        let parse_num = |raw: &str, field: &'static str| -> Result<u32> {
            raw.trim()
                .parse::<u32>()
                .map_err(|_| RosterError::store(format!("unreadable {field}: {raw:?}")))
        };
        let require_text = |raw: &str, field: &'static str| -> Result<String> {
            if raw.trim().is_empty() {
                Err(RosterError::MissingField(field))
            } else {
                Ok(raw.trim().to_string())
            }
        };
        Ok(PatientRecord {
            name: require_text(&cells[0], "name")?,
            identifier: require_text(&cells[1], "IC number")?,
            age: parse_num(&cells[2], "age")?,
            sex: cells[3].parse().map_err(RosterError::store)?,
            ward: cells[4].parse().map_err(RosterError::store)?,
            bed: parse_num(&cells[5], "bed")?,
            floor: cells[6].parse().map_err(RosterError::store)?,
            status: cells[7].parse().map_err(RosterError::store)?,
            timestamp: cells[8].clone(),
        })
    }

    /// Calendar date of the last modification, when the timestamp parses.
    pub fn modified_date(&self) -> Option<chrono::NaiveDate> {
        time::timestamp_date(&self.timestamp)
    }
}

/// Snapshot of a record taken just before a destructive action.
///
/// Append-only: once written to the archive feed an entry is never read
/// back, mutated, or removed by this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveEntry {
    pub record: PatientRecord,
    pub archived_at: String,
}

impl ArchiveEntry {
    /// The record's nine cells followed by the archive timestamp.
    pub fn to_cells(&self) -> Vec<String> {
        let mut cells = self.record.to_cells();
        cells.push(self.archived_at.clone());
        cells
    }
}
