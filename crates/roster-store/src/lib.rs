//! The record-store seam.
//!
//! The production deployment keeps the roster in a remote spreadsheet; this
//! crate abstracts that surface behind [`RecordStore`], a row-oriented table
//! with a header row and 1-based addressing. Two implementations ship here:
//! [`CsvStore`] persists to a CSV file on disk and [`MemoryStore`] backs
//! tests and dry runs.
//!
//! None of the implementations coordinate between sessions: every write
//! blindly overwrites by row position computed from a possibly stale read.
//! Callers own that trade-off.

mod csv_store;
mod memory;
mod types;

use std::collections::BTreeMap;

use roster_model::Result;

pub use csv_store::CsvStore;
pub use memory::MemoryStore;
pub use types::{Column, StoreRow};

/// Row-oriented table with a reserved header row.
///
/// Row 1 is the header; data rows start at row 2. Updates address rows that
/// may not exist yet; implementations grow the table with blank cells as
/// needed, mirroring spreadsheet semantics.
pub trait RecordStore {
    /// Every raw row, header included, in physical order.
    fn all_rows(&self) -> Result<Vec<Vec<String>>>;

    /// Append a row after the last physical row; returns its address.
    fn append_row(&mut self, cells: &[String]) -> Result<StoreRow>;

    /// Overwrite a single cell.
    fn update_cell(&mut self, row: StoreRow, column: Column, value: &str) -> Result<()>;

    /// Overwrite a contiguous run of cells starting at `start`.
    ///
    /// Not atomic on any shipped backend: a failure mid-write can leave the
    /// row with mismatched fields.
    fn update_range(&mut self, row: StoreRow, start: Column, values: &[String]) -> Result<()>;

    /// Physically remove a row, shifting every later row up by one.
    fn delete_row(&mut self, row: StoreRow) -> Result<()>;

    /// Data rows keyed by trimmed header name.
    ///
    /// Cells beyond the header width are dropped; missing cells are empty.
    fn all_records(&self) -> Result<Vec<BTreeMap<String, String>>> {
        let rows = self.all_rows()?;
        let mut iter = rows.into_iter();
        let Some(header) = iter.next() else {
            return Ok(Vec::new());
        };
        let headers: Vec<String> = header.iter().map(|h| h.trim().to_string()).collect();
        let records = iter
            .map(|row| {
                headers
                    .iter()
                    .enumerate()
                    .map(|(i, name)| {
                        let value = row.get(i).cloned().unwrap_or_default();
                        (name.clone(), value)
                    })
                    .collect()
            })
            .collect();
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_keyed_by_trimmed_headers() {
        let store = MemoryStore::with_rows(vec![
            vec![" Name ".to_string(), "IC Number".to_string()],
            vec!["AHMAD".to_string(), "9001".to_string()],
            vec!["SITI".to_string()],
        ]);
        let records = store.all_records().expect("records");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["Name"], "AHMAD");
        assert_eq!(records[0]["IC Number"], "9001");
        // Short rows read as empty cells under the remaining headers.
        assert_eq!(records[1]["Name"], "SITI");
        assert_eq!(records[1]["IC Number"], "");
    }

    #[test]
    fn empty_store_has_no_records() {
        let store = MemoryStore::new();
        assert!(store.all_records().expect("records").is_empty());
    }
}
