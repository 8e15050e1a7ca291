//! In-memory table for tests and dry runs.

use roster_model::{Result, RosterError, WIRE_HEADERS};

use crate::types::{Column, StoreRow};
use crate::RecordStore;

/// A [`RecordStore`] held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rows: Vec<Vec<String>>,
}

impl MemoryStore {
    /// Empty table, no header row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table seeded with the canonical roster header row.
    pub fn with_header() -> Self {
        Self::with_rows(vec![WIRE_HEADERS.iter().map(|h| (*h).to_string()).collect()])
    }

    /// Table seeded with arbitrary raw rows (header first, if any).
    pub fn with_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Direct view of the raw rows, for assertions.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn ensure_row(&mut self, row: StoreRow) -> Result<&mut Vec<String>> {
        if row.0 == 0 {
            return Err(RosterError::store("row numbers are 1-based"));
        }
        if self.rows.len() < row.0 {
            self.rows.resize_with(row.0, Vec::new);
        }
        Ok(&mut self.rows[row.index()])
    }
}

impl RecordStore for MemoryStore {
    fn all_rows(&self) -> Result<Vec<Vec<String>>> {
        Ok(self.rows.clone())
    }

    fn append_row(&mut self, cells: &[String]) -> Result<StoreRow> {
        self.rows.push(cells.to_vec());
        Ok(StoreRow(self.rows.len()))
    }

    fn update_cell(&mut self, row: StoreRow, column: Column, value: &str) -> Result<()> {
        let cells = self.ensure_row(row)?;
        if cells.len() <= column.index() {
            cells.resize(column.index() + 1, String::new());
        }
        cells[column.index()] = value.to_string();
        Ok(())
    }

    fn update_range(&mut self, row: StoreRow, start: Column, values: &[String]) -> Result<()> {
        let cells = self.ensure_row(row)?;
        let end = start.index() + values.len();
        if cells.len() < end {
            cells.resize(end, String::new());
        }
        cells[start.index()..end].clone_from_slice(values);
        Ok(())
    }

    fn delete_row(&mut self, row: StoreRow) -> Result<()> {
        if row.0 == 0 || row.0 > self.rows.len() {
            return Err(RosterError::NotFound);
        }
        self.rows.remove(row.index());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_reports_one_based_position() {
        let mut store = MemoryStore::with_header();
        let row = store.append_row(&["A".to_string()]).expect("append");
        assert_eq!(row, StoreRow(2));
    }

    #[test]
    fn updates_grow_the_table() {
        let mut store = MemoryStore::new();
        store
            .update_cell(StoreRow(3), Column::from_letter('C').unwrap(), "x")
            .expect("update");
        assert_eq!(store.rows().len(), 3);
        assert_eq!(store.rows()[2], vec!["", "", "x"]);
    }

    #[test]
    fn range_update_overwrites_in_place() {
        let mut store = MemoryStore::with_rows(vec![
            vec!["h".to_string()],
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
        ]);
        store
            .update_range(StoreRow(2), Column::A, &["x".to_string(), "y".to_string()])
            .expect("update");
        assert_eq!(store.rows()[1], vec!["x", "y", "c"]);
    }

    #[test]
    fn delete_shifts_later_rows() {
        let mut store = MemoryStore::with_rows(vec![
            vec!["h".to_string()],
            vec!["a".to_string()],
            vec!["b".to_string()],
        ]);
        store.delete_row(StoreRow(2)).expect("delete");
        assert_eq!(store.rows().len(), 2);
        assert_eq!(store.rows()[1], vec!["b"]);
        assert!(matches!(
            store.delete_row(StoreRow(9)),
            Err(RosterError::NotFound)
        ));
    }
}
