//! CSV-file-backed record store.
//!
//! Each operation reads the whole file and mutations rewrite it in full.
//! That keeps the on-disk shape identical to what a spreadsheet backend
//! exposes (header row, ragged data rows) at the cost of O(n) writes, which
//! is fine at roster scale.

use std::path::{Path, PathBuf};

use roster_model::{Result, RosterError};
use tracing::debug;

use crate::types::{Column, StoreRow};
use crate::RecordStore;

/// A [`RecordStore`] persisted as a CSV file.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Open an existing store file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(RosterError::store(format!(
                "store file not found: {}",
                path.display()
            )));
        }
        Ok(Self { path })
    }

    /// Open a store file, creating it with the given header row if absent.
    pub fn open_or_create(path: impl Into<PathBuf>, header: &[&str]) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            debug!(path = %path.display(), "creating store file");
            let store = Self { path: path.clone() };
            let header_row: Vec<String> = header.iter().map(|h| (*h).to_string()).collect();
            store.write_rows(&[header_row])?;
            return Ok(store);
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_rows(&self) -> Result<Vec<Vec<String>>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(RosterError::store)?;
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(RosterError::store)?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }

    fn write_rows(&self, rows: &[Vec<String>]) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(RosterError::store)?;
        for row in rows {
            if row.is_empty() {
                // A zero-field record would serialize as a skipped empty
                // line; persist it as one blank cell instead.
                writer.write_record([""]).map_err(RosterError::store)?;
            } else {
                writer.write_record(row).map_err(RosterError::store)?;
            }
        }
        writer.flush().map_err(RosterError::store)?;
        Ok(())
    }

    fn mutate_row(
        &self,
        row: StoreRow,
        apply: impl FnOnce(&mut Vec<String>),
    ) -> Result<()> {
        if row.0 == 0 {
            return Err(RosterError::store("row numbers are 1-based"));
        }
        let mut rows = self.read_rows()?;
        if rows.len() < row.0 {
            rows.resize_with(row.0, Vec::new);
        }
        apply(&mut rows[row.index()]);
        self.write_rows(&rows)
    }
}

impl RecordStore for CsvStore {
    fn all_rows(&self) -> Result<Vec<Vec<String>>> {
        self.read_rows()
    }

    fn append_row(&mut self, cells: &[String]) -> Result<StoreRow> {
        let mut rows = self.read_rows()?;
        rows.push(cells.to_vec());
        let position = StoreRow(rows.len());
        self.write_rows(&rows)?;
        Ok(position)
    }

    fn update_cell(&mut self, row: StoreRow, column: Column, value: &str) -> Result<()> {
        self.mutate_row(row, |cells| {
            if cells.len() <= column.index() {
                cells.resize(column.index() + 1, String::new());
            }
            cells[column.index()] = value.to_string();
        })
    }

    fn update_range(&mut self, row: StoreRow, start: Column, values: &[String]) -> Result<()> {
        self.mutate_row(row, |cells| {
            let end = start.index() + values.len();
            if cells.len() < end {
                cells.resize(end, String::new());
            }
            cells[start.index()..end].clone_from_slice(values);
        })
    }

    fn delete_row(&mut self, row: StoreRow) -> Result<()> {
        let mut rows = self.read_rows()?;
        if row.0 == 0 || row.0 > rows.len() {
            return Err(RosterError::NotFound);
        }
        rows.remove(row.index());
        self.write_rows(&rows)
    }
}
