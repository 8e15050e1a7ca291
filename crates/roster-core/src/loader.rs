//! Roster loading and cleaning.
//!
//! The backing table accumulates noise: fully blank rows left behind by
//! deletions and rows with only a few cells populated from an interrupted
//! write. `load` strips both and yields a clean, position-indexed view.

use roster_model::Result;
use roster_store::RecordStore;
use tracing::debug;

/// Cleaned, in-memory view of the active roster.
///
/// Rows keep their raw cell strings in wire order and are indexed by
/// load-time position within the filtered set, not by store row number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Trimmed name cell of the row at `index`.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.rows.get(index).and_then(|row| row.first()).map(|c| c.trim())
    }

    /// Trimmed identifier cell of the row at `index`.
    pub fn identifier_at(&self, index: usize) -> Option<&str> {
        self.rows.get(index).and_then(|row| row.get(1)).map(|c| c.trim())
    }

    /// Filtered index of the first row whose name matches, trimmed-exact.
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        (0..self.len()).find(|&i| self.name_at(i) == Some(wanted))
    }
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

/// Fetch and clean the current roster.
///
/// Pure read: the first raw row becomes the (whitespace-trimmed) header
/// set, fully blank rows are dropped, and rows whose name cell is blank are
/// dropped as partial-write debris. Store failures propagate; no retry.
pub fn load(store: &impl RecordStore) -> Result<Roster> {
    let mut raw = store.all_rows()?.into_iter();
    let Some(header) = raw.next() else {
        return Ok(Roster::default());
    };
    let headers = header.iter().map(|h| h.trim().to_string()).collect();
    let rows: Vec<Vec<String>> = raw
        .filter(|row| !is_blank_row(row))
        .filter(|row| row.first().is_some_and(|name| !name.trim().is_empty()))
        .collect();
    debug!(rows = rows.len(), "loaded roster");
    Ok(Roster { headers, rows })
}
