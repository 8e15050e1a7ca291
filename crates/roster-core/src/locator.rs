//! Row location: slot reuse for placement, positional lookup for edits.

use roster_model::{PatientRecord, Result, RosterError, WIRE_FIELD_COUNT};
use roster_store::{Column, RecordStore, StoreRow};
use tracing::debug;

/// Where a record landed and whether an old slot was reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: StoreRow,
    pub reused: bool,
}

fn is_free_slot(row: &[String]) -> bool {
    row.len() < WIRE_FIELD_COUNT
        || row[..WIRE_FIELD_COUNT]
            .iter()
            .all(|cell| cell.trim().is_empty())
}

/// Write a record into the first reusable blank slot, or append.
///
/// Deletions blank rows in place rather than removing them, so the table
/// accumulates free slots; reusing them keeps it from growing without
/// bound. The raw rows are re-read immediately before the scan to shrink
/// the race window against concurrent writers.
pub fn place(store: &mut impl RecordStore, record: &PatientRecord) -> Result<Placement> {
    let rows = store.all_rows()?;
    let cells = record.to_cells();
    for (index, row) in rows.iter().enumerate().skip(1) {
        if is_free_slot(row) {
            let slot = StoreRow(index + 1);
            store.update_range(slot, Column::A, &cells)?;
            debug!(row = %slot, "reused blank slot");
            return Ok(Placement {
                row: slot,
                reused: true,
            });
        }
    }
    let appended = store.append_row(&cells)?;
    debug!(row = %appended, "appended new row");
    Ok(Placement {
        row: appended,
        reused: false,
    })
}

/// Physical store row of the record with the given display name.
///
/// Scans the raw rows, so blank slots left by earlier deletions cannot
/// shift the result the way a filtered-index offset would. `NotFound`
/// means the selection went stale (another session removed or renamed the
/// record); callers surface it as "reload and reselect".
pub fn locate_by_name(name: &str, store: &impl RecordStore) -> Result<StoreRow> {
    let wanted = name.trim();
    let rows = store.all_rows()?;
    rows.iter()
        .enumerate()
        .skip(1)
        .find(|(_, row)| row.first().is_some_and(|cell| cell.trim() == wanted))
        .map(|(index, _)| StoreRow(index + 1))
        .ok_or(RosterError::NotFound)
}
