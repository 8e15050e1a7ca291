//! Append-only archive feed of removed and edited-away records.

use roster_model::{format_timestamp, hospital_now, ArchiveEntry, PatientRecord, Result};
use roster_store::RecordStore;
use tracing::info;

/// Append a record snapshot plus an archive timestamp to the archive feed.
///
/// Called exactly once per deletion and once per edit commit, in both cases
/// with the record's pre-mutation state, and always BEFORE the destructive
/// write: if this append fails, the caller must abort the mutation so
/// history is never silently lost.
pub fn archive(archive_store: &mut impl RecordStore, record: &PatientRecord) -> Result<ArchiveEntry> {
    let entry = ArchiveEntry {
        record: record.clone(),
        archived_at: format_timestamp(hospital_now()),
    };
    let row = archive_store.append_row(&entry.to_cells())?;
    info!(%row, "archived record snapshot");
    Ok(entry)
}
