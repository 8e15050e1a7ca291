//! Date-filtered roster exports.
//!
//! Renders a filtered view of the roster as a spreadsheet workbook (CSV)
//! and a fixed-width tabular document. Filtering is by the calendar date of
//! the last-modified timestamp in hospital-local time, inclusive on both
//! ends; rows whose timestamp does not parse are silently dropped.

mod document;
mod workbook;

use chrono::NaiveDate;
use roster_core::Roster;
use roster_model::{timestamp_date, Result, RosterError, WIRE_FIELD_COUNT};
use tracing::debug;

pub use document::{render_document, DOC_COLUMN_WIDTH};
pub use workbook::render_workbook;

/// Result of an export request.
///
/// `NoData` is informational, not an error: the filter simply matched
/// nothing, and no document layout is attempted for zero rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    NoData,
    Rendered {
        workbook: Vec<u8>,
        document: Vec<u8>,
        rows: usize,
    },
}

fn in_range(row: &[String], start: NaiveDate, end: NaiveDate) -> bool {
    let Some(cell) = row.get(WIRE_FIELD_COUNT - 1) else {
        return false;
    };
    match timestamp_date(cell) {
        Some(date) => (start..=end).contains(&date),
        // Unparsable stamps are dropped from exports, not reported.
        None => false,
    }
}

/// Export the roster rows last modified within `[start, end]`.
///
/// An inverted range is rejected before any rendering is attempted.
pub fn export(roster: &Roster, start: NaiveDate, end: NaiveDate) -> Result<ExportOutcome> {
    if start > end {
        return Err(RosterError::InvertedRange { start, end });
    }
    let filtered: Vec<&Vec<String>> = roster
        .rows
        .iter()
        .filter(|row| in_range(row, start, end))
        .collect();
    debug!(matched = filtered.len(), total = roster.len(), "filtered export rows");
    if filtered.is_empty() {
        return Ok(ExportOutcome::NoData);
    }
    let headers = if roster.headers.is_empty() {
        roster_model::WIRE_HEADERS.map(String::from).to_vec()
    } else {
        roster.headers.clone()
    };
    let workbook = workbook::render_workbook(&headers, &filtered)?;
    let document = document::render_document(&headers, &filtered);
    Ok(ExportOutcome::Rendered {
        workbook,
        document,
        rows: filtered.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::load;
    use roster_store::MemoryStore;

    fn record_row(name: &str, stamp: &str) -> Vec<String> {
        vec![
            name.to_string(),
            format!("id-{name}"),
            "30".to_string(),
            "Male".to_string(),
            "1A".to_string(),
            "5".to_string(),
            "1".to_string(),
            "Stable".to_string(),
            stamp.to_string(),
        ]
    }

    fn roster() -> Roster {
        let store = MemoryStore::with_rows(vec![
            roster_model::WIRE_HEADERS.map(String::from).to_vec(),
            record_row("JAN-FIRST", "2024-01-01 08:00:00"),
            record_row("JAN-MID", "2024-01-15 12:00:00"),
            record_row("FEB-FIRST", "2024-02-01 09:00:00"),
            record_row("UNDATED", "not a timestamp"),
        ]);
        load(&store).expect("load")
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("date")
    }

    #[test]
    fn january_filter_keeps_exactly_the_january_rows() {
        let outcome = export(&roster(), date("2024-01-01"), date("2024-01-31")).expect("export");
        let ExportOutcome::Rendered { workbook, rows, .. } = outcome else {
            panic!("expected rendered output");
        };
        assert_eq!(rows, 2);
        let text = String::from_utf8(workbook).expect("utf8");
        assert!(text.contains("JAN-FIRST"));
        assert!(text.contains("JAN-MID"));
        assert!(!text.contains("FEB-FIRST"));
        assert!(!text.contains("UNDATED"));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let outcome = export(&roster(), date("2024-01-15"), date("2024-02-01")).expect("export");
        let ExportOutcome::Rendered { rows, .. } = outcome else {
            panic!("expected rendered output");
        };
        assert_eq!(rows, 2);
    }

    #[test]
    fn inverted_range_is_rejected_before_rendering() {
        let err = export(&roster(), date("2024-02-01"), date("2024-01-01")).expect_err("inverted");
        assert!(matches!(err, RosterError::InvertedRange { .. }));
    }

    #[test]
    fn empty_match_is_a_no_data_outcome() {
        let outcome = export(&roster(), date("2030-01-01"), date("2030-12-31")).expect("export");
        assert_eq!(outcome, ExportOutcome::NoData);
    }
}
