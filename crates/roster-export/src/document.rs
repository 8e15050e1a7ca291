//! Fixed-width document rendering of a filtered roster view.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

/// Fixed character width for document headers and cells.
pub const DOC_COLUMN_WIDTH: usize = 10;

fn truncate(value: &str, width: usize) -> String {
    value.trim().chars().take(width).collect()
}

/// Render header + rows as a fixed-width tabular document.
///
/// Headers and cell values are truncated to [`DOC_COLUMN_WIDTH`] characters
/// so the table keeps a predictable page width. Callers guarantee at least
/// one row; rendering an empty table is a caller bug handled upstream as a
/// no-data outcome.
pub fn render_document(headers: &[String], rows: &[&Vec<String>]) -> Vec<u8> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Disabled);
    table.set_header(
        headers
            .iter()
            .map(|h| truncate(h, DOC_COLUMN_WIDTH))
            .collect::<Vec<_>>(),
    );
    for row in rows {
        table.add_row(
            row.iter()
                .map(|cell| truncate(cell, DOC_COLUMN_WIDTH))
                .collect::<Vec<_>>(),
        );
    }
    let mut text = table.to_string();
    text.push('\n');
    text.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_headers_and_cells_are_truncated() {
        let headers = vec!["An Extremely Long Header".to_string()];
        let row = vec!["a cell value far wider than the column".to_string()];
        let rows = vec![&row];
        let text = String::from_utf8(render_document(&headers, &rows)).expect("utf8");
        assert!(text.contains("An Extreme"));
        assert!(!text.contains("An Extremely"));
        assert!(text.contains("a cell val"));
        assert!(!text.contains("a cell value"));
    }

    #[test]
    fn every_row_appears_once() {
        let headers = vec!["Name".to_string()];
        let first = vec!["AHMAD".to_string()];
        let second = vec!["SITI".to_string()];
        let rows = vec![&first, &second];
        let text = String::from_utf8(render_document(&headers, &rows)).expect("utf8");
        assert_eq!(text.matches("AHMAD").count(), 1);
        assert_eq!(text.matches("SITI").count(), 1);
    }
}
