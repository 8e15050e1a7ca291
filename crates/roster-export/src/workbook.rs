//! Workbook rendering of a filtered roster view.

use roster_model::{Result, RosterError};

/// Render header + rows as CSV workbook bytes.
pub fn render_workbook(headers: &[String], rows: &[&Vec<String>]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    writer.write_record(headers).map_err(RosterError::store)?;
    for row in rows {
        writer.write_record(*row).map_err(RosterError::store)?;
    }
    writer
        .into_inner()
        .map_err(|e| RosterError::store(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workbook_has_header_plus_one_line_per_row() {
        let headers = vec!["Name".to_string(), "Status".to_string()];
        let row = vec!["AHMAD".to_string(), "Stable".to_string()];
        let rows = vec![&row];
        let bytes = render_workbook(&headers, &rows).expect("render");
        let text = String::from_utf8(bytes).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["Name,Status", "AHMAD,Stable"]);
    }
}
