//! Console rendering of rosters and single-record previews.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use roster_core::Roster;
use roster_model::{PatientRecord, WIRE_HEADERS};

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table.load_preset(UTF8_FULL_CONDENSED);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Tabular preview of the loaded roster.
pub fn roster_table(roster: &Roster) -> Table {
    let mut table = Table::new();
    let headers = if roster.headers.is_empty() {
        WIRE_HEADERS.map(String::from).to_vec()
    } else {
        roster.headers.clone()
    };
    table.set_header(headers.iter().map(|h| header_cell(h)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for row in &roster.rows {
        table.add_row(row.clone());
    }
    table
}

/// Field-per-line preview of one record, used by confirmation prompts.
pub fn record_table(record: &PatientRecord) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    for (name, value) in WIRE_HEADERS.iter().zip(record.to_cells()) {
        table.add_row(vec![(*name).to_string(), value]);
    }
    table
}
