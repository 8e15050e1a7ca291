//! Round-trip tests for the CSV-backed store.

use roster_model::WIRE_HEADERS;
use roster_store::{Column, CsvStore, RecordStore, StoreRow};

fn temp_store() -> (tempfile::TempDir, CsvStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("roster.csv");
    let store = CsvStore::open_or_create(&path, &WIRE_HEADERS).expect("create store");
    (dir, store)
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| (*c).to_string()).collect()
}

#[test]
fn create_writes_the_header_row() {
    let (_dir, store) = temp_store();
    let rows = store.all_rows().expect("rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], WIRE_HEADERS.map(String::from).to_vec());
}

#[test]
fn open_missing_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(CsvStore::open(dir.path().join("absent.csv")).is_err());
}

#[test]
fn append_then_reread() {
    let (_dir, mut store) = temp_store();
    let pos = store
        .append_row(&row(&[
            "AHMAD", "9001", "34", "Male", "3B", "17", "3", "Stable", "2024-01-15 09:30:00",
        ]))
        .expect("append");
    assert_eq!(pos, StoreRow(2));
    let rows = store.all_rows().expect("rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], "AHMAD");
}

#[test]
fn update_cell_by_letter_persists() {
    let (_dir, mut store) = temp_store();
    store.append_row(&row(&["AHMAD", "9001"])).expect("append");
    store
        .update_cell(StoreRow(2), Column::from_letter('H').unwrap(), "Critical")
        .expect("update");
    let rows = store.all_rows().expect("rows");
    assert_eq!(rows[1][7], "Critical");
    // Cells between the old width and column H are padded blank.
    assert_eq!(rows[1][5], "");
}

#[test]
fn blanked_rows_survive_a_round_trip() {
    let (_dir, mut store) = temp_store();
    store.append_row(&row(&["AHMAD", "9001"])).expect("append");
    let blanks = vec![String::new(); 9];
    store
        .update_range(StoreRow(2), Column::A, &blanks)
        .expect("blank");
    let rows = store.all_rows().expect("rows");
    assert_eq!(rows.len(), 2, "blanked row must still occupy its position");
    assert!(rows[1].iter().all(String::is_empty));
}

#[test]
fn delete_row_shifts_numbering() {
    let (_dir, mut store) = temp_store();
    store.append_row(&row(&["AHMAD"])).expect("append");
    store.append_row(&row(&["SITI"])).expect("append");
    store.delete_row(StoreRow(2)).expect("delete");
    let rows = store.all_rows().expect("rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], "SITI");
}
