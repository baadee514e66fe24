use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::{Local, TimeZone};
use sheetpull_engine::{display_widths, Table, WorkbookWriter, MAX_COLUMN_WIDTH};
use tempfile::TempDir;

fn sample_table() -> Table {
    Table {
        columns: vec!["Name".to_string(), "Amount".to_string()],
        rows: vec![
            vec!["Alice".to_string(), "10".to_string()],
            vec!["Bob".to_string(), "20".to_string()],
        ],
    }
}

fn fixed_stamp() -> chrono::DateTime<Local> {
    Local.with_ymd_and_hms(2026, 3, 9, 14, 5, 7).unwrap()
}

#[test]
fn widths_pad_the_longest_cell_including_the_header() {
    // Longest in "Name" is the cell "Alice" (5); in "Amount" it is the
    // header itself (6).
    let widths = display_widths(&sample_table());
    assert_eq!(widths, vec![7, 8]);
}

#[test]
fn widths_clamp_at_the_maximum() {
    let table = Table {
        columns: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        rows: vec![vec!["x".repeat(48), "y".repeat(49), "z".repeat(200)]],
    };
    assert_eq!(display_widths(&table), vec![50, 50, 50]);
    assert_eq!(MAX_COLUMN_WIDTH, 50);
}

#[test]
fn header_wider_than_any_cell_sets_the_width() {
    let table = Table {
        columns: vec!["A rather long header".to_string()],
        rows: vec![vec!["x".to_string()]],
    };
    assert_eq!(display_widths(&table), vec![22]);
}

#[test]
fn written_workbook_round_trips_through_a_reader() {
    let temp = TempDir::new().unwrap();
    let writer = WorkbookWriter::new(
        temp.path().to_path_buf(),
        "orders".to_string(),
        "Orders".to_string(),
    );
    let table = sample_table();

    let summary = writer.write(&table, &fixed_stamp()).unwrap();
    assert_eq!(summary.data_rows, 2);
    assert_eq!(
        summary.path.file_name().unwrap(),
        "orders_20260309_140507.xlsx"
    );

    let mut workbook: Xlsx<_> = open_workbook(&summary.path).unwrap();
    let range = workbook.worksheet_range("Orders").unwrap();
    assert_eq!(range.height(), 3);
    assert_eq!(range.width(), 2);

    let cells: Vec<Vec<String>> = range
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Data::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .collect();
    assert_eq!(cells[0], vec!["Name", "Amount"]);
    assert_eq!(cells[1], vec!["Alice", "10"]);
    assert_eq!(cells[2], vec!["Bob", "20"]);
}

#[test]
fn zero_row_table_round_trips_as_header_only() {
    let temp = TempDir::new().unwrap();
    let writer = WorkbookWriter::new(
        temp.path().to_path_buf(),
        "orders".to_string(),
        "Orders".to_string(),
    );
    let table = Table {
        columns: vec!["Name".to_string(), "Amount".to_string()],
        rows: Vec::new(),
    };

    let summary = writer.write(&table, &fixed_stamp()).unwrap();
    assert_eq!(summary.data_rows, 0);

    let mut workbook: Xlsx<_> = open_workbook(&summary.path).unwrap();
    let range = workbook.worksheet_range("Orders").unwrap();
    assert_eq!(range.height(), 1);
    assert_eq!(range.width(), 2);
}

#[test]
fn missing_destination_directory_is_a_write_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("not_there");
    let writer = WorkbookWriter::new(missing.clone(), "orders".to_string(), "Orders".to_string());

    let result = writer.write(&sample_table(), &fixed_stamp());
    assert!(result.is_err());
    assert!(!missing.exists());
}

#[test]
fn failed_serialization_leaves_no_file_behind() {
    let temp = TempDir::new().unwrap();
    // Square brackets are not a legal sheet name, so serialization fails
    // before anything reaches the destination.
    let writer = WorkbookWriter::new(
        temp.path().to_path_buf(),
        "orders".to_string(),
        "Or[ders]".to_string(),
    );

    let result = writer.write(&sample_table(), &fixed_stamp());
    assert!(result.is_err());
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}
