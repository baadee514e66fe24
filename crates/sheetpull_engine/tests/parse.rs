use pretty_assertions::assert_eq;
use sheetpull_engine::{parse_table, ParseError};

#[test]
fn header_and_rows_parse_in_source_order() {
    let table = parse_table("Name,Amount\nAlice,10\nBob,20\n").unwrap();

    assert_eq!(table.columns, vec!["Name", "Amount"]);
    assert_eq!(
        table.rows,
        vec![
            vec!["Alice".to_string(), "10".to_string()],
            vec!["Bob".to_string(), "20".to_string()],
        ]
    );
}

#[test]
fn quoted_fields_may_contain_commas_and_newlines() {
    let table = parse_table("Name,Note\nAlice,\"first, second\"\nBob,\"line1\nline2\"\n").unwrap();

    assert_eq!(table.rows[0][1], "first, second");
    assert_eq!(table.rows[1][1], "line1\nline2");
}

#[test]
fn header_only_body_is_the_empty_dataset_case() {
    let err = parse_table("Name,Amount\n").unwrap_err();
    assert_eq!(err, ParseError::EmptyDataset);
}

#[test]
fn body_without_a_header_is_a_hard_failure() {
    let err = parse_table("").unwrap_err();
    assert_eq!(err, ParseError::MissingHeader);
}

#[test]
fn short_rows_are_padded_to_the_header_width() {
    let table = parse_table("A,B,C\n1\n2,3\n").unwrap();

    assert_eq!(
        table.rows,
        vec![
            vec!["1".to_string(), String::new(), String::new()],
            vec!["2".to_string(), "3".to_string(), String::new()],
        ]
    );
}

#[test]
fn rows_wider_than_the_header_are_rejected() {
    let err = parse_table("A,B\n1,2,3\n").unwrap_err();
    assert_eq!(
        err,
        ParseError::RowTooWide {
            row: 1,
            expected: 2,
            got: 3,
        }
    );
}

#[test]
fn every_row_matches_the_declared_column_count() {
    let table = parse_table("A,B,C\nx,y,z\np\nq,r,s\n").unwrap();
    for row in &table.rows {
        assert_eq!(row.len(), table.columns.len());
    }
}
