// File: crates/trends-core/tests/table.rs
// Purpose: Record parsing and transposition of delimited text.

use trends_core::{parse_records, transpose, Table, TableError};

#[test]
fn one_record_per_data_row_in_header_order() {
    let text = "Name,2022Q1,2022Q2,2022Q3\nA,1,2,3\nB,4,5,6\nC,7,8,9\n";
    let records = parse_records(text).expect("parse");
    assert_eq!(records.len(), text.lines().count() - 1);
    for r in &records {
        assert_eq!(r.field_names().collect::<Vec<_>>(), vec!["Name", "2022Q1", "2022Q2", "2022Q3"]);
    }
    let names = records.iter().map(|r| r.get("Name").unwrap()).collect::<Vec<_>>();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn blank_lines_are_ignored() {
    let records = parse_records("Name,Q1\nA,1\n\nB,2\n\n\n").expect("parse");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].get("Q1"), Some("2"));
}

#[test]
fn crlf_line_endings() {
    let records = parse_records("Name,Q1\r\nA,1\r\n").expect("parse");
    assert_eq!(records[0].get("Q1"), Some("1"));
}

#[test]
fn empty_and_header_only_inputs() {
    assert!(parse_records("").unwrap().is_empty());
    assert!(parse_records("Name,Q1\n").unwrap().is_empty());
}

#[test]
fn ragged_row_is_rejected() {
    let err = parse_records("Name,Q1,Q2\nA,1\n").unwrap_err();
    match err {
        TableError::Ragged { line, expected, found } => {
            assert_eq!((line, expected, found), (2, 3, 2));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn transpose_turns_columns_into_records() {
    let stored = "Name,GroupA,GroupB\n2022Q1,1.234,2.5\n2022Q2,NaNtext,3.5\n";
    let flipped = transpose(stored).expect("transpose");
    assert_eq!(flipped, "Name,2022Q1,2022Q2\nGroupA,1.234,NaNtext\nGroupB,2.5,3.5\n");

    let records = parse_records(&flipped).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("2022Q2"), Some("NaNtext"));
}

#[test]
fn transpose_twice_is_identity() {
    let t = Table::read("a,b\nc,d\ne,f\n").unwrap();
    assert_eq!(t.transposed().transposed(), t);
    assert_eq!(t.transposed().width(), 3);
}
