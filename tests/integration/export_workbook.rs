//! Integration tests for workbook export
//!
//! Records entered through the services are exported and read back to check
//! the sheet layout matches the records table.

use super::common::fixtures::{date, fixed_today, FormBuilder};
use super::common::workbook::{cell, read_part, sheet_rows};
use sample_tracker::config::InvalidDatePolicy;
use sample_tracker::{
    encode_records, EntryService, RecordEdit, ReviewService, SampleRecord, Session,
};

fn session_with(count: usize) -> Session {
    let mut session = Session::new();
    for i in 0..count {
        let form = FormBuilder::new()
            .received(date(3, 5))
            .field("client_details", &format!("Client {}", i + 1))
            .amount("Soil", "3")
            .lab("Chemistry");
        EntryService::submit(&mut session, form.submission());
    }
    session
}

/// N records export as N data rows plus a header row
#[test]
fn test_row_count_matches_records() {
    for count in [0, 1, 5] {
        let session = session_with(count);
        let bytes = encode_records(session.records().as_slice(), "Samples").unwrap();
        assert_eq!(sheet_rows(&bytes).len(), count + 1);
    }
}

/// Header row carries the record field names in order
#[test]
fn test_header_matches_columns() {
    let bytes = encode_records(&[], "Samples").unwrap();
    let rows = sheet_rows(&bytes);

    let header: Vec<&str> = rows[0].iter().map(|(_, v)| v.as_str()).collect();
    assert_eq!(header, SampleRecord::COLUMNS.to_vec());
}

/// Exported values match the on-screen formatting
#[test]
fn test_values_match_display() {
    let mut session = session_with(2);
    ReviewService::apply_edit(
        &mut session,
        "0503-002",
        RecordEdit {
            analyst_id: Some("JD".into()),
            date_collected: Some("2025-03-09".into()),
        },
        InvalidDatePolicy::Today,
        fixed_today(),
    )
    .unwrap();

    let bytes = encode_records(session.records().as_slice(), "Samples").unwrap();
    let rows = sheet_rows(&bytes);

    assert_eq!(cell(&rows[1], "A"), "0503-001");
    assert_eq!(cell(&rows[1], "B"), "05/03");
    assert_eq!(cell(&rows[1], "E"), "Soil: 3");
    assert_eq!(cell(&rows[1], "I"), "");
    assert_eq!(cell(&rows[2], "C"), "Client 2");
    assert_eq!(cell(&rows[2], "I"), "JD");
    assert_eq!(cell(&rows[2], "J"), "09/03");
}

/// The single sheet carries the configured name
#[test]
fn test_sheet_named_samples() {
    let bytes = encode_records(&[], "Samples").unwrap();
    let workbook = read_part(&bytes, "xl/workbook.xml");
    assert!(workbook.contains("<sheet name=\"Samples\""));
    assert_eq!(workbook.matches("<sheet ").count(), 1);
}

/// Export does not change the records it reads
#[test]
fn test_export_is_side_effect_free() {
    let session = session_with(3);
    let before: Vec<_> = session.records().iter().cloned().collect();

    let first = encode_records(session.records().as_slice(), "Samples").unwrap();
    let second = encode_records(session.records().as_slice(), "Samples").unwrap();

    assert_eq!(first, second);
    let after: Vec<_> = session.records().iter().cloned().collect();
    assert_eq!(before, after);
}
