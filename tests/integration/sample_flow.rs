//! Integration tests for the entry and review flow
//!
//! Tests the flow: entry form pairs -> Submission -> EntryService -> Session
//! records -> ReviewService edits, without going through HTTP.

use super::common::fixtures::{date, fixed_today, FormBuilder};
use sample_tracker::config::InvalidDatePolicy;
use sample_tracker::{EntryService, QueryFlag, RecordEdit, ReviewService, Session, ServiceError};

/// Two submissions for the same day share a prefix and count up from 001
#[test]
fn test_same_day_submissions_count_up() {
    let mut session = Session::new();
    let form = FormBuilder::new().received(date(3, 5));

    let first = EntryService::submit(&mut session, form.submission());
    let second = EntryService::submit(&mut session, form.submission());

    assert_eq!(first.tracking_number(), "0503-001");
    assert_eq!(second.tracking_number(), "0503-002");
}

/// A new day-key starts its own sequence
#[test]
fn test_new_day_starts_new_sequence() {
    let mut session = Session::new();

    let march_5 = EntryService::submit(
        &mut session,
        FormBuilder::new().received(date(3, 5)).submission(),
    );
    let march_6 = EntryService::submit(
        &mut session,
        FormBuilder::new().received(date(3, 6)).submission(),
    );
    let march_5_again = EntryService::submit(
        &mut session,
        FormBuilder::new().received(date(3, 5)).submission(),
    );

    assert_eq!(march_5.tracking_number(), "0503-001");
    assert_eq!(march_6.tracking_number(), "0603-001");
    assert_eq!(march_5_again.tracking_number(), "0503-002");
}

/// Only non-zero amounts are kept
#[test]
fn test_sample_type_filtering() {
    let mut session = Session::new();
    let form = FormBuilder::new()
        .amount("Water", "0")
        .amount("Soil", "3")
        .amount("Swabs", "0");

    let record = EntryService::submit(&mut session, form.submission());
    assert_eq!(record.sample_types(), "Soil: 3");

    let all_zero = FormBuilder::new().amount("Water", "0").amount("Soil", "0");
    let record = EntryService::submit(&mut session, all_zero.submission());
    assert_eq!(record.sample_types(), "");
}

/// Query fields typed before switching the flag to No are dropped
#[test]
fn test_query_suppression() {
    let mut session = Session::new();
    let form = FormBuilder::new()
        .field("query", "Yes")
        .field("query_details", "Container cracked")
        .field("query_resolved", "2025-03-07")
        .field("query", "No");

    let record = EntryService::submit(&mut session, form.submission());

    assert_eq!(record.query(), QueryFlag::No);
    assert_eq!(record.query_details(), "");
    assert_eq!(record.query_resolved(), None);
}

/// A query marked Yes keeps its details and resolution date
#[test]
fn test_query_kept_when_yes() {
    let mut session = Session::new();
    let form = FormBuilder::new()
        .field("query", "Yes")
        .field("query_details", "Container cracked")
        .field("query_resolved", "2025-03-07");

    let record = EntryService::submit(&mut session, form.submission());

    assert_eq!(record.query_details(), "Container cracked");
    assert_eq!(record.query_resolved(), Some(date(3, 7)));
}

/// Blank text fields are stored as empty strings rather than rejected
#[test]
fn test_blank_fields_accepted() {
    let mut session = Session::new();
    let form = FormBuilder::new()
        .field("client_details", "   ")
        .field("lab", "");

    let record = EntryService::submit(&mut session, form.submission());

    assert_eq!(record.client_details(), "");
    assert_eq!(record.designated_labs(), "");
    assert_eq!(record.date_received(), fixed_today());
}

/// Editing one record leaves the rest exactly as they were
#[test]
fn test_edit_is_isolated_and_idempotent() {
    let mut session = Session::new();
    for client in ["North", "South", "East"] {
        let form = FormBuilder::new()
            .received(date(3, 5))
            .field("client_details", client)
            .lab("Chemistry");
        EntryService::submit(&mut session, form.submission());
    }
    let before: Vec<_> = session.records().iter().cloned().collect();

    let change = RecordEdit {
        analyst_id: Some("AB12".into()),
        date_collected: Some("2025-03-08".into()),
    };
    for _ in 0..2 {
        ReviewService::apply_edit(
            &mut session,
            "0503-002",
            change.clone(),
            InvalidDatePolicy::Today,
            fixed_today(),
        )
        .unwrap();
    }

    let after: Vec<_> = session.records().iter().cloned().collect();
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[1].analyst_id(), "AB12");
    assert_eq!(after[1].date_collected(), Some(date(3, 8)));
    assert_eq!(after[1].tracking_number(), before[1].tracking_number());
    assert_eq!(after[1].client_details(), "South");
}

/// Editing a tracking number that was never issued fails cleanly
#[test]
fn test_edit_unknown_record() {
    let mut session = Session::new();
    let err = ReviewService::apply_edit(
        &mut session,
        "0101-001",
        RecordEdit::default(),
        InvalidDatePolicy::Today,
        fixed_today(),
    )
    .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

/// Labs arrive in form order and are joined with commas
#[test]
fn test_labs_joined() {
    let mut session = Session::new();
    let form = FormBuilder::new().lab("Microbiology").lab("Molecular");
    assert_eq!(form.pairs().len(), 2);

    let record = EntryService::submit(&mut session, form.submission());
    assert_eq!(record.designated_labs(), "Microbiology, Molecular");
}
