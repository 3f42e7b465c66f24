// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-side query tests.

use cert_track_domain::{Stage, StageClass};
use cert_track_persistence::{InMemoryStore, Persistence};
use time::macros::datetime;

use crate::{
    ApiError, ApplicationFilter, ApplicationStatusResponse, AuditTrailResponse,
    DashboardSummaryResponse, RecordSource, SearchResponse, StageQueueResponse,
    VerifiedListResponse, dashboard_summary, find_status_by_identity, get_application_status,
    get_verified_certificate, list_audit_events, list_stage_queue, list_verified_certificates,
    search_by_identity,
};

use super::helpers::{
    approve_through, create_request_for, create_test_memory_store, create_test_now,
    create_test_store, create_valid_request, submit_at,
};

fn numbers(queue: &StageQueueResponse) -> Vec<&str> {
    queue
        .applications
        .iter()
        .map(|a| a.application_number.as_str())
        .collect()
}

// ============================================================================
// Stage Queue Tests
// ============================================================================

#[test]
fn test_block_queue_lists_every_unreviewed_application() {
    let mut store: InMemoryStore = create_test_memory_store();
    let older: String = submit_at(
        &mut store,
        create_request_for("Asha Rao", "20CS101", "Migration Certificate"),
        datetime!(2026-01-14 08:00:00),
    );
    let newer: String = submit_at(
        &mut store,
        create_request_for("Ravi Kumar", "20CS102", "Migration Certificate"),
        datetime!(2026-01-15 08:00:00),
    );

    let queue: StageQueueResponse =
        list_stage_queue(&mut store, Stage::BlockOffice, &ApplicationFilter::default()).unwrap();

    assert_eq!(queue.stage, "block_office");
    assert_eq!(queue.display_name, "Block Office");
    assert_eq!(numbers(&queue), vec![newer.as_str(), older.as_str()]);
}

#[test]
fn test_application_moves_between_queues() {
    let mut store: InMemoryStore = create_test_memory_store();
    let number: String = submit_at(&mut store, create_valid_request(), create_test_now());
    approve_through(&mut store, &number, Stage::BlockOffice);

    let block: StageQueueResponse =
        list_stage_queue(&mut store, Stage::BlockOffice, &ApplicationFilter::default()).unwrap();
    let computer: StageQueueResponse = list_stage_queue(
        &mut store,
        Stage::ComputerSession,
        &ApplicationFilter::default(),
    )
    .unwrap();
    let reblock: StageQueueResponse =
        list_stage_queue(&mut store, Stage::Reblock, &ApplicationFilter::default()).unwrap();

    assert!(block.applications.is_empty());
    assert_eq!(numbers(&computer), vec![number.as_str()]);
    assert!(reblock.applications.is_empty());
}

#[test]
fn test_queue_filter_by_search_and_date() {
    let mut store: InMemoryStore = create_test_memory_store();
    submit_at(
        &mut store,
        create_request_for("Asha Rao", "20CS101", "Migration Certificate"),
        datetime!(2026-01-14 08:00:00),
    );
    let ravi: String = submit_at(
        &mut store,
        create_request_for("Ravi Kumar", "20EC555", "Migration Certificate"),
        datetime!(2026-01-15 08:00:00),
    );

    let by_name: ApplicationFilter = ApplicationFilter {
        search: Some(String::from("RAVI")),
        date: None,
    };
    let queue: StageQueueResponse =
        list_stage_queue(&mut store, Stage::BlockOffice, &by_name).unwrap();
    assert_eq!(numbers(&queue), vec![ravi.as_str()]);

    let by_roll: ApplicationFilter = ApplicationFilter {
        search: Some(String::from("ec5")),
        date: None,
    };
    let queue: StageQueueResponse =
        list_stage_queue(&mut store, Stage::BlockOffice, &by_roll).unwrap();
    assert_eq!(numbers(&queue), vec![ravi.as_str()]);

    let by_date: ApplicationFilter = ApplicationFilter {
        search: None,
        date: Some(String::from("2026-01-14")),
    };
    let queue: StageQueueResponse =
        list_stage_queue(&mut store, Stage::BlockOffice, &by_date).unwrap();
    assert_eq!(queue.applications.len(), 1);
    assert_eq!(queue.applications[0].student_name, "Asha Rao");

    let empty: ApplicationFilter = ApplicationFilter {
        search: Some(String::new()),
        date: Some(String::new()),
    };
    let queue: StageQueueResponse =
        list_stage_queue(&mut store, Stage::BlockOffice, &empty).unwrap();
    assert_eq!(queue.applications.len(), 2);
}

// ============================================================================
// Status Lookup Tests
// ============================================================================

#[test]
fn test_status_by_hall_ticket_for_new_application() {
    let mut store: Persistence = create_test_store();
    submit_at(&mut store, create_valid_request(), create_test_now());

    let status: ApplicationStatusResponse =
        find_status_by_identity(&mut store, "20CS101").unwrap();

    assert_eq!(status.timeline.len(), 8);
    assert_eq!(status.timeline[0].class, StageClass::Completed);
    assert_eq!(status.timeline[1].status, "Pending");
    assert_eq!(status.timeline[1].timestamp, "Waiting for previous steps");
    assert_eq!(status.current_stage, "Application Submitted");
    assert_eq!(status.application.fee_option_label, "Within State - Rs 50");
    assert!((status.progress_percentage - 12.5).abs() < f64::EPSILON);
}

#[test]
fn test_status_reports_reblock_as_completed() {
    let mut store: Persistence = create_test_store();
    let number: String = submit_at(&mut store, create_valid_request(), create_test_now());
    approve_through(&mut store, &number, Stage::Reblock);

    let status: ApplicationStatusResponse = get_application_status(&mut store, &number).unwrap();
    assert_eq!(status.timeline[3].stage, "Re-Block Queue");
    assert_eq!(status.timeline[3].status, "Completed");
    assert_eq!(status.current_stage, "Re-Block Queue");
    assert!((status.progress_percentage - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_status_lookup_errors() {
    let mut store: Persistence = create_test_store();

    let empty: ApiError = find_status_by_identity(&mut store, " ").unwrap_err();
    assert!(matches!(empty, ApiError::InvalidInput { ref field, .. } if field == "hall_ticket"));

    let missing: ApiError = find_status_by_identity(&mut store, "99XX999").unwrap_err();
    assert!(matches!(missing, ApiError::ResourceNotFound { .. }));

    let unknown: ApiError = get_application_status(&mut store, "SKD20260115FFFFFF").unwrap_err();
    assert!(matches!(unknown, ApiError::ResourceNotFound { .. }));
}

// ============================================================================
// Search, Verified and Dashboard Tests
// ============================================================================

#[test]
fn test_search_returns_matches_from_both_stores() {
    let mut store: Persistence = create_test_store();
    let verified: String = submit_at(&mut store, create_valid_request(), create_test_now());
    approve_through(&mut store, &verified, Stage::Verification);
    submit_at(
        &mut store,
        create_request_for("Asha Rao", "20CS101", "Transcripts Certificate"),
        create_test_now(),
    );
    submit_at(
        &mut store,
        create_request_for("Ravi Kumar", "20CS102", "Migration Certificate"),
        create_test_now(),
    );

    let response: SearchResponse = search_by_identity(&mut store, "20CS101").unwrap();

    assert_eq!(response.hall_ticket, "20CS101");
    assert_eq!(response.results.len(), 3);
    let verified_hits: usize = response
        .results
        .iter()
        .filter(|r| r.source == RecordSource::Verified)
        .count();
    assert_eq!(verified_hits, 1);
}

#[test]
fn test_verified_list_and_lookup() {
    let mut store: Persistence = create_test_store();
    let done: String = submit_at(&mut store, create_valid_request(), create_test_now());
    approve_through(&mut store, &done, Stage::Verification);
    let pending: String = submit_at(
        &mut store,
        create_request_for("Ravi Kumar", "20CS102", "Migration Certificate"),
        create_test_now(),
    );

    let list: VerifiedListResponse =
        list_verified_certificates(&mut store, &ApplicationFilter::default()).unwrap();
    assert_eq!(list.certificates.len(), 1);
    assert_eq!(list.certificates[0].application_number, done);
    assert!(list.certificates[0].verified_at.is_some());

    let certificate: ApplicationStatusResponse =
        get_verified_certificate(&mut store, &done).unwrap();
    assert_eq!(certificate.timeline[7].status, "Approved");

    let err: ApiError = get_verified_certificate(&mut store, &pending).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn test_dashboard_counts_and_pending_list() {
    let mut store: Persistence = create_test_store();
    let done: String = submit_at(&mut store, create_valid_request(), create_test_now());
    approve_through(&mut store, &done, Stage::Verification);
    let in_progress: String = submit_at(
        &mut store,
        create_request_for("Ravi Kumar", "20CS102", "Migration Certificate"),
        create_test_now(),
    );
    approve_through(&mut store, &in_progress, Stage::ArSession);
    submit_at(
        &mut store,
        create_request_for("Meena Das", "20CS103", "Provisional Certificate"),
        create_test_now(),
    );

    let summary: DashboardSummaryResponse =
        dashboard_summary(&mut store, &ApplicationFilter::default()).unwrap();
    assert_eq!(summary.total_applications, 3);
    assert_eq!(summary.pending_applications, 2);
    assert_eq!(summary.verified_applications, 1);
    assert_eq!(summary.pending.len(), 2);

    let ravi = summary
        .pending
        .iter()
        .find(|a| a.application_number == in_progress)
        .unwrap();
    assert_eq!(ravi.current_stage, "AR Session");

    let filtered: DashboardSummaryResponse = dashboard_summary(
        &mut store,
        &ApplicationFilter {
            search: Some(String::from("meena")),
            date: None,
        },
    )
    .unwrap();
    assert_eq!(filtered.total_applications, 3);
    assert_eq!(filtered.pending.len(), 1);
}

#[test]
fn test_audit_trail_lists_submission_and_approvals() {
    let mut store: Persistence = create_test_store();
    let number: String = submit_at(&mut store, create_valid_request(), create_test_now());
    approve_through(&mut store, &number, Stage::ComputerSession);

    let trail: AuditTrailResponse = list_audit_events(&mut store, &number).unwrap();
    assert_eq!(trail.application_number, number);
    assert_eq!(trail.events.len(), 3);
    assert_eq!(trail.events[1].action.details.as_deref(), Some("Block Office"));

    let err: ApiError = list_audit_events(&mut store, "SKD20260115FFFFFF").unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}
