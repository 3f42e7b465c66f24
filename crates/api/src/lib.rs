// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the certificate application tracker.
//!
//! Translates loosely typed requests into core commands, runs them against a
//! `RecordStore`, and translates every lower-layer error into an `ApiError`.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod export;
mod handlers;
mod queries;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, RULE_STAGE_ORDER, RULE_UNIQUE_APPLICATION, translate_core_error,
    translate_domain_error, translate_persistence_error,
};
pub use export::{ExportRow, export_applications, render_csv};
pub use handlers::{
    MAX_NUMBER_ATTEMPTS, MAX_WRITE_ATTEMPTS, allocate_application_number, approve_stage,
    check_duplicate, current_timestamp, generate_application_number, parse_stage,
    parse_submit_request, submit_application,
};
pub use queries::{
    dashboard_summary, find_status_by_identity, get_application_status,
    get_verified_certificate, is_awaiting, list_audit_events, list_stage_queue,
    list_verified_certificates, search_by_identity, status_view,
};
pub use request_response::{
    ApplicationFilter, ApplicationInfo, ApplicationStatusResponse, ApproveStageResponse,
    AuditTrailResponse, CheckDuplicateRequest, CheckDuplicateResponse, DashboardSummaryResponse,
    ExportResponse, RecordSource, SearchResponse, SearchResult, StageQueueResponse,
    SubmitApplicationRequest, SubmitApplicationResponse, VerifiedListResponse,
};
