// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use cert_track_audit::AuditEvent;
use cert_track_domain::{Application, StageView, current_stage};
use serde::{Deserialize, Serialize};

/// API request to submit a new certificate application.
///
/// Every field defaults to empty so that a missing field is reported as
/// invalid input rather than a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitApplicationRequest {
    /// The applicant's name.
    pub student_name: String,
    /// The applicant's hall ticket / roll number.
    pub roll_number: String,
    /// The degree type (e.g. `UG`).
    pub degree_type: String,
    /// The program within the degree type (e.g. `B.Tech`).
    pub sub_category: String,
    /// The certificate being requested (e.g. `Migration Certificate`).
    pub certificate_type: String,
    /// Supporting documents handed in with the request.
    pub certificate_documents: Vec<String>,
    /// The fee option identifier (e.g. `within_state_50`).
    pub fee_option: String,
}

/// API response for a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitApplicationResponse {
    /// The generated application number.
    pub application_number: String,
    /// When the application was recorded.
    pub submitted_at: String,
    /// The event ID of the persisted audit event.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// API request for the pre-submission duplicate check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckDuplicateRequest {
    /// The applicant's hall ticket / roll number.
    pub roll_number: String,
    /// The certificate being requested.
    pub certificate_type: String,
}

/// API response for the pre-submission duplicate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckDuplicateResponse {
    /// True if an application for the pair already exists.
    pub duplicate: bool,
}

/// API response for a stage approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproveStageResponse {
    /// The application number.
    pub application_number: String,
    /// The stage slug.
    pub stage: String,
    /// The status now held by the stage.
    pub status: String,
    /// When the stage status was recorded.
    pub recorded_at: String,
    /// True if this call recorded the stage; false if it was already set.
    pub applied: bool,
    /// True once the certificate is verified.
    pub verified: bool,
    /// The event ID of the persisted audit event, when one was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i64>,
    /// A human-readable message.
    pub message: String,
}

/// Search and date filter applied to application listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationFilter {
    /// Case-insensitive substring matched against name or hall ticket.
    pub search: Option<String>,
    /// `YYYY-MM-DD` prefix matched against the submission timestamp.
    pub date: Option<String>,
}

impl ApplicationFilter {
    /// Returns true if `application` passes both filters.
    ///
    /// Empty filter values match everything.
    #[must_use]
    pub fn matches(&self, application: &Application) -> bool {
        let search_ok: bool = self
            .search
            .as_deref()
            .filter(|search| !search.is_empty())
            .is_none_or(|search| {
                let needle: String = search.to_lowercase();
                application
                    .details
                    .applicant_name
                    .to_lowercase()
                    .contains(&needle)
                    || application
                        .identity_number()
                        .value()
                        .to_lowercase()
                        .contains(&needle)
            });
        let date_ok: bool = self
            .date
            .as_deref()
            .filter(|date| !date.is_empty())
            .is_none_or(|date| application.submitted_at.starts_with(date));
        search_ok && date_ok
    }
}

/// Which collection a search result was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    /// The application store.
    Applications,
    /// The verified certificate store.
    Verified,
}

/// Summary information about an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationInfo {
    /// The application number.
    pub application_number: String,
    /// The applicant's name.
    pub student_name: String,
    /// The applicant's hall ticket / roll number.
    pub roll_number: String,
    /// The degree type.
    pub degree_type: String,
    /// The program within the degree type.
    pub sub_category: String,
    /// The requested certificate.
    pub certificate_type: String,
    /// Supporting documents handed in with the request.
    pub certificate_documents: Vec<String>,
    /// The fee option identifier.
    pub fee_option: String,
    /// The fee option display label.
    pub fee_option_label: String,
    /// When the application was submitted.
    pub submitted_at: String,
    /// Where the application currently sits.
    pub current_stage: String,
    /// When the certificate was verified, if it has been.
    pub verified_at: Option<String>,
}

impl From<&Application> for ApplicationInfo {
    fn from(application: &Application) -> Self {
        Self {
            application_number: application.application_number.value().to_string(),
            student_name: application.details.applicant_name.clone(),
            roll_number: application.identity_number().value().to_string(),
            degree_type: application.details.degree_type.as_str().to_string(),
            sub_category: application.details.sub_category.clone(),
            certificate_type: application.certificate_kind().as_str().to_string(),
            certificate_documents: application.details.selected_documents.clone(),
            fee_option: application.details.fee_option.as_str().to_string(),
            fee_option_label: application.details.fee_option.label().to_string(),
            submitted_at: application.submitted_at.clone(),
            current_stage: current_stage(application).to_string(),
            verified_at: application.verified_at.clone(),
        }
    }
}

/// API response for a stage work queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageQueueResponse {
    /// The stage slug.
    pub stage: String,
    /// The stage display name.
    pub display_name: String,
    /// Applications waiting on this stage, newest first.
    pub applications: Vec<ApplicationInfo>,
}

/// Full status view of a single application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationStatusResponse {
    /// The application.
    pub application: ApplicationInfo,
    /// The eight-entry timeline.
    pub timeline: Vec<StageView>,
    /// Share of completed timeline entries, as a percentage.
    pub progress_percentage: f64,
    /// Where the application currently sits.
    pub current_stage: String,
}

/// A single hall ticket search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Which collection the record was read from.
    pub source: RecordSource,
    /// The matching application.
    pub application: ApplicationInfo,
}

/// API response for a hall ticket search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The hall ticket that was searched for.
    pub hall_ticket: String,
    /// Matches from the application store, then the verified store.
    pub results: Vec<SearchResult>,
}

/// API response for listing verified certificates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedListResponse {
    /// Verified certificates, one per application number, newest first.
    pub certificates: Vec<ApplicationInfo>,
}

/// API response for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummaryResponse {
    /// Number of applications in the application store.
    pub total_applications: usize,
    /// Number of applications not yet verified.
    pub pending_applications: usize,
    /// Number of entries in the verified store.
    pub verified_applications: usize,
    /// Pending applications passing the filter, newest first.
    pub pending: Vec<ApplicationInfo>,
}

/// A rendered CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResponse {
    /// Suggested download file name.
    pub filename: String,
    /// Number of data rows.
    pub row_count: usize,
    /// CSV document including the header row.
    pub content: String,
}

/// API response for an application's audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrailResponse {
    /// The application number.
    pub application_number: String,
    /// Audit events, oldest first.
    pub events: Vec<AuditEvent>,
}
