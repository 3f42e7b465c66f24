// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date-range export of applications as CSV.

use cert_track_domain::{Application, Stage, current_stage, date_prefix};
use cert_track_persistence::RecordStore;
use serde::Serialize;
use time::Date;
use time::macros::format_description;
use tracing::info;

use crate::error::{ApiError, translate_persistence_error};
use crate::request_response::ExportResponse;

const PENDING: &str = "Pending";

/// One exported application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Application Number")]
    pub application_number: String,
    #[serde(rename = "Student Name")]
    pub student_name: String,
    #[serde(rename = "Hall Ticket No")]
    pub roll_number: String,
    #[serde(rename = "Certificate Type")]
    pub certificate_type: String,
    #[serde(rename = "Degree Type")]
    pub degree_type: String,
    #[serde(rename = "Program")]
    pub sub_category: String,
    #[serde(rename = "Fee Option")]
    pub fee_option: String,
    #[serde(rename = "Submitted Documents")]
    pub documents: String,
    #[serde(rename = "Submission Time")]
    pub submitted_at: String,
    #[serde(rename = "Current Stage")]
    pub current_stage: String,
    #[serde(rename = "Block Office Status")]
    pub block_office: String,
    #[serde(rename = "Computer Session Status")]
    pub computer_session: String,
    #[serde(rename = "Re-Block Status")]
    pub reblock: String,
    #[serde(rename = "AR Session Status")]
    pub ar_session: String,
    #[serde(rename = "VR Session Status")]
    pub vr_session: String,
    #[serde(rename = "Post Session Status")]
    pub post_session: String,
    #[serde(rename = "Verification Status")]
    pub verification: String,
    #[serde(rename = "Verified")]
    pub verified: String,
}

fn stage_status(application: &Application, stage: Stage) -> String {
    application
        .stage_record(stage)
        .map_or_else(|| PENDING.to_string(), |record| record.status.clone())
}

impl From<&Application> for ExportRow {
    fn from(application: &Application) -> Self {
        Self {
            application_number: application.application_number.value().to_string(),
            student_name: application.details.applicant_name.clone(),
            roll_number: application.identity_number().value().to_string(),
            certificate_type: application.certificate_kind().as_str().to_string(),
            degree_type: application.details.degree_type.as_str().to_string(),
            sub_category: application.details.sub_category.clone(),
            fee_option: application.details.fee_option.label().to_string(),
            documents: application.details.selected_documents.join(", "),
            submitted_at: application.submitted_at.clone(),
            current_stage: current_stage(application).to_string(),
            block_office: stage_status(application, Stage::BlockOffice),
            computer_session: stage_status(application, Stage::ComputerSession),
            reblock: stage_status(application, Stage::Reblock),
            ar_session: stage_status(application, Stage::ArSession),
            vr_session: stage_status(application, Stage::VrSession),
            post_session: stage_status(application, Stage::PostSession),
            verification: stage_status(application, Stage::Verification),
            verified: if application.is_verified() { "Yes" } else { "No" }.to_string(),
        }
    }
}

fn parse_bound(field: &str, value: &str) -> Result<(), ApiError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(value, &format)
        .map(|_| ())
        .map_err(|e| ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Expected a YYYY-MM-DD date, got '{value}': {e}"),
        })
}

/// Renders rows as a CSV document with a header row.
///
/// # Errors
///
/// Returns `ApiError::Internal` if a row cannot be written.
pub fn render_csv(rows: &[ExportRow]) -> Result<String, ApiError> {
    let mut writer: csv::Writer<Vec<u8>> = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row).map_err(|e| ApiError::Internal {
            message: format!("Failed to write CSV row: {e}"),
        })?;
    }
    let bytes: Vec<u8> = writer.into_inner().map_err(|e| ApiError::Internal {
        message: format!("Failed to finish CSV export: {e}"),
    })?;
    String::from_utf8(bytes).map_err(|e| ApiError::Internal {
        message: format!("CSV export is not valid UTF-8: {e}"),
    })
}

/// Exports applications submitted between `from` and `to`, inclusive.
///
/// Bounds are compared against the date part of `submitted_at` as strings.
/// Only the application store is exported.
///
/// # Errors
///
/// Returns an error if:
/// - Either bound is missing or not a `YYYY-MM-DD` date
/// - No application falls in the range
/// - The store cannot be read
pub fn export_applications<S: RecordStore>(
    store: &mut S,
    from: &str,
    to: &str,
) -> Result<ExportResponse, ApiError> {
    parse_bound("from", from)?;
    parse_bound("to", to)?;

    let applications: Vec<Application> = store
        .list_applications()
        .map_err(translate_persistence_error)?;
    let rows: Vec<ExportRow> = applications
        .iter()
        .filter(|application| {
            let submitted: &str = date_prefix(&application.submitted_at);
            from <= submitted && submitted <= to
        })
        .map(ExportRow::from)
        .collect();

    if rows.is_empty() {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Applications"),
            message: format!("No applications submitted between {from} and {to}"),
        });
    }

    let content: String = render_csv(&rows)?;
    info!(from, to, rows = rows.len(), "Exported applications");
    Ok(ExportResponse {
        filename: format!("applications_{from}_to_{to}.csv"),
        row_count: rows.len(),
        content,
    })
}
