// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing operations.

use cert_track::{
    ApprovalOutcome, SubmissionResult, SubmitApplication, apply_approval, apply_submission,
    is_duplicate,
};
use cert_track_audit::{Actor, Cause};
use cert_track_domain::{
    ApplicantDetails, Application, ApplicationNumber, CertificateKind, DegreeType, DomainError,
    FeeOption, IdentityNumber, Stage, StageRecord,
};
use cert_track_persistence::{PersistenceError, RecordStore};
use time::{Date, OffsetDateTime, PrimitiveDateTime};
use tracing::{debug, info, warn};

use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    ApproveStageResponse, CheckDuplicateRequest, CheckDuplicateResponse,
    SubmitApplicationRequest, SubmitApplicationResponse,
};

/// Maximum number of application numbers drawn before giving up.
pub const MAX_NUMBER_ATTEMPTS: usize = 16;

/// Maximum number of times an approval is recomputed after a write conflict.
pub const MAX_WRITE_ATTEMPTS: usize = 3;

/// Returns the current local wall-clock time.
///
/// Falls back to UTC when the local offset cannot be determined.
#[must_use]
pub fn current_timestamp() -> PrimitiveDateTime {
    let now: OffsetDateTime =
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    PrimitiveDateTime::new(now.date(), now.time())
}

fn require_field(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("{field} is required"),
        });
    }
    Ok(())
}

/// Parses a stage slug from a request path.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the slug does not name a stage.
pub fn parse_stage(slug: &str) -> Result<Stage, ApiError> {
    slug.parse().map_err(translate_domain_error)
}

/// Translates a submission request into typed applicant details.
///
/// Only presence and catalog membership of each field is checked here;
/// cross-field catalog rules are enforced by the core.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` naming the first missing or unknown
/// field.
pub fn parse_submit_request(
    request: SubmitApplicationRequest,
) -> Result<ApplicantDetails, ApiError> {
    require_field("student_name", &request.student_name)?;
    require_field("roll_number", &request.roll_number)?;
    require_field("degree_type", &request.degree_type)?;
    require_field("sub_category", &request.sub_category)?;
    require_field("certificate_type", &request.certificate_type)?;
    require_field("fee_option", &request.fee_option)?;
    if request.certificate_documents.is_empty() {
        return Err(translate_domain_error(DomainError::NoDocumentsSelected));
    }

    let degree_type: DegreeType = request
        .degree_type
        .parse()
        .map_err(translate_domain_error)?;
    let certificate_kind: CertificateKind = request
        .certificate_type
        .parse()
        .map_err(translate_domain_error)?;
    let fee_option: FeeOption = request.fee_option.parse().map_err(translate_domain_error)?;

    Ok(ApplicantDetails {
        applicant_name: request.student_name,
        identity_number: IdentityNumber::new(&request.roll_number),
        degree_type,
        sub_category: request.sub_category,
        certificate_kind,
        selected_documents: request.certificate_documents,
        fee_option,
    })
}

/// Draws application numbers from `draw` until one is unused in both stores.
///
/// # Errors
///
/// Returns `ApiError::Internal` if every attempt collides or the store
/// cannot be read.
pub fn allocate_application_number<S, F>(
    store: &mut S,
    date: Date,
    mut draw: F,
) -> Result<ApplicationNumber, ApiError>
where
    S: RecordStore,
    F: FnMut() -> u32,
{
    for attempt in 1..=MAX_NUMBER_ATTEMPTS {
        let candidate: ApplicationNumber = ApplicationNumber::compose(date, draw());
        let in_applications: bool = store
            .get_application(&candidate)
            .map_err(translate_persistence_error)?
            .is_some();
        let in_verified: bool = store
            .get_verified(&candidate)
            .map_err(translate_persistence_error)?
            .is_some();
        if !in_applications && !in_verified {
            return Ok(candidate);
        }
        warn!(
            attempt,
            application_number = %candidate,
            "Application number already in use, drawing another"
        );
    }
    Err(ApiError::Internal {
        message: format!(
            "Could not allocate an unused application number after {MAX_NUMBER_ATTEMPTS} attempts"
        ),
    })
}

/// Generates a fresh application number for `date`.
///
/// # Errors
///
/// See [`allocate_application_number`].
pub fn generate_application_number<S: RecordStore>(
    store: &mut S,
    date: Date,
) -> Result<ApplicationNumber, ApiError> {
    allocate_application_number(store, date, rand::random::<u32>)
}

/// Reports whether an application already exists for a hall ticket and
/// certificate type.
///
/// Incomplete or unrecognised input is never a duplicate.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn check_duplicate<S: RecordStore>(
    store: &mut S,
    request: &CheckDuplicateRequest,
) -> Result<CheckDuplicateResponse, ApiError> {
    if request.roll_number.is_empty() || request.certificate_type.is_empty() {
        return Ok(CheckDuplicateResponse { duplicate: false });
    }
    let Ok(certificate_kind) = request.certificate_type.parse::<CertificateKind>() else {
        return Ok(CheckDuplicateResponse { duplicate: false });
    };

    let applications: Vec<Application> = store
        .list_applications()
        .map_err(translate_persistence_error)?;
    let verified: Vec<Application> = store.list_verified().map_err(translate_persistence_error)?;

    let duplicate: bool = is_duplicate(
        &applications,
        &verified,
        &IdentityNumber::new(&request.roll_number),
        certificate_kind,
    );
    debug!(
        roll_number = %request.roll_number,
        certificate_type = %certificate_kind,
        duplicate,
        "Duplicate check"
    );
    Ok(CheckDuplicateResponse { duplicate })
}

/// Submits a new certificate application.
///
/// This function:
/// - Rejects missing or unknown fields
/// - Allocates an unused application number
/// - Applies the submission through the core (catalog rules, duplicate guard)
/// - Persists the application and its audit event atomically
///
/// # Errors
///
/// Returns an error if:
/// - A field is missing or invalid
/// - An application for the same hall ticket and certificate type exists,
///   whether caught by the guard or by the store's unique index
/// - The store fails
pub fn submit_application<S: RecordStore>(
    store: &mut S,
    request: SubmitApplicationRequest,
    now: PrimitiveDateTime,
    cause: Cause,
) -> Result<SubmitApplicationResponse, ApiError> {
    let details: ApplicantDetails = parse_submit_request(request)?;

    let applications: Vec<Application> = store
        .list_applications()
        .map_err(translate_persistence_error)?;
    let verified: Vec<Application> = store.list_verified().map_err(translate_persistence_error)?;
    let application_number: ApplicationNumber = generate_application_number(store, now.date())?;

    let actor: Actor = Actor::applicant(details.identity_number.value());
    let result: SubmissionResult = apply_submission(
        &applications,
        &verified,
        SubmitApplication::new(details),
        application_number,
        now,
        actor,
        cause,
    )
    .map_err(|err| {
        warn!(error = %err, "Submission refused");
        translate_core_error(err)
    })?;

    let event_id: i64 = store.persist_submission(&result).map_err(|err| {
        warn!(error = %err, "Failed to persist submission");
        translate_persistence_error(err)
    })?;

    let application: &Application = &result.application;
    info!(
        application_number = %application.application_number,
        roll_number = %application.identity_number(),
        certificate_type = %application.certificate_kind(),
        event_id,
        "Application submitted"
    );

    Ok(SubmitApplicationResponse {
        application_number: application.application_number.value().to_string(),
        submitted_at: application.submitted_at.clone(),
        event_id,
        message: format!(
            "{} application submitted successfully",
            application.certificate_kind()
        ),
    })
}

fn approval_response(
    number: &ApplicationNumber,
    stage: Stage,
    outcome: &ApprovalOutcome,
    event_id: Option<i64>,
) -> ApproveStageResponse {
    let current: &Application = outcome.application();
    let record: StageRecord = current
        .stage_record(stage)
        .cloned()
        .unwrap_or_else(|| StageRecord::new(String::new(), String::new()));

    ApproveStageResponse {
        application_number: number.value().to_string(),
        stage: stage.slug().to_string(),
        status: record.status,
        recorded_at: record.recorded_at,
        applied: outcome.was_applied(),
        verified: current.is_verified(),
        event_id,
        message: if outcome.was_applied() {
            format!("{} approved for {number}", stage.display_name())
        } else {
            format!("{} was already recorded for {number}", stage.display_name())
        },
    }
}

/// Approves one stage of an application.
///
/// Approving a stage that already holds a status is a no-op and reports
/// `applied: false`; nothing is persisted. If the stored application changes
/// between the read and the write, the approval is recomputed from a fresh
/// read, up to `MAX_WRITE_ATTEMPTS` times.
///
/// # Errors
///
/// Returns an error if:
/// - No application has the given number
/// - The previous stage has not been approved
/// - The application keeps changing underneath every attempt
/// - The store fails
pub fn approve_stage<S: RecordStore>(
    store: &mut S,
    application_number: &str,
    stage: Stage,
    now: PrimitiveDateTime,
    cause: &Cause,
) -> Result<ApproveStageResponse, ApiError> {
    let number: ApplicationNumber = ApplicationNumber::new(application_number);

    for attempt in 1..=MAX_WRITE_ATTEMPTS {
        let application: Application = store
            .get_application(&number)
            .map_err(translate_persistence_error)?
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Application"),
                message: format!("Application {application_number} does not exist"),
            })?;

        let outcome: ApprovalOutcome = apply_approval(
            &application,
            stage,
            now,
            Actor::office(stage),
            cause.clone(),
        )
        .map_err(translate_core_error)?;

        let event_id: Option<i64> = match &outcome {
            ApprovalOutcome::Applied(result) => match store.persist_transition(result) {
                Ok(event_id) => {
                    info!(
                        application_number = %number,
                        stage = stage.slug(),
                        verified = result.verified,
                        event_id,
                        "Stage approved"
                    );
                    Some(event_id)
                }
                Err(PersistenceError::WriteConflict(reason)) => {
                    warn!(
                        attempt,
                        application_number = %number,
                        stage = stage.slug(),
                        reason = %reason,
                        "Application changed during approval, re-reading"
                    );
                    continue;
                }
                Err(err) => return Err(translate_persistence_error(err)),
            },
            ApprovalOutcome::AlreadyRecorded(_) => {
                debug!(
                    application_number = %number,
                    stage = stage.slug(),
                    "Stage already recorded"
                );
                None
            }
        };

        return Ok(approval_response(&number, stage, &outcome, event_id));
    }

    Err(ApiError::Internal {
        message: format!(
            "Application {number} kept changing; gave up after {MAX_WRITE_ATTEMPTS} attempts"
        ),
    })
}
