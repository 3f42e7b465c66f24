// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::SubmitApplication;
use crate::duplicate::is_duplicate;
use crate::error::CoreError;
use crate::state::{ApprovalOutcome, SubmissionResult, TransitionResult};
use cert_track_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use cert_track_domain::{
    Application, ApplicationNumber, Stage, StageRecord, format_timestamp,
    validate_applicant_details, validate_application_number,
};
use time::PrimitiveDateTime;

/// Creates a new application from a submission.
///
/// # Arguments
///
/// * `applications` - Pending applications (immutable)
/// * `verified` - Verified certificates (immutable)
/// * `command` - The submission
/// * `application_number` - The number to assign; the caller guarantees it is unused
/// * `now` - Submission time
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(SubmissionResult)` containing the new application and audit event
/// * `Err(CoreError)` if the submission is refused; nothing must be persisted
///
/// # Errors
///
/// Returns an error if:
/// - The details violate catalog rules
/// - The application number is malformed
/// - An application for the same hall ticket and certificate kind exists
pub fn apply_submission(
    applications: &[Application],
    verified: &[Application],
    command: SubmitApplication,
    application_number: ApplicationNumber,
    now: PrimitiveDateTime,
    actor: Actor,
    cause: Cause,
) -> Result<SubmissionResult, CoreError> {
    let details = command.details;
    validate_applicant_details(&details)?;
    validate_application_number(&application_number)?;

    if is_duplicate(
        applications,
        verified,
        &details.identity_number,
        details.certificate_kind,
    ) {
        return Err(CoreError::DuplicateApplication {
            identity_number: details.identity_number.value().to_string(),
            certificate_kind: details.certificate_kind.to_string(),
        });
    }

    let submitted_at: String = format_timestamp(now)?;
    let action: Action = Action::submit(details.certificate_kind);
    let application: Application =
        Application::new(application_number, details, submitted_at.clone());

    let audit_event: AuditEvent = AuditEvent::new(
        application.application_number.clone(),
        actor,
        cause,
        action,
        StateSnapshot::absent(),
        StateSnapshot::of(&application),
        submitted_at,
    );

    Ok(SubmissionResult {
        application,
        audit_event,
    })
}

/// Records `stage`'s success literal on an application.
///
/// Re-approving a stage that already holds a status is a no-op and yields
/// `ApprovalOutcome::AlreadyRecorded` without an audit event.
///
/// # Errors
///
/// Returns `CoreError::PrerequisiteNotMet` if the previous stage has not
/// recorded its success literal. The application is unchanged.
pub fn apply_approval(
    application: &Application,
    stage: Stage,
    now: PrimitiveDateTime,
    actor: Actor,
    cause: Cause,
) -> Result<ApprovalOutcome, CoreError> {
    if let Some(required) = stage.previous() {
        if !application.is_stage_complete(required) {
            return Err(CoreError::PrerequisiteNotMet {
                stage: stage.display_name().to_string(),
                required: required.display_name().to_string(),
            });
        }
    }

    let recorded_at: String = format_timestamp(now)?;
    let mut new_application: Application = application.clone();
    if !new_application.record_stage(
        stage,
        StageRecord::new(
            stage.definition().success_literal.to_string(),
            recorded_at.clone(),
        ),
    ) {
        return Ok(ApprovalOutcome::AlreadyRecorded(application.clone()));
    }

    let verified: bool = stage.is_final() && new_application.mark_verified(recorded_at.clone());

    let audit_event: AuditEvent = AuditEvent::new(
        application.application_number.clone(),
        actor,
        cause,
        Action::approve(stage),
        StateSnapshot::of(application),
        StateSnapshot::of(&new_application),
        recorded_at,
    );

    Ok(ApprovalOutcome::Applied(TransitionResult {
        new_application,
        audit_event,
        verified,
    }))
}
