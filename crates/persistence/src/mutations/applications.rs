// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Submission and transition persistence.
//!
//! Each function runs in a single transaction. On any error the store is
//! left exactly as it was.

use cert_track::{SubmissionResult, TransitionResult};
use cert_track_domain::Application;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::SqliteConnection;
use tracing::{debug, info, warn};

use crate::diesel_schema::{applications, verified_certificates};
use crate::error::PersistenceError;
use crate::mutations::audit::persist_audit_event;
use crate::queries::get_application;
use crate::store::ensure_unchanged;

/// Maps a unique-index violation on `applications` to the matching
/// persistence error.
fn translate_insert_error(err: DieselError, application: &Application) -> PersistenceError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            if info.message().contains("application_number") {
                PersistenceError::ApplicationNumberCollision(
                    application.application_number.to_string(),
                )
            } else {
                PersistenceError::DuplicateApplication {
                    identity_number: application.identity_number().to_string(),
                    certificate_kind: application.certificate_kind().to_string(),
                }
            }
        }
        other => PersistenceError::from(other),
    }
}

/// Inserts a new application and its audit event.
///
/// # Returns
///
/// The event ID assigned to the audit event.
///
/// # Errors
///
/// Returns an error if either unique index rejects the row, or if
/// persistence or serialization fails.
pub fn persist_submission(
    conn: &mut SqliteConnection,
    result: &SubmissionResult,
) -> Result<i64, PersistenceError> {
    let application: &Application = &result.application;
    let record_json: String = serde_json::to_string(application)?;

    let outcome: Result<i64, PersistenceError> = conn.transaction(|conn| {
        diesel::insert_into(applications::table)
            .values((
                applications::application_number.eq(application.application_number.value()),
                applications::identity_number.eq(application.identity_number().value()),
                applications::certificate_kind.eq(application.certificate_kind().as_str()),
                applications::submitted_at.eq(&application.submitted_at),
                applications::verified_at.eq(application.verified_at.as_deref()),
                applications::record_json.eq(&record_json),
            ))
            .execute(conn)
            .map_err(|e| translate_insert_error(e, application))?;

        persist_audit_event(conn, &result.audit_event)
    });

    match &outcome {
        Ok(id) => info!(
            event_id = id,
            application_number = %application.application_number,
            "Persisted submission"
        ),
        Err(err) => warn!(
            application_number = %application.application_number,
            error = %err,
            "Submission rejected by store"
        ),
    }

    outcome
}

/// Replaces an application, appends the verified copy when flagged, and
/// records the audit event.
///
/// Runs as an immediate transaction so the conflict check and the write see
/// the same row.
///
/// # Returns
///
/// The event ID assigned to the audit event.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no application with the number
/// exists, `PersistenceError::WriteConflict` if the stored application no
/// longer matches the transition's starting state, or an error if
/// persistence or serialization fails.
pub fn persist_transition(
    conn: &mut SqliteConnection,
    result: &TransitionResult,
) -> Result<i64, PersistenceError> {
    let application: &Application = &result.new_application;
    let record_json: String = serde_json::to_string(application)?;

    let event_id: i64 = conn.immediate_transaction::<i64, PersistenceError, _>(|conn| {
        let stored: Application = get_application(conn, &application.application_number)?
            .ok_or_else(|| {
                PersistenceError::NotFound(format!(
                    "Application {}",
                    application.application_number
                ))
            })?;
        ensure_unchanged(&stored, result)?;

        diesel::update(
            applications::table.filter(
                applications::application_number.eq(application.application_number.value()),
            ),
        )
        .set((
            applications::verified_at.eq(application.verified_at.as_deref()),
            applications::record_json.eq(&record_json),
        ))
        .execute(conn)?;

        if result.verified {
            let verified_at: &str = application
                .verified_at
                .as_deref()
                .unwrap_or(&result.audit_event.recorded_at);
            let inserted: usize = diesel::insert_into(verified_certificates::table)
                .values((
                    verified_certificates::application_number
                        .eq(application.application_number.value()),
                    verified_certificates::verified_at.eq(verified_at),
                    verified_certificates::record_json.eq(&record_json),
                ))
                .on_conflict(verified_certificates::application_number)
                .do_nothing()
                .execute(conn)?;
            debug!(
                application_number = %application.application_number,
                inserted,
                "Appended verified certificate"
            );
        }

        persist_audit_event(conn, &result.audit_event)
    })?;

    info!(
        event_id,
        application_number = %application.application_number,
        verified = result.verified,
        "Persisted transition"
    );

    Ok(event_id)
}
