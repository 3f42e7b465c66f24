// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cert_track::{SubmissionResult, TransitionResult};
use cert_track_audit::{AuditEvent, StateSnapshot};
use cert_track_domain::{Application, ApplicationNumber};

use crate::error::PersistenceError;

/// Keyed storage for applications, verified certificates and audit events.
///
/// Every write is atomic: it either fully applies or leaves the store
/// untouched.
pub trait RecordStore {
    /// Returns every application in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_applications(&mut self) -> Result<Vec<Application>, PersistenceError>;

    /// Returns the application with the given number, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get_application(
        &mut self,
        application_number: &ApplicationNumber,
    ) -> Result<Option<Application>, PersistenceError>;

    /// Returns every verified certificate in the order it was verified.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_verified(&mut self) -> Result<Vec<Application>, PersistenceError>;

    /// Returns the verified certificate with the given number, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get_verified(
        &mut self,
        application_number: &ApplicationNumber,
    ) -> Result<Option<Application>, PersistenceError>;

    /// Inserts a new application together with its audit event.
    ///
    /// Returns the id assigned to the audit event.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ApplicationNumberCollision` if the number is
    /// taken, `PersistenceError::DuplicateApplication` if the hall ticket and
    /// certificate kind pair is taken, or a database error.
    fn persist_submission(&mut self, result: &SubmissionResult) -> Result<i64, PersistenceError>;

    /// Replaces an application, appends it to the verified certificates when
    /// flagged, and records the audit event.
    ///
    /// The stored application must still match the transition's `before`
    /// snapshot. The verified append is idempotent per application number.
    /// Returns the id assigned to the audit event.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the application does not
    /// exist, `PersistenceError::WriteConflict` if it changed since the
    /// transition was computed, or a database error.
    fn persist_transition(&mut self, result: &TransitionResult) -> Result<i64, PersistenceError>;

    /// Returns the audit trail of one application, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_audit_events(
        &mut self,
        application_number: &ApplicationNumber,
    ) -> Result<Vec<AuditEvent>, PersistenceError>;
}

/// Refuses a transition computed from an outdated copy of `stored`.
///
/// # Errors
///
/// Returns `PersistenceError::WriteConflict` if `stored` no longer matches
/// the transition's `before` snapshot.
pub fn ensure_unchanged(
    stored: &Application,
    result: &TransitionResult,
) -> Result<(), PersistenceError> {
    let current: StateSnapshot = StateSnapshot::of(stored);
    if current == result.audit_event.before {
        return Ok(());
    }
    Err(PersistenceError::WriteConflict(format!(
        "Application {} is at [{}], transition expected [{}]",
        stored.application_number, current.data, result.audit_event.before.data
    )))
}
