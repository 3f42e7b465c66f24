// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-process record store.
//!
//! Holds everything in vectors. Enforces the same uniqueness rules as the
//! `SQLite` schema so the two stores are interchangeable.

use cert_track::{SubmissionResult, TransitionResult};
use cert_track_audit::AuditEvent;
use cert_track_domain::{Application, ApplicationNumber};
use tracing::debug;

use crate::error::PersistenceError;
use crate::store::{RecordStore, ensure_unchanged};

/// A `RecordStore` kept entirely in memory.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    applications: Vec<Application>,
    verified: Vec<Application>,
    audit_events: Vec<AuditEvent>,
    next_event_id: i64,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            applications: Vec::new(),
            verified: Vec::new(),
            audit_events: Vec::new(),
            next_event_id: 1,
        }
    }

    fn record_event(&mut self, event: &AuditEvent) -> i64 {
        let event_id: i64 = self.next_event_id;
        self.next_event_id += 1;
        self.audit_events
            .push(event.clone().with_event_id(event_id));
        event_id
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryStore {
    fn list_applications(&mut self) -> Result<Vec<Application>, PersistenceError> {
        Ok(self.applications.clone())
    }

    fn get_application(
        &mut self,
        application_number: &ApplicationNumber,
    ) -> Result<Option<Application>, PersistenceError> {
        Ok(self
            .applications
            .iter()
            .find(|a| &a.application_number == application_number)
            .cloned())
    }

    fn list_verified(&mut self) -> Result<Vec<Application>, PersistenceError> {
        Ok(self.verified.clone())
    }

    fn get_verified(
        &mut self,
        application_number: &ApplicationNumber,
    ) -> Result<Option<Application>, PersistenceError> {
        Ok(self
            .verified
            .iter()
            .find(|a| &a.application_number == application_number)
            .cloned())
    }

    fn persist_submission(&mut self, result: &SubmissionResult) -> Result<i64, PersistenceError> {
        let application: &Application = &result.application;

        if self
            .applications
            .iter()
            .any(|a| a.application_number == application.application_number)
        {
            return Err(PersistenceError::ApplicationNumberCollision(
                application.application_number.to_string(),
            ));
        }

        if self.applications.iter().any(|a| {
            a.identity_number() == application.identity_number()
                && a.certificate_kind() == application.certificate_kind()
        }) {
            return Err(PersistenceError::DuplicateApplication {
                identity_number: application.identity_number().to_string(),
                certificate_kind: application.certificate_kind().to_string(),
            });
        }

        self.applications.push(application.clone());
        let event_id: i64 = self.record_event(&result.audit_event);
        debug!(
            event_id,
            application_number = %application.application_number,
            "Stored submission in memory"
        );
        Ok(event_id)
    }

    fn persist_transition(&mut self, result: &TransitionResult) -> Result<i64, PersistenceError> {
        let application: &Application = &result.new_application;
        let slot: &mut Application = self
            .applications
            .iter_mut()
            .find(|a| a.application_number == application.application_number)
            .ok_or_else(|| {
                PersistenceError::NotFound(format!(
                    "Application {}",
                    application.application_number
                ))
            })?;
        ensure_unchanged(slot, result)?;
        *slot = application.clone();

        if result.verified
            && !self
                .verified
                .iter()
                .any(|a| a.application_number == application.application_number)
        {
            self.verified.push(application.clone());
        }

        let event_id: i64 = self.record_event(&result.audit_event);
        debug!(
            event_id,
            application_number = %application.application_number,
            verified = result.verified,
            "Stored transition in memory"
        );
        Ok(event_id)
    }

    fn list_audit_events(
        &mut self,
        application_number: &ApplicationNumber,
    ) -> Result<Vec<AuditEvent>, PersistenceError> {
        Ok(self
            .audit_events
            .iter()
            .filter(|e| &e.application_number == application_number)
            .cloned()
            .collect())
    }
}
