// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Behaviour shared by every `RecordStore`.
//!
//! Each check runs against both `Persistence` and `InMemoryStore`.

use super::{create_test_submission, create_test_transition, drive_through};
use crate::{InMemoryStore, Persistence, PersistenceError, RecordStore};
use cert_track::{SubmissionResult, TransitionResult};
use cert_track_domain::{Application, ApplicationNumber, CertificateKind, Stage};

fn stores() -> Vec<Box<dyn RecordStore>> {
    vec![
        Box::new(Persistence::new_in_memory().unwrap()),
        Box::new(InMemoryStore::new()),
    ]
}

impl<T: RecordStore + ?Sized> RecordStore for Box<T> {
    fn list_applications(&mut self) -> Result<Vec<Application>, PersistenceError> {
        (**self).list_applications()
    }

    fn get_application(
        &mut self,
        application_number: &ApplicationNumber,
    ) -> Result<Option<Application>, PersistenceError> {
        (**self).get_application(application_number)
    }

    fn list_verified(&mut self) -> Result<Vec<Application>, PersistenceError> {
        (**self).list_verified()
    }

    fn get_verified(
        &mut self,
        application_number: &ApplicationNumber,
    ) -> Result<Option<Application>, PersistenceError> {
        (**self).get_verified(application_number)
    }

    fn persist_submission(&mut self, result: &SubmissionResult) -> Result<i64, PersistenceError> {
        (**self).persist_submission(result)
    }

    fn persist_transition(&mut self, result: &TransitionResult) -> Result<i64, PersistenceError> {
        (**self).persist_transition(result)
    }

    fn list_audit_events(
        &mut self,
        application_number: &ApplicationNumber,
    ) -> Result<Vec<cert_track_audit::AuditEvent>, PersistenceError> {
        (**self).list_audit_events(application_number)
    }
}

#[test]
fn test_submission_round_trips() {
    for mut store in stores() {
        let submission: SubmissionResult =
            create_test_submission("20CS101", CertificateKind::Migration, 0x00A1_B2C3);
        store.persist_submission(&submission).unwrap();

        let loaded: Option<Application> = store
            .get_application(&submission.application.application_number)
            .unwrap();
        assert_eq!(loaded, Some(submission.application.clone()));
        assert_eq!(store.list_applications().unwrap().len(), 1);
        assert!(store.list_verified().unwrap().is_empty());
    }
}

#[test]
fn test_unknown_number_is_none() {
    for mut store in stores() {
        let missing: ApplicationNumber = ApplicationNumber::new("SKD20260115FFFFFF");
        assert_eq!(store.get_application(&missing).unwrap(), None);
        assert_eq!(store.get_verified(&missing).unwrap(), None);
    }
}

#[test]
fn test_store_rejects_duplicate_pair() {
    for mut store in stores() {
        store
            .persist_submission(&create_test_submission(
                "20CS101",
                CertificateKind::Migration,
                1,
            ))
            .unwrap();

        let err: PersistenceError = store
            .persist_submission(&create_test_submission(
                "20CS101",
                CertificateKind::Migration,
                2,
            ))
            .unwrap_err();

        assert_eq!(
            err,
            PersistenceError::DuplicateApplication {
                identity_number: String::from("20CS101"),
                certificate_kind: String::from("Migration Certificate"),
            }
        );
        assert_eq!(store.list_applications().unwrap().len(), 1);
    }
}

#[test]
fn test_store_rejects_reused_number() {
    for mut store in stores() {
        store
            .persist_submission(&create_test_submission(
                "20CS101",
                CertificateKind::Migration,
                7,
            ))
            .unwrap();

        let err: PersistenceError = store
            .persist_submission(&create_test_submission(
                "20CS102",
                CertificateKind::Migration,
                7,
            ))
            .unwrap_err();

        assert!(matches!(err, PersistenceError::ApplicationNumberCollision(_)));
        assert_eq!(store.list_applications().unwrap().len(), 1);
    }
}

#[test]
fn test_same_identity_different_kind_is_stored() {
    for mut store in stores() {
        store
            .persist_submission(&create_test_submission(
                "20CS101",
                CertificateKind::Migration,
                1,
            ))
            .unwrap();
        store
            .persist_submission(&create_test_submission(
                "20CS101",
                CertificateKind::Transcripts,
                2,
            ))
            .unwrap();
        assert_eq!(store.list_applications().unwrap().len(), 2);
    }
}

#[test]
fn test_transition_updates_application_in_place() {
    for mut store in stores() {
        let submission: SubmissionResult =
            create_test_submission("20CS101", CertificateKind::Migration, 1);
        let stored: Application = drive_through(&mut store, &submission, Stage::Reblock);

        let loaded: Application = store
            .get_application(&stored.application_number)
            .unwrap()
            .unwrap();
        assert_eq!(loaded, stored);
        assert!(loaded.is_stage_complete(Stage::Reblock));
        assert_eq!(store.list_applications().unwrap().len(), 1);
        assert!(store.list_verified().unwrap().is_empty());
    }
}

#[test]
fn test_transition_for_unknown_application_is_not_found() {
    for mut store in stores() {
        let submission: SubmissionResult =
            create_test_submission("20CS101", CertificateKind::Migration, 1);
        let transition: TransitionResult =
            create_test_transition(&submission.application, Stage::BlockOffice);

        let err: PersistenceError = store.persist_transition(&transition).unwrap_err();
        assert!(matches!(err, PersistenceError::NotFound(_)));
        assert!(store.list_applications().unwrap().is_empty());
    }
}

#[test]
fn test_final_stage_appends_single_verified_copy() {
    for mut store in stores() {
        let submission: SubmissionResult =
            create_test_submission("20CS101", CertificateKind::Migration, 1);
        let stored: Application = drive_through(&mut store, &submission, Stage::Verification);

        let verified: Vec<Application> = store.list_verified().unwrap();
        assert_eq!(verified.len(), 1);
        assert_eq!(verified[0], stored);
        assert!(verified[0].verified_at.is_some());

        // The original stays in the application store.
        assert_eq!(store.list_applications().unwrap().len(), 1);
        assert_eq!(
            store.get_verified(&stored.application_number).unwrap(),
            Some(stored)
        );
    }
}

#[test]
fn test_replayed_final_transition_is_refused() {
    for mut store in stores() {
        let submission: SubmissionResult =
            create_test_submission("20CS101", CertificateKind::Migration, 1);
        let before_final: Application = drive_through(&mut store, &submission, Stage::PostSession);
        let transition: TransitionResult =
            create_test_transition(&before_final, Stage::Verification);

        store.persist_transition(&transition).unwrap();
        let err: PersistenceError = store.persist_transition(&transition).unwrap_err();

        assert!(matches!(err, PersistenceError::WriteConflict(_)));
        assert_eq!(store.list_verified().unwrap().len(), 1);
        assert_eq!(
            store
                .list_audit_events(&before_final.application_number)
                .unwrap()
                .len(),
            8
        );
    }
}

#[test]
fn test_transition_from_outdated_copy_is_refused() {
    for mut store in stores() {
        let submission: SubmissionResult =
            create_test_submission("20CS101", CertificateKind::Migration, 1);
        let outdated: Application = submission.application.clone();
        let stored: Application = drive_through(&mut store, &submission, Stage::ComputerSession);

        let replay: TransitionResult = create_test_transition(&outdated, Stage::BlockOffice);
        let err: PersistenceError = store.persist_transition(&replay).unwrap_err();

        assert!(matches!(err, PersistenceError::WriteConflict(_)));
        let loaded: Application = store
            .get_application(&stored.application_number)
            .unwrap()
            .unwrap();
        assert_eq!(loaded, stored);
        assert!(loaded.is_stage_complete(Stage::ComputerSession));
        assert_eq!(
            store
                .list_audit_events(&stored.application_number)
                .unwrap()
                .len(),
            3
        );
    }
}

#[test]
fn test_list_applications_keeps_insertion_order() {
    for mut store in stores() {
        for (index, identity) in ["20CS103", "20CS101", "20CS102"].iter().enumerate() {
            store
                .persist_submission(&create_test_submission(
                    identity,
                    CertificateKind::Provisional,
                    u32::try_from(index).unwrap(),
                ))
                .unwrap();
        }
        let identities: Vec<String> = store
            .list_applications()
            .unwrap()
            .iter()
            .map(|a| a.identity_number().value().to_string())
            .collect();
        assert_eq!(identities, vec!["20CS103", "20CS101", "20CS102"]);
    }
}
