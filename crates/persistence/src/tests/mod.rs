// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod store_tests;

use cert_track::{
    ApprovalOutcome, SubmissionResult, SubmitApplication, TransitionResult, apply_approval,
    apply_submission,
};
use cert_track_audit::{Actor, Cause};
use cert_track_domain::{
    ApplicantDetails, Application, ApplicationNumber, CertificateKind, DegreeType, FeeOption,
    IdentityNumber, Stage,
};
use time::PrimitiveDateTime;
use time::macros::datetime;

use crate::RecordStore;

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("test-cause"), String::from("Test operation"))
}

pub fn create_test_now() -> PrimitiveDateTime {
    datetime!(2026-01-15 09:30:00)
}

pub fn create_test_details(identity: &str, kind: CertificateKind) -> ApplicantDetails {
    ApplicantDetails {
        applicant_name: String::from("Test Student"),
        identity_number: IdentityNumber::new(identity),
        degree_type: DegreeType::UnderGraduate,
        sub_category: String::from("B.Tech"),
        certificate_kind: kind,
        selected_documents: vec![String::from("SBI Challan")],
        fee_option: if kind == CertificateKind::Transcripts {
            FeeOption::WithinState80
        } else {
            FeeOption::WithinState50
        },
    }
}

/// Builds a submission against empty collections.
pub fn create_test_submission(
    identity: &str,
    kind: CertificateKind,
    suffix: u32,
) -> SubmissionResult {
    apply_submission(
        &[],
        &[],
        SubmitApplication::new(create_test_details(identity, kind)),
        ApplicationNumber::compose(create_test_now().date(), suffix),
        create_test_now(),
        Actor::applicant(identity),
        create_test_cause(),
    )
    .unwrap()
}

/// Applies one stage approval and returns the transition to persist.
pub fn create_test_transition(application: &Application, stage: Stage) -> TransitionResult {
    match apply_approval(
        application,
        stage,
        create_test_now(),
        Actor::office(stage),
        create_test_cause(),
    )
    .unwrap()
    {
        ApprovalOutcome::Applied(result) => result,
        ApprovalOutcome::AlreadyRecorded(_) => panic!("stage {stage} already recorded"),
    }
}

/// Submits and then persists every stage through `last`, returning the
/// stored application.
pub fn drive_through<S: RecordStore>(
    store: &mut S,
    submission: &SubmissionResult,
    last: Stage,
) -> Application {
    store.persist_submission(submission).unwrap();
    let mut current: Application = submission.application.clone();
    for stage in Stage::ALL.into_iter().take(last.index() + 1) {
        let transition: TransitionResult = create_test_transition(&current, stage);
        store.persist_transition(&transition).unwrap();
        current = transition.new_application;
    }
    current
}
