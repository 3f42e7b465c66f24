// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApprovalOutcome, SubmissionResult, SubmitApplication, apply_approval, apply_submission};
use cert_track_audit::{Actor, Cause};
use cert_track_domain::{
    ApplicantDetails, Application, ApplicationNumber, CertificateKind, DegreeType, FeeOption,
    IdentityNumber, Stage,
};
use time::PrimitiveDateTime;
use time::macros::datetime;

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("clerk-123"), String::from("office"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Counter request"))
}

pub fn create_test_now() -> PrimitiveDateTime {
    datetime!(2026-01-15 09:30:00)
}

pub fn create_test_details(identity: &str, kind: CertificateKind) -> ApplicantDetails {
    let fee_option: FeeOption = if kind == CertificateKind::Transcripts {
        FeeOption::WithinState80
    } else {
        FeeOption::WithinState50
    };
    ApplicantDetails {
        applicant_name: String::from("Test Student"),
        identity_number: IdentityNumber::new(identity),
        degree_type: DegreeType::UnderGraduate,
        sub_category: String::from("B.Tech"),
        certificate_kind: kind,
        selected_documents: vec![String::from("SBI Challan"), String::from("Aadhaar Card")],
        fee_option,
    }
}

pub fn create_test_number(suffix: u32) -> ApplicationNumber {
    ApplicationNumber::compose(create_test_now().date(), suffix)
}

/// Submits a fresh application against empty stores.
pub fn create_test_application(identity: &str, kind: CertificateKind) -> Application {
    let result: SubmissionResult = apply_submission(
        &[],
        &[],
        SubmitApplication::new(create_test_details(identity, kind)),
        create_test_number(0x00A1_B2C3),
        create_test_now(),
        Actor::applicant(identity),
        create_test_cause(),
    )
    .unwrap();
    result.application
}

/// Approves every stage up to and including `last`, in order.
pub fn approve_through(application: &Application, last: Stage) -> Application {
    let mut current: Application = application.clone();
    for stage in Stage::ALL.into_iter().take(last.index() + 1) {
        let outcome: ApprovalOutcome = apply_approval(
            &current,
            stage,
            create_test_now(),
            Actor::office(stage),
            create_test_cause(),
        )
        .unwrap();
        current = outcome.application().clone();
    }
    current
}
