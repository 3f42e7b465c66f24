// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApplicantDetails, Application, ApplicationNumber, CertificateKind, DegreeType, FeeOption,
    IdentityNumber, Stage, StageRecord,
};

pub fn create_test_details() -> ApplicantDetails {
    ApplicantDetails {
        applicant_name: String::from("Test Student"),
        identity_number: IdentityNumber::new("20CS101"),
        degree_type: DegreeType::UnderGraduate,
        sub_category: String::from("B.Tech"),
        certificate_kind: CertificateKind::Migration,
        selected_documents: vec![String::from("SBI Challan"), String::from("10th Memo")],
        fee_option: FeeOption::WithinState50,
    }
}

pub fn create_test_application() -> Application {
    Application::new(
        ApplicationNumber::new("SKD20260115A1B2C3"),
        create_test_details(),
        String::from("2026-01-15 09:30:00"),
    )
}

/// Records the success literal for every stage up to and including `last`.
pub fn approve_through(application: &mut Application, last: Stage) {
    for stage in Stage::ALL.into_iter().take(last.index() + 1) {
        let record: StageRecord = StageRecord::new(
            stage.definition().success_literal.to_string(),
            format!("2026-01-{:02} 10:00:00", 16 + stage.index()),
        );
        // Stages recorded by an earlier call keep their value.
        let _ = application.record_stage(stage, record);
    }
    if last.is_final() {
        let _ = application.mark_verified(String::from("2026-01-22 10:00:00"));
    }
}
