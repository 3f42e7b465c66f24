// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use cert_track_audit::Cause;
use cert_track_domain::Stage;
use cert_track_persistence::{InMemoryStore, Persistence, RecordStore};
use time::PrimitiveDateTime;
use time::macros::datetime;

use crate::{SubmitApplicationRequest, SubmitApplicationResponse, approve_stage, submit_application};

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-456"), String::from("API request"))
}

pub fn create_test_now() -> PrimitiveDateTime {
    datetime!(2026-01-15 09:30:00)
}

pub fn create_test_store() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_test_memory_store() -> InMemoryStore {
    InMemoryStore::new()
}

pub fn create_valid_request() -> SubmitApplicationRequest {
    SubmitApplicationRequest {
        student_name: String::from("Asha Rao"),
        roll_number: String::from("20CS101"),
        degree_type: String::from("UG"),
        sub_category: String::from("B.Tech"),
        certificate_type: String::from("Migration Certificate"),
        certificate_documents: vec![String::from("SBI Challan"), String::from("10th Memo")],
        fee_option: String::from("within_state_50"),
    }
}

pub fn create_request_for(
    student_name: &str,
    roll_number: &str,
    certificate_type: &str,
) -> SubmitApplicationRequest {
    let fee_option: &str = if certificate_type == "Transcripts Certificate" {
        "within_state_80"
    } else {
        "within_state_50"
    };
    SubmitApplicationRequest {
        student_name: student_name.to_string(),
        roll_number: roll_number.to_string(),
        certificate_type: certificate_type.to_string(),
        fee_option: fee_option.to_string(),
        ..create_valid_request()
    }
}

/// Submits `request` at `now` and returns the new application number.
pub fn submit_at<S: RecordStore>(
    store: &mut S,
    request: SubmitApplicationRequest,
    now: PrimitiveDateTime,
) -> String {
    let response: SubmitApplicationResponse =
        submit_application(store, request, now, create_test_cause()).unwrap();
    response.application_number
}

/// Approves every stage up to and including `last`.
pub fn approve_through<S: RecordStore>(store: &mut S, application_number: &str, last: Stage) {
    for stage in Stage::ALL.into_iter().take(last.index() + 1) {
        approve_stage(
            store,
            application_number,
            stage,
            create_test_now(),
            &create_test_cause(),
        )
        .unwrap();
    }
}
