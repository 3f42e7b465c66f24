// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cert_track::CoreError;
use cert_track_domain::DomainError;
use cert_track_persistence::PersistenceError;

use crate::{
    ApiError, RULE_STAGE_ORDER, translate_core_error, translate_domain_error,
    translate_persistence_error,
};

#[test]
fn test_guard_and_index_duplicates_translate_identically() {
    let from_core: ApiError = translate_core_error(CoreError::DuplicateApplication {
        identity_number: String::from("20CS101"),
        certificate_kind: String::from("Migration Certificate"),
    });
    let from_store: ApiError = translate_persistence_error(PersistenceError::DuplicateApplication {
        identity_number: String::from("20CS101"),
        certificate_kind: String::from("Migration Certificate"),
    });

    assert_eq!(from_core, from_store);
    assert!(from_core.is_duplicate_application());
}

#[test]
fn test_prerequisite_translates_to_stage_order_rule() {
    let err: ApiError = translate_core_error(CoreError::PrerequisiteNotMet {
        stage: String::from("AR Session"),
        required: String::from("Re-Block Queue"),
    });
    assert!(matches!(err, ApiError::DomainRuleViolation { ref rule, .. } if rule == RULE_STAGE_ORDER));
    assert!(!err.is_duplicate_application());
}

#[test]
fn test_domain_violation_passes_through_core() {
    let err: ApiError =
        translate_core_error(CoreError::DomainViolation(DomainError::NoDocumentsSelected));
    assert_eq!(err, translate_domain_error(DomainError::NoDocumentsSelected));
}

#[test]
fn test_database_failures_are_internal() {
    let err: ApiError =
        translate_persistence_error(PersistenceError::QueryFailed(String::from("disk I/O error")));
    assert!(matches!(err, ApiError::Internal { .. }));
    assert!(err.to_string().contains("disk I/O error"));
}

#[test]
fn test_error_display() {
    let err: ApiError = ApiError::InvalidInput {
        field: String::from("roll_number"),
        message: String::from("roll_number is required"),
    };
    assert_eq!(
        err.to_string(),
        "Invalid input for field 'roll_number': roll_number is required"
    );
}
