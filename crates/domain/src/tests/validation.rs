// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_test_details;
use crate::{
    ApplicantDetails, ApplicationNumber, CertificateKind, DegreeType, DomainError, FeeOption,
    IdentityNumber, validate_applicant_details, validate_application_number,
};

#[test]
fn test_validate_applicant_details_accepts_valid_details() {
    let details: ApplicantDetails = create_test_details();
    assert!(validate_applicant_details(&details).is_ok());
}

#[test]
fn test_validate_applicant_details_rejects_blank_name() {
    let mut details: ApplicantDetails = create_test_details();
    details.applicant_name = String::from("   ");
    assert!(matches!(
        validate_applicant_details(&details),
        Err(DomainError::InvalidName(_))
    ));
}

#[test]
fn test_validate_applicant_details_rejects_blank_identity() {
    let mut details: ApplicantDetails = create_test_details();
    details.identity_number = IdentityNumber::new("");
    assert!(matches!(
        validate_applicant_details(&details),
        Err(DomainError::InvalidIdentityNumber(_))
    ));
}

#[test]
fn test_validate_applicant_details_rejects_program_from_other_degree() {
    let mut details: ApplicantDetails = create_test_details();
    details.degree_type = DegreeType::PostGraduate;
    assert!(matches!(
        validate_applicant_details(&details),
        Err(DomainError::InvalidSubCategory { .. })
    ));
}

#[test]
fn test_validate_applicant_details_rejects_empty_documents() {
    let mut details: ApplicantDetails = create_test_details();
    details.selected_documents.clear();
    assert_eq!(
        validate_applicant_details(&details),
        Err(DomainError::NoDocumentsSelected)
    );
}

#[test]
fn test_validate_applicant_details_rejects_unlisted_document() {
    let mut details: ApplicantDetails = create_test_details();
    details
        .selected_documents
        .push(String::from("All Years Marks Memo"));
    assert_eq!(
        validate_applicant_details(&details),
        Err(DomainError::UnknownDocument {
            certificate_kind: String::from("Migration Certificate"),
            document: String::from("All Years Marks Memo"),
        })
    );
}

#[test]
fn test_validate_applicant_details_rejects_fee_for_wrong_kind() {
    let mut details: ApplicantDetails = create_test_details();
    details.certificate_kind = CertificateKind::Transcripts;
    details.fee_option = FeeOption::OtherState60;
    assert!(matches!(
        validate_applicant_details(&details),
        Err(DomainError::FeeOptionNotAllowed { .. })
    ));
}

#[test]
fn test_validate_application_number() {
    assert!(validate_application_number(&ApplicationNumber::new("SKD20260115A1B2C3")).is_ok());
    assert!(matches!(
        validate_application_number(&ApplicationNumber::new("20CS101")),
        Err(DomainError::InvalidApplicationNumber(_))
    ));
}
