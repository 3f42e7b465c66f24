// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::ApplicantDetails;

/// Validates submitted applicant details against the catalog.
///
/// This function checks field presence and catalog membership only.
/// It does NOT check for duplicates (that requires the existing records).
///
/// # Arguments
///
/// * `details` - The applicant details to validate
///
/// # Errors
///
/// Returns an error if:
/// - The applicant name is empty
/// - The identity number is empty
/// - The program is not offered under the degree type
/// - No documents are selected, or one is not on the checklist
/// - The fee option is not offered for the certificate kind
pub fn validate_applicant_details(details: &ApplicantDetails) -> Result<(), DomainError> {
    // Rule: name must not be blank
    if details.applicant_name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    // Rule: hall ticket must not be blank
    if details.identity_number.value().trim().is_empty() {
        return Err(DomainError::InvalidIdentityNumber(String::from(
            "Hall ticket number cannot be empty",
        )));
    }

    if !details.degree_type.offers_program(&details.sub_category) {
        return Err(DomainError::InvalidSubCategory {
            degree_type: details.degree_type.to_string(),
            program: details.sub_category.clone(),
        });
    }

    if details.selected_documents.is_empty() {
        return Err(DomainError::NoDocumentsSelected);
    }

    if let Some(document) = details
        .selected_documents
        .iter()
        .find(|document| !details.certificate_kind.accepts_document(document))
    {
        return Err(DomainError::UnknownDocument {
            certificate_kind: details.certificate_kind.to_string(),
            document: document.clone(),
        });
    }

    if !details.certificate_kind.allows_fee(details.fee_option) {
        return Err(DomainError::FeeOptionNotAllowed {
            certificate_kind: details.certificate_kind.to_string(),
            fee_option: details.fee_option.to_string(),
        });
    }

    Ok(())
}

/// Validates that an application number follows the generated format.
///
/// # Errors
///
/// Returns `DomainError::InvalidApplicationNumber` if the value does not
/// start with the prefix followed by eight date digits and six uppercase
/// hexadecimal characters.
pub fn validate_application_number(
    application_number: &crate::types::ApplicationNumber,
) -> Result<(), DomainError> {
    if !application_number.is_well_formed() {
        return Err(DomainError::InvalidApplicationNumber(
            application_number.value().to_string(),
        ));
    }
    Ok(())
}
