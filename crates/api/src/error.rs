// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use cert_track::CoreError;
use cert_track_domain::DomainError;
use cert_track_persistence::PersistenceError;

/// Rule name reported when a hall ticket already holds an application for
/// the requested certificate.
pub const RULE_UNIQUE_APPLICATION: &str = "unique_application";

/// Rule name reported when a stage is approved out of order.
pub const RULE_STAGE_ORDER: &str = "stage_order";

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns true if the error reports an existing application for the
    /// same hall ticket and certificate kind.
    #[must_use]
    pub fn is_duplicate_application(&self) -> bool {
        matches!(self, Self::DomainRuleViolation { rule, .. } if rule == RULE_UNIQUE_APPLICATION)
    }
}

fn invalid_input(field: &str, message: String) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message,
    }
}

fn duplicate_application(identity_number: &str, certificate_kind: &str) -> ApiError {
    ApiError::DomainRuleViolation {
        rule: String::from(RULE_UNIQUE_APPLICATION),
        message: format!(
            "An application for {certificate_kind} already exists for hall ticket {identity_number}"
        ),
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidName(msg) => invalid_input("student_name", msg),
        DomainError::InvalidIdentityNumber(msg) => invalid_input("roll_number", msg),
        DomainError::InvalidApplicationNumber(number) => invalid_input(
            "application_number",
            format!("'{number}' is not a valid application number"),
        ),
        DomainError::UnknownDegreeType(value) => {
            invalid_input("degree_type", format!("Unknown degree type '{value}'"))
        }
        DomainError::InvalidSubCategory {
            degree_type,
            program,
        } => invalid_input(
            "sub_category",
            format!("Program '{program}' is not offered under {degree_type}"),
        ),
        DomainError::UnknownCertificateKind(value) => invalid_input(
            "certificate_type",
            format!("Unknown certificate type '{value}'"),
        ),
        DomainError::UnknownFeeOption(value) => {
            invalid_input("fee_option", format!("Unknown fee option '{value}'"))
        }
        DomainError::NoDocumentsSelected => invalid_input(
            "certificate_documents",
            String::from("At least one supporting document must be selected"),
        ),
        DomainError::UnknownStage(value) => {
            invalid_input("stage", format!("Unknown stage '{value}'"))
        }
        DomainError::FeeOptionNotAllowed {
            certificate_kind,
            fee_option,
        } => ApiError::DomainRuleViolation {
            rule: String::from("fee_option_for_certificate"),
            message: format!("Fee option '{fee_option}' is not available for {certificate_kind}"),
        },
        DomainError::UnknownDocument {
            certificate_kind,
            document,
        } => ApiError::DomainRuleViolation {
            rule: String::from("document_checklist"),
            message: format!("Document '{document}' is not accepted for {certificate_kind}"),
        },
        DomainError::MalformedTimestamp { value, reason } => ApiError::Internal {
            message: format!("Stored timestamp '{value}' is malformed: {reason}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DuplicateApplication {
            identity_number,
            certificate_kind,
        } => duplicate_application(&identity_number, &certificate_kind),
        CoreError::PrerequisiteNotMet { stage, required } => ApiError::DomainRuleViolation {
            rule: String::from(RULE_STAGE_ORDER),
            message: format!("Cannot approve {stage}: {required} has not been approved"),
        },
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a persistence error into an API error.
///
/// A unique-index rejection surfaces as the same conflict the duplicate
/// guard reports. Everything else is internal.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::DuplicateApplication {
            identity_number,
            certificate_kind,
        } => duplicate_application(&identity_number, &certificate_kind),
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Application"),
            message,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
