// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Applicant name is empty or invalid.
    #[error("Invalid name: {0}")]
    InvalidName(String),
    /// Hall ticket / roll number is empty or invalid.
    #[error("Invalid identity number: {0}")]
    InvalidIdentityNumber(String),
    /// Application number does not follow the generated format.
    #[error("Invalid application number: {0}")]
    InvalidApplicationNumber(String),
    /// Degree type is not part of the catalog.
    #[error("Unknown degree type: {0}")]
    UnknownDegreeType(String),
    /// Program is not offered under the selected degree type.
    #[error("Program '{program}' is not offered under degree type {degree_type}")]
    InvalidSubCategory {
        /// The selected degree type.
        degree_type: String,
        /// The rejected program.
        program: String,
    },
    /// Certificate kind is not part of the catalog.
    #[error("Unknown certificate type: {0}")]
    UnknownCertificateKind(String),
    /// Fee option is not part of the catalog.
    #[error("Unknown fee option: {0}")]
    UnknownFeeOption(String),
    /// Fee option exists but is not offered for the certificate kind.
    #[error("Fee option '{fee_option}' is not available for {certificate_kind}")]
    FeeOptionNotAllowed {
        /// The certificate kind.
        certificate_kind: String,
        /// The rejected fee option.
        fee_option: String,
    },
    /// No supporting documents were selected.
    #[error("At least one supporting document must be selected")]
    NoDocumentsSelected,
    /// A selected document is not on the checklist for the certificate kind.
    #[error("Document '{document}' is not accepted for {certificate_kind}")]
    UnknownDocument {
        /// The certificate kind.
        certificate_kind: String,
        /// The rejected document.
        document: String,
    },
    /// Stage identifier does not name one of the approval stages.
    #[error("Unknown stage: {0}")]
    UnknownStage(String),
    /// A stored timestamp could not be parsed.
    #[error("Malformed timestamp '{value}': {reason}")]
    MalformedTimestamp {
        /// The raw stored value.
        value: String,
        /// The parser's description of the failure.
        reason: String,
    },
}
