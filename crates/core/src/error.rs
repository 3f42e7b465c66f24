// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cert_track_domain::DomainError;

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// An application for the same hall ticket and certificate kind exists.
    #[error(
        "An application for {certificate_kind} already exists for hall ticket {identity_number}"
    )]
    DuplicateApplication {
        /// The applicant's hall ticket.
        identity_number: String,
        /// The requested certificate kind.
        certificate_kind: String,
    },
    /// The previous stage has not recorded its success literal.
    #[error("Cannot approve {stage}: {required} has not been approved")]
    PrerequisiteNotMet {
        /// The stage being approved.
        stage: String,
        /// The stage that must be approved first.
        required: String,
    },
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
}
