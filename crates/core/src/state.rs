// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cert_track_audit::AuditEvent;
use cert_track_domain::Application;

/// The result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    /// The newly created application, with every stage unset.
    pub application: Application,
    /// The audit event recording the submission.
    pub audit_event: AuditEvent,
}

/// The result of an applied stage approval.
///
/// Transitions are atomic: the caller persists all of it or none of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The application after the stage was recorded.
    pub new_application: Application,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
    /// True when the final stage completed and the application must be
    /// appended to the verified certificates.
    pub verified: bool,
}

/// Outcome of `apply_approval`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalOutcome {
    /// The stage was recorded.
    Applied(TransitionResult),
    /// The stage already held a status. Nothing changed and nothing should
    /// be persisted.
    AlreadyRecorded(Application),
}

impl ApprovalOutcome {
    /// Returns the application as it stands after the call.
    #[must_use]
    pub const fn application(&self) -> &Application {
        match self {
            Self::Applied(result) => &result.new_application,
            Self::AlreadyRecorded(application) => application,
        }
    }

    /// Returns true if this call changed the application.
    #[must_use]
    pub const fn was_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}
