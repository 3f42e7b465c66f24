// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cert_track_domain::{ApplicantDetails, ApplicationNumber, Stage};

/// Request to file a new certificate application.
///
/// Commands carry intent as data only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitApplication {
    /// What is being requested and by whom.
    pub details: ApplicantDetails,
}

impl SubmitApplication {
    /// Creates a new `SubmitApplication` command.
    #[must_use]
    pub const fn new(details: ApplicantDetails) -> Self {
        Self { details }
    }
}

/// Request from a stage office to record its approval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveStage {
    /// The application being approved.
    pub application_number: ApplicationNumber,
    /// The stage recording its approval.
    pub stage: Stage,
}

impl ApproveStage {
    /// Creates a new `ApproveStage` command.
    #[must_use]
    pub const fn new(application_number: ApplicationNumber, stage: Stage) -> Self {
        Self {
            application_number,
            stage,
        }
    }
}
