// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Approval stages and the stage policy table.
//!
//! The policy table is the single source of truth for stage order,
//! prerequisites, field names and the success literal of each stage.
//! Both the transition engine and the timeline projection read from it.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One step in the fixed approval pipeline.
///
/// Stages are ordered: each stage requires the previous stage to have
/// recorded its success literal before it may be acted upon.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Block office document verification.
    BlockOffice,
    /// Computer session digital processing.
    ComputerSession,
    /// Re-block queue.
    Reblock,
    /// AR session.
    ArSession,
    /// VR session.
    VrSession,
    /// Post session.
    PostSession,
    /// Final verification. Completing this stage issues the certificate.
    Verification,
}

/// Static configuration for a single stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageDefinition {
    /// The stage this definition describes.
    pub stage: Stage,
    /// Display name of the stage.
    pub display_name: &'static str,
    /// Cosmetic icon identifier.
    pub icon: &'static str,
    /// Name of the status field written by this stage.
    pub status_field: &'static str,
    /// Name of the timestamp field written by this stage.
    pub timestamp_field: &'static str,
    /// The status value that marks this stage complete (compared case-insensitively).
    pub success_literal: &'static str,
    /// Timeline label shown when the success literal is recorded.
    pub completed_label: &'static str,
    /// Timeline description once the stage has been acted on.
    pub completed_description: &'static str,
    /// Timeline description while the stage is pending.
    pub waiting_description: &'static str,
    /// Label reported by current-stage inference when this stage is the latest one set.
    pub current_stage_label: &'static str,
}

impl StageDefinition {
    /// Returns true if `status` equals this stage's success literal.
    #[must_use]
    pub fn is_success(&self, status: &str) -> bool {
        status.eq_ignore_ascii_case(self.success_literal)
    }
}

/// The stage policy table, in pipeline order.
///
/// Block Office records `"approve"`; every later stage records `"approved"`.
pub static STAGE_POLICY: [StageDefinition; 7] = [
    StageDefinition {
        stage: Stage::BlockOffice,
        display_name: "Block Office",
        icon: "fa-building",
        status_field: "verification_status",
        timestamp_field: "verification_time",
        success_literal: "approve",
        completed_label: "Approved",
        completed_description: "Document verification completed",
        waiting_description: "Waiting for document verification",
        current_stage_label: "Block Office",
    },
    StageDefinition {
        stage: Stage::ComputerSession,
        display_name: "Computer Session",
        icon: "fa-laptop",
        status_field: "computer_session_status",
        timestamp_field: "computer_session_time",
        success_literal: "approved",
        completed_label: "Approved",
        completed_description: "Digital processing completed",
        waiting_description: "Waiting for computer processing",
        current_stage_label: "Computer Session",
    },
    StageDefinition {
        stage: Stage::Reblock,
        display_name: "Re-Block Queue",
        icon: "fa-redo",
        status_field: "reblock_status",
        timestamp_field: "reblock_time",
        success_literal: "approved",
        completed_label: "Completed",
        completed_description: "Re-blocking process completed",
        waiting_description: "Waiting for previous steps",
        current_stage_label: "Re-Block Queue",
    },
    StageDefinition {
        stage: Stage::ArSession,
        display_name: "AR Session",
        icon: "fa-cube",
        status_field: "ar_status",
        timestamp_field: "ar_time",
        success_literal: "approved",
        completed_label: "Approved",
        completed_description: "Augmented reality verification",
        waiting_description: "Waiting for previous steps",
        current_stage_label: "AR Session",
    },
    StageDefinition {
        stage: Stage::VrSession,
        display_name: "VR Session",
        icon: "fa-vr-cardboard",
        status_field: "vr_status",
        timestamp_field: "vr_time",
        success_literal: "approved",
        completed_label: "Approved",
        completed_description: "Virtual reality processing",
        waiting_description: "Waiting for previous steps",
        current_stage_label: "VR Session",
    },
    StageDefinition {
        stage: Stage::PostSession,
        display_name: "Post Session",
        icon: "fa-mail-bulk",
        status_field: "post_status",
        timestamp_field: "post_time",
        success_literal: "approved",
        completed_label: "Approved",
        completed_description: "Final processing completed",
        waiting_description: "Waiting for previous steps",
        current_stage_label: "Post Session",
    },
    StageDefinition {
        stage: Stage::Verification,
        display_name: "Verified Certificate",
        icon: "fa-certificate",
        status_field: "verified_status",
        timestamp_field: "verified_time",
        success_literal: "approved",
        completed_label: "Approved",
        completed_description: "Certificate has been verified and is available for viewing",
        waiting_description: "Certificate is not yet verified",
        current_stage_label: "Verified Certificates",
    },
];

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Self; 7] = [
        Self::BlockOffice,
        Self::ComputerSession,
        Self::Reblock,
        Self::ArSession,
        Self::VrSession,
        Self::PostSession,
        Self::Verification,
    ];

    /// Returns the zero-based position of this stage in the pipeline.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::BlockOffice => 0,
            Self::ComputerSession => 1,
            Self::Reblock => 2,
            Self::ArSession => 3,
            Self::VrSession => 4,
            Self::PostSession => 5,
            Self::Verification => 6,
        }
    }

    /// Returns the stage at a zero-based pipeline position.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownStage` if the index is out of range.
    pub fn from_index(index: usize) -> Result<Self, DomainError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| DomainError::UnknownStage(format!("index {index}")))
    }

    /// Returns the policy entry for this stage.
    #[must_use]
    pub fn definition(self) -> &'static StageDefinition {
        &STAGE_POLICY[self.index()]
    }

    /// Returns the stage that must succeed before this one, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::BlockOffice => None,
            Self::ComputerSession => Some(Self::BlockOffice),
            Self::Reblock => Some(Self::ComputerSession),
            Self::ArSession => Some(Self::Reblock),
            Self::VrSession => Some(Self::ArSession),
            Self::PostSession => Some(Self::VrSession),
            Self::Verification => Some(Self::PostSession),
        }
    }

    /// Returns the stage that follows this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::BlockOffice => Some(Self::ComputerSession),
            Self::ComputerSession => Some(Self::Reblock),
            Self::Reblock => Some(Self::ArSession),
            Self::ArSession => Some(Self::VrSession),
            Self::VrSession => Some(Self::PostSession),
            Self::PostSession => Some(Self::Verification),
            Self::Verification => None,
        }
    }

    /// Returns true for the stage whose completion issues the certificate.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Verification)
    }

    /// Returns the URL-safe identifier for this stage.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::BlockOffice => "block_office",
            Self::ComputerSession => "computer_session",
            Self::Reblock => "reblock",
            Self::ArSession => "ar_session",
            Self::VrSession => "vr_session",
            Self::PostSession => "post_session",
            Self::Verification => "verification",
        }
    }

    /// Returns the display name from the policy table.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        self.definition().display_name
    }
}

impl FromStr for Stage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.slug() == s)
            .ok_or_else(|| DomainError::UnknownStage(s.to_string()))
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Lifecycle state of an application, derived from its stage records.
///
/// The chain is linear: each state is reached only from the one before it,
/// and `Verified` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ApplicationState {
    /// Submitted, no stage completed.
    Submitted,
    /// Block office approved.
    BlockApproved,
    /// Computer session approved.
    ComputerApproved,
    /// Re-block approved.
    ReblockApproved,
    /// AR session approved.
    ArApproved,
    /// VR session approved.
    VrApproved,
    /// Post session approved.
    PostApproved,
    /// Verification complete. Terminal.
    Verified,
}

impl ApplicationState {
    /// Returns the state reached once `stage` has succeeded.
    #[must_use]
    pub const fn after(stage: Stage) -> Self {
        match stage {
            Stage::BlockOffice => Self::BlockApproved,
            Stage::ComputerSession => Self::ComputerApproved,
            Stage::Reblock => Self::ReblockApproved,
            Stage::ArSession => Self::ArApproved,
            Stage::VrSession => Self::VrApproved,
            Stage::PostSession => Self::PostApproved,
            Stage::Verification => Self::Verified,
        }
    }

    /// Returns the next stage that may be approved from this state.
    #[must_use]
    pub const fn next_stage(self) -> Option<Stage> {
        match self {
            Self::Submitted => Some(Stage::BlockOffice),
            Self::BlockApproved => Some(Stage::ComputerSession),
            Self::ComputerApproved => Some(Stage::Reblock),
            Self::ReblockApproved => Some(Stage::ArSession),
            Self::ArApproved => Some(Stage::VrSession),
            Self::VrApproved => Some(Stage::PostSession),
            Self::PostApproved => Some(Stage::Verification),
            Self::Verified => None,
        }
    }

    /// Returns true if no further transition is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Verified)
    }

    /// Returns the string representation of the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::BlockApproved => "BlockApproved",
            Self::ComputerApproved => "ComputerApproved",
            Self::ReblockApproved => "ReblockApproved",
            Self::ArApproved => "ArApproved",
            Self::VrApproved => "VrApproved",
            Self::PostApproved => "PostApproved",
            Self::Verified => "Verified",
        }
    }
}

impl std::fmt::Display for ApplicationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
