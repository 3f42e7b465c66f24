// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::{CertificateKind, DegreeType, FeeOption};
use crate::stage::{ApplicationState, Stage};
use serde::{Deserialize, Serialize};

/// Globally unique identifier of an application.
///
/// Generated numbers take the form `SKD` + `YYYYMMDD` + six uppercase
/// hexadecimal characters, e.g. `SKD20260115A1B2C3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationNumber {
    value: String,
}

impl ApplicationNumber {
    /// Fixed textual prefix of every generated application number.
    pub const PREFIX: &'static str = "SKD";
    /// Number of characters in the random suffix.
    pub const SUFFIX_LEN: usize = 6;

    /// Wraps an existing application number, e.g. one supplied in a lookup.
    ///
    /// No format validation is performed; unknown numbers simply fail to
    /// resolve in the store.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Composes an application number from a date and a random value.
    ///
    /// Only the low 24 bits of `random` are used, rendered as six uppercase
    /// hexadecimal characters.
    #[must_use]
    pub fn compose(date: time::Date, random: u32) -> Self {
        let suffix: u32 = random & 0x00FF_FFFF;
        Self {
            value: format!(
                "{}{:04}{:02}{:02}{suffix:06X}",
                Self::PREFIX,
                date.year(),
                u8::from(date.month()),
                date.day()
            ),
        }
    }

    /// Returns true if the value follows the generated format.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let Some(rest) = self.value.strip_prefix(Self::PREFIX) else {
            return false;
        };
        if rest.len() != 8 + Self::SUFFIX_LEN || !rest.is_ascii() {
            return false;
        }
        let (date, suffix) = rest.split_at(8);
        date.chars().all(|c| c.is_ascii_digit())
            && suffix
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
    }

    /// Returns the application number value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for ApplicationNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Hall ticket / roll number identifying the applicant.
///
/// Compared by exact, case-sensitive string equality. No normalization is
/// applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityNumber {
    value: String,
}

impl IdentityNumber {
    /// Creates a new `IdentityNumber`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identity number value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The status and timestamp written by a single stage.
///
/// A stage is either entirely unset or carries both values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRecord {
    /// The recorded status text.
    pub status: String,
    /// When the status was recorded (`YYYY-MM-DD HH:MM:SS`).
    pub recorded_at: String,
}

impl StageRecord {
    /// Creates a new `StageRecord`.
    #[must_use]
    pub const fn new(status: String, recorded_at: String) -> Self {
        Self {
            status,
            recorded_at,
        }
    }
}

/// Applicant-supplied details of a certificate request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantDetails {
    /// The applicant's name.
    pub applicant_name: String,
    /// The applicant's hall ticket / roll number.
    pub identity_number: IdentityNumber,
    /// The degree type.
    pub degree_type: DegreeType,
    /// The program within the degree type.
    pub sub_category: String,
    /// The certificate being requested.
    pub certificate_kind: CertificateKind,
    /// Supporting documents handed in with the request.
    pub selected_documents: Vec<String>,
    /// The selected fee option.
    pub fee_option: FeeOption,
}

/// A single certificate application and its progress through the stages.
///
/// Each stage owns exactly one optional slot. Slots are written once, in
/// stage order, and never cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// The unique application number.
    pub application_number: ApplicationNumber,
    /// What was requested and by whom.
    #[serde(flatten)]
    pub details: ApplicantDetails,
    /// When the application was submitted (`YYYY-MM-DD HH:MM:SS`).
    pub submitted_at: String,
    /// Block office stage.
    pub block_office: Option<StageRecord>,
    /// Computer session stage.
    pub computer_session: Option<StageRecord>,
    /// Re-block queue stage.
    pub reblock: Option<StageRecord>,
    /// AR session stage.
    pub ar_session: Option<StageRecord>,
    /// VR session stage.
    pub vr_session: Option<StageRecord>,
    /// Post session stage.
    pub post_session: Option<StageRecord>,
    /// Final verification stage.
    pub verification: Option<StageRecord>,
    /// Set only when the final stage completes. Marks a verified certificate.
    pub verified_at: Option<String>,
}

impl Application {
    /// Creates a freshly submitted application with every stage unset.
    #[must_use]
    pub const fn new(
        application_number: ApplicationNumber,
        details: ApplicantDetails,
        submitted_at: String,
    ) -> Self {
        Self {
            application_number,
            details,
            submitted_at,
            block_office: None,
            computer_session: None,
            reblock: None,
            ar_session: None,
            vr_session: None,
            post_session: None,
            verification: None,
            verified_at: None,
        }
    }

    /// Returns the record written by `stage`, if any.
    #[must_use]
    pub const fn stage_record(&self, stage: Stage) -> Option<&StageRecord> {
        match stage {
            Stage::BlockOffice => self.block_office.as_ref(),
            Stage::ComputerSession => self.computer_session.as_ref(),
            Stage::Reblock => self.reblock.as_ref(),
            Stage::ArSession => self.ar_session.as_ref(),
            Stage::VrSession => self.vr_session.as_ref(),
            Stage::PostSession => self.post_session.as_ref(),
            Stage::Verification => self.verification.as_ref(),
        }
    }

    fn stage_slot_mut(&mut self, stage: Stage) -> &mut Option<StageRecord> {
        match stage {
            Stage::BlockOffice => &mut self.block_office,
            Stage::ComputerSession => &mut self.computer_session,
            Stage::Reblock => &mut self.reblock,
            Stage::ArSession => &mut self.ar_session,
            Stage::VrSession => &mut self.vr_session,
            Stage::PostSession => &mut self.post_session,
            Stage::Verification => &mut self.verification,
        }
    }

    /// Writes `record` into the slot for `stage` if that slot is still unset.
    ///
    /// Returns `false` and leaves the application untouched when the slot
    /// already holds a record.
    #[must_use]
    pub fn record_stage(&mut self, stage: Stage, record: StageRecord) -> bool {
        let slot: &mut Option<StageRecord> = self.stage_slot_mut(stage);
        if slot.is_some() {
            return false;
        }
        *slot = Some(record);
        true
    }

    /// Sets `verified_at` if it is not already set.
    ///
    /// Returns `false` when it was already set.
    #[must_use]
    pub fn mark_verified(&mut self, verified_at: String) -> bool {
        if self.verified_at.is_some() {
            return false;
        }
        self.verified_at = Some(verified_at);
        true
    }

    /// Returns true if `stage` has any status recorded.
    #[must_use]
    pub const fn is_stage_recorded(&self, stage: Stage) -> bool {
        self.stage_record(stage).is_some()
    }

    /// Returns true if `stage` has recorded its success literal.
    #[must_use]
    pub fn is_stage_complete(&self, stage: Stage) -> bool {
        self.stage_record(stage)
            .is_some_and(|record| stage.definition().is_success(&record.status))
    }

    /// Returns true once the certificate has been verified.
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.verified_at.is_some()
    }

    /// Returns the lifecycle state: the furthest stage completed without a gap.
    #[must_use]
    pub fn state(&self) -> ApplicationState {
        Stage::ALL
            .into_iter()
            .take_while(|stage| self.is_stage_complete(*stage))
            .last()
            .map_or(ApplicationState::Submitted, ApplicationState::after)
    }

    /// Returns the applicant's identity number.
    #[must_use]
    pub const fn identity_number(&self) -> &IdentityNumber {
        &self.details.identity_number
    }

    /// Returns the requested certificate kind.
    #[must_use]
    pub const fn certificate_kind(&self) -> CertificateKind {
        self.details.certificate_kind
    }
}
