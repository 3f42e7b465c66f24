// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed catalog of degrees, certificate kinds and fee options.
//!
//! The catalog is static configuration. Submissions are validated against
//! it before an application is created.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The degree a certificate is being requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DegreeType {
    /// Under Graduate (UG).
    #[serde(rename = "UG")]
    UnderGraduate,
    /// Post Graduate (PG).
    #[serde(rename = "PG")]
    PostGraduate,
    /// Master of Philosophy.
    #[serde(rename = "Master of Philosophy")]
    MasterOfPhilosophy,
    /// Doctor of Philosophy.
    #[serde(rename = "Doctor of Philosophy")]
    DoctorOfPhilosophy,
}

impl DegreeType {
    /// All degree types in catalog order.
    pub const ALL: [Self; 4] = [
        Self::UnderGraduate,
        Self::PostGraduate,
        Self::MasterOfPhilosophy,
        Self::DoctorOfPhilosophy,
    ];

    /// Returns the stored representation of the degree type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnderGraduate => "UG",
            Self::PostGraduate => "PG",
            Self::MasterOfPhilosophy => "Master of Philosophy",
            Self::DoctorOfPhilosophy => "Doctor of Philosophy",
        }
    }

    /// Returns the long-form label shown to applicants.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::UnderGraduate => "Under Graduate (UG)",
            Self::PostGraduate => "Post Graduate (PG)",
            Self::MasterOfPhilosophy => "Master of Philosophy",
            Self::DoctorOfPhilosophy => "Doctor of Philosophy",
        }
    }

    /// Returns the programs offered under this degree type.
    #[must_use]
    pub const fn programs(&self) -> &'static [&'static str] {
        match self {
            Self::UnderGraduate => &[
                "B.Tech",
                "B.Pharmacy",
                "B.A",
                "B.Sc",
                "B.Com",
                "BBA",
                "B.Ed",
                "B.P.Ed",
            ],
            Self::PostGraduate => &[
                "M.Tech",
                "M.Pharmacy",
                "MBA",
                "M.A",
                "M.Sc",
                "M.Com",
                "M.P.Ed",
                "MSW",
                "M.Lib.I.Sc",
            ],
            Self::MasterOfPhilosophy => &["M.Phil"],
            Self::DoctorOfPhilosophy => &["Ph.D"],
        }
    }

    /// Returns true if the program is offered under this degree type.
    #[must_use]
    pub fn offers_program(&self, program: &str) -> bool {
        self.programs().contains(&program)
    }
}

impl FromStr for DegreeType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|degree| degree.as_str() == s)
            .ok_or_else(|| DomainError::UnknownDegreeType(s.to_string()))
    }
}

impl std::fmt::Display for DegreeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fee payment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeOption {
    /// Within State - Rs 50.
    #[serde(rename = "within_state_50")]
    WithinState50,
    /// Other State - Rs 60.
    #[serde(rename = "other_state_60")]
    OtherState60,
    /// Within State - Rs 80.
    #[serde(rename = "within_state_80")]
    WithinState80,
    /// Other State - Rs 100.
    #[serde(rename = "other_state_100")]
    OtherState100,
}

impl FeeOption {
    /// All fee options in catalog order.
    pub const ALL: [Self; 4] = [
        Self::WithinState50,
        Self::OtherState60,
        Self::WithinState80,
        Self::OtherState100,
    ];

    /// Returns the stored representation of the fee option.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WithinState50 => "within_state_50",
            Self::OtherState60 => "other_state_60",
            Self::WithinState80 => "within_state_80",
            Self::OtherState100 => "other_state_100",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::WithinState50 => "Within State - Rs 50",
            Self::OtherState60 => "Other State - Rs 60",
            Self::WithinState80 => "Within State - Rs 80",
            Self::OtherState100 => "Other State - Rs 100",
        }
    }

    /// Returns the fee in rupees.
    #[must_use]
    pub const fn price_rupees(&self) -> u16 {
        match self {
            Self::WithinState50 => 50,
            Self::OtherState60 => 60,
            Self::WithinState80 => 80,
            Self::OtherState100 => 100,
        }
    }
}

impl FromStr for FeeOption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fee| fee.as_str() == s)
            .ok_or_else(|| DomainError::UnknownFeeOption(s.to_string()))
    }
}

impl std::fmt::Display for FeeOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of certificate being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CertificateKind {
    /// Provisional Certificate.
    #[serde(rename = "Provisional Certificate")]
    Provisional,
    /// Migration Certificate.
    #[serde(rename = "Migration Certificate")]
    Migration,
    /// Convocation Certificate.
    #[serde(rename = "Convocation Certificate")]
    Convocation,
    /// Transcripts Certificate.
    #[serde(rename = "Transcripts Certificate")]
    Transcripts,
}

/// Checklist shared by Migration and Convocation certificates.
const COMMON_DOCUMENTS: [&str; 8] = [
    "SBI Challan",
    "Application Form",
    "Inter Memo",
    "10th Memo",
    "Aadhaar Card",
    "A4 Size Cloth Cover",
    "Transfer Certificate",
    "CCM and Provisional/Old Provisional",
];

impl CertificateKind {
    /// All certificate kinds in catalog order.
    pub const ALL: [Self; 4] = [
        Self::Provisional,
        Self::Migration,
        Self::Convocation,
        Self::Transcripts,
    ];

    /// Returns the stored representation of the certificate kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Provisional => "Provisional Certificate",
            Self::Migration => "Migration Certificate",
            Self::Convocation => "Convocation Certificate",
            Self::Transcripts => "Transcripts Certificate",
        }
    }

    /// Returns the document checklist for this certificate kind.
    #[must_use]
    pub const fn documents(&self) -> &'static [&'static str] {
        match self {
            Self::Provisional => &[
                "SBI Challan",
                "Application Form",
                "Lower Degree Convocation",
                "All Years Marks Memo",
                "Other University Original Migration",
                "Inter Memo",
                "10th Memo",
                "Aadhaar Card",
                "A4 Size Cloth Cover",
            ],
            Self::Migration | Self::Convocation => &COMMON_DOCUMENTS,
            Self::Transcripts => &[
                "SBI Challan",
                "Application Form",
                "Inter Memo",
                "10th Memo",
                "Aadhaar Card",
                "A4 Size Cloth Cover",
                "Transfer Certificate",
                "CCM and Provisional/Old Provisional",
                "Convocation",
            ],
        }
    }

    /// Returns the fee options offered for this certificate kind.
    #[must_use]
    pub const fn fee_options(&self) -> &'static [FeeOption] {
        match self {
            Self::Provisional | Self::Migration | Self::Convocation => {
                &[FeeOption::WithinState50, FeeOption::OtherState60]
            }
            Self::Transcripts => &[FeeOption::WithinState80, FeeOption::OtherState100],
        }
    }

    /// Returns the additional requirements note.
    #[must_use]
    pub const fn additional_requirements(&self) -> &'static str {
        match self {
            Self::Provisional | Self::Migration | Self::Transcripts => "Attach Postal Stamp",
            Self::Convocation => {
                "Attach Postal Stamp, Application - 2 Photos, Gazetted - 1 Photo above Gazetted Attestation"
            }
        }
    }

    /// Returns true if the document is on this kind's checklist.
    #[must_use]
    pub fn accepts_document(&self, document: &str) -> bool {
        self.documents().contains(&document)
    }

    /// Returns true if the fee option is offered for this kind.
    #[must_use]
    pub fn allows_fee(&self, fee_option: FeeOption) -> bool {
        self.fee_options().contains(&fee_option)
    }
}

impl FromStr for CertificateKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::UnknownCertificateKind(s.to_string()))
    }
}

impl std::fmt::Display for CertificateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
