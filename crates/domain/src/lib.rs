// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod error;
mod stage;
mod timeline;
mod timestamp;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{CertificateKind, DegreeType, FeeOption};
pub use error::DomainError;
pub use stage::{ApplicationState, STAGE_POLICY, Stage, StageDefinition};
pub use timeline::{
    StageClass, StageView, TIMELINE_LEN, build_timeline, current_stage, progress_percentage,
    title_case,
};
pub use timestamp::{
    WAITING_PLACEHOLDER, date_prefix, display_timestamp, format_timestamp, parse_timestamp,
};

// Re-export public types
pub use types::{
    ApplicantDetails, Application, ApplicationNumber, IdentityNumber, StageRecord,
};
pub use validation::{validate_applicant_details, validate_application_number};
