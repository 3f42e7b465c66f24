// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timeline and progress projection.
//!
//! A pure read-side view over an `Application`. Nothing here mutates or
//! validates state; malformed stored timestamps are rendered verbatim.

use crate::stage::{STAGE_POLICY, Stage, StageDefinition};
use crate::timestamp::{WAITING_PLACEHOLDER, display_timestamp};
use crate::types::Application;
use serde::{Deserialize, Serialize};

/// Number of entries in every timeline.
pub const TIMELINE_LEN: usize = 8;

const SUBMITTED_LABEL: &str = "Application Submitted";
const SUBMITTED_ICON: &str = "fa-paper-plane";
const PENDING_LABEL: &str = "Pending";
const COMPLETED_LABEL: &str = "Completed";
const APPROVED_LABEL: &str = "Approved";

/// Visual class of a timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageClass {
    /// The entry's stage has succeeded.
    Completed,
    /// The entry's stage has not succeeded yet.
    Pending,
}

/// A single rendered entry of the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageView {
    /// One-based position in the timeline.
    pub step: u8,
    /// Stage display name.
    pub stage: String,
    /// Status label.
    pub status: String,
    /// Rendered timestamp or the waiting placeholder.
    pub timestamp: String,
    /// Visual class.
    pub class: StageClass,
    /// Cosmetic icon identifier.
    pub icon: String,
    /// Human-readable description.
    pub description: String,
}

/// Builds the eight-entry timeline for an application.
///
/// Entry 1 is the submission, entries 2 through 7 are the six processing
/// offices, and entry 8 reflects `verified_at`.
#[must_use]
pub fn build_timeline(application: &Application) -> Vec<StageView> {
    let mut timeline: Vec<StageView> = Vec::with_capacity(TIMELINE_LEN);

    timeline.push(StageView {
        step: 1,
        stage: SUBMITTED_LABEL.to_string(),
        status: COMPLETED_LABEL.to_string(),
        timestamp: display_timestamp(Some(application.submitted_at.as_str())),
        class: StageClass::Completed,
        icon: SUBMITTED_ICON.to_string(),
        description: format!(
            "{} application submitted successfully",
            application.certificate_kind()
        ),
    });

    let mut step: u8 = 2;
    for definition in STAGE_POLICY.iter().filter(|d| !d.stage.is_final()) {
        let view = match application.stage_record(definition.stage) {
            Some(record) if !record.status.is_empty() && !record.recorded_at.is_empty() => {
                let success = definition.is_success(&record.status);
                StageView {
                    step,
                    stage: definition.display_name.to_string(),
                    status: if success {
                        definition.completed_label.to_string()
                    } else {
                        title_case(&record.status)
                    },
                    timestamp: display_timestamp(Some(record.recorded_at.as_str())),
                    class: if success {
                        StageClass::Completed
                    } else {
                        StageClass::Pending
                    },
                    icon: definition.icon.to_string(),
                    description: definition.completed_description.to_string(),
                }
            }
            _ => pending_view(step, definition),
        };
        timeline.push(view);
        step += 1;
    }

    let verified = Stage::Verification.definition();
    timeline.push(match application.verified_at.as_deref() {
        Some(verified_at) if !verified_at.is_empty() => StageView {
            step,
            stage: verified.display_name.to_string(),
            status: verified.completed_label.to_string(),
            timestamp: display_timestamp(Some(verified_at)),
            class: StageClass::Completed,
            icon: verified.icon.to_string(),
            description: verified.completed_description.to_string(),
        },
        _ => pending_view(step, verified),
    });

    timeline
}

fn pending_view(step: u8, definition: &StageDefinition) -> StageView {
    StageView {
        step,
        stage: definition.display_name.to_string(),
        status: PENDING_LABEL.to_string(),
        timestamp: WAITING_PLACEHOLDER.to_string(),
        class: StageClass::Pending,
        icon: definition.icon.to_string(),
        description: definition.waiting_description.to_string(),
    }
}

/// Returns the share of timeline entries labelled "Completed" or "Approved",
/// as a percentage.
///
/// An empty timeline yields 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn progress_percentage(timeline: &[StageView]) -> f64 {
    if timeline.is_empty() {
        return 0.0;
    }
    let completed: usize = timeline
        .iter()
        .filter(|view| view.status == COMPLETED_LABEL || view.status == APPROVED_LABEL)
        .count();
    (completed as f64 / timeline.len() as f64) * 100.0
}

/// Infers where the application currently sits.
///
/// Scans from the last stage backwards and reports the first stage that has
/// been acted upon, whether or not it succeeded.
#[must_use]
pub fn current_stage(application: &Application) -> &'static str {
    if application.is_verified() {
        return Stage::Verification.definition().current_stage_label;
    }
    Stage::ALL
        .into_iter()
        .rev()
        .find(|stage| {
            application
                .stage_record(*stage)
                .is_some_and(|record| !record.status.is_empty())
        })
        .map_or(SUBMITTED_LABEL, |stage| {
            stage.definition().current_stage_label
        })
}

/// Capitalises the first letter of each alphabetic run and lowercases the
/// rest.
///
/// `"on hold"` becomes `"On Hold"` and `"re-check"` becomes `"Re-Check"`.
#[must_use]
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for c in value.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
