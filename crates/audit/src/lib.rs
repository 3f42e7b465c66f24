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

use cert_track_domain::{Application, ApplicationNumber, CertificateKind, Stage};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// The entity that performed an action.
///
/// Applicants submit; stage offices approve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Identifier of the actor (e.g. a hall ticket or an office slug).
    pub id: String,
    /// Kind of actor (e.g. "applicant", "office", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }

    /// The applicant filing a request.
    #[must_use]
    pub fn applicant(identity_number: &str) -> Self {
        Self::new(identity_number.to_string(), String::from("applicant"))
    }

    /// The office responsible for `stage`.
    #[must_use]
    pub fn office(stage: Stage) -> Self {
        Self::new(stage.slug().to_string(), String::from("office"))
    }
}

/// Why an action was initiated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    /// Identifier of the trigger, e.g. a request id.
    pub id: String,
    /// Free-form description.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// What was done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The action name (`SubmitApplication` or `ApproveStage`).
    pub name: String,
    /// Optional detail, such as the certificate kind or the stage.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }

    /// A new application for `certificate_kind`.
    #[must_use]
    pub fn submit(certificate_kind: CertificateKind) -> Self {
        Self::new(
            String::from("SubmitApplication"),
            Some(certificate_kind.to_string()),
        )
    }

    /// Approval of a single stage.
    #[must_use]
    pub fn approve(stage: Stage) -> Self {
        Self::new(
            String::from("ApproveStage"),
            Some(stage.display_name().to_string()),
        )
    }
}

/// Flattened view of an application's lifecycle fields.
///
/// Rendered as `state=<State>` followed by one `field=value` pair per
/// recorded stage, using the stage policy's field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// The rendered snapshot.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }

    /// Snapshot for a record that did not exist yet.
    #[must_use]
    pub fn absent() -> Self {
        Self::new(String::from("absent"))
    }

    /// Captures the lifecycle fields of `application`.
    #[must_use]
    pub fn of(application: &Application) -> Self {
        let mut parts: Vec<String> = vec![format!("state={}", application.state())];
        for stage in Stage::ALL {
            if let Some(record) = application.stage_record(stage) {
                let definition = stage.definition();
                parts.push(format!("{}={}", definition.status_field, record.status));
                parts.push(format!(
                    "{}={}",
                    definition.timestamp_field, record.recorded_at
                ));
            }
        }
        if let Some(verified_at) = &application.verified_at {
            parts.push(format!("verified_at={verified_at}"));
        }
        Self::new(parts.join(", "))
    }
}

/// An immutable record of one successful transition.
///
/// Every submission and every applied stage approval produces exactly one
/// event. Idempotent re-approvals produce none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Store-assigned id. `None` until persisted.
    pub event_id: Option<i64>,
    /// The application the event belongs to.
    pub application_number: ApplicationNumber,
    /// Who acted.
    pub actor: Actor,
    /// Why.
    pub cause: Cause,
    /// What.
    pub action: Action,
    /// Lifecycle fields before the transition.
    pub before: StateSnapshot,
    /// Lifecycle fields after the transition.
    pub after: StateSnapshot,
    /// When the transition happened (`YYYY-MM-DD HH:MM:SS`).
    pub recorded_at: String,
}

impl AuditEvent {
    /// Creates a new, not yet persisted `AuditEvent`.
    #[must_use]
    pub const fn new(
        application_number: ApplicationNumber,
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
        recorded_at: String,
    ) -> Self {
        Self {
            event_id: None,
            application_number,
            actor,
            cause,
            action,
            before,
            after,
            recorded_at,
        }
    }

    /// Returns a copy carrying the store-assigned id.
    #[must_use]
    pub fn with_event_id(self, event_id: i64) -> Self {
        Self {
            event_id: Some(event_id),
            ..self
        }
    }
}
