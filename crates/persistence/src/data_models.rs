// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::diesel_schema::{applications, audit_events, verified_certificates};

/// Serializable representation of an Actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorData {
    pub id: String,
    pub actor_type: String,
}

/// Serializable representation of a Cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CauseData {
    pub id: String,
    pub description: String,
}

/// Serializable representation of an Action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionData {
    pub name: String,
    pub details: Option<String>,
}

/// Serializable representation of a `StateSnapshot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshotData {
    pub data: String,
}

/// Row of the `applications` table.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = applications)]
pub struct ApplicationRow {
    #[allow(dead_code)]
    pub application_id: i64,
    pub application_number: String,
    #[allow(dead_code)]
    pub identity_number: String,
    #[allow(dead_code)]
    pub certificate_kind: String,
    #[allow(dead_code)]
    pub submitted_at: String,
    #[allow(dead_code)]
    pub verified_at: Option<String>,
    pub record_json: String,
}

/// Row of the `verified_certificates` table.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = verified_certificates)]
pub struct VerifiedRow {
    #[allow(dead_code)]
    pub verified_id: i64,
    pub application_number: String,
    #[allow(dead_code)]
    pub verified_at: String,
    pub record_json: String,
}

/// Row of the `audit_events` table.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = audit_events)]
pub struct AuditEventRow {
    pub event_id: i64,
    pub application_number: String,
    pub actor_json: String,
    pub cause_json: String,
    pub action_json: String,
    pub before_snapshot_json: String,
    pub after_snapshot_json: String,
    pub created_at: String,
}
