// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record store for the certificate application tracker.
//!
//! The `RecordStore` trait is the only storage interface the rest of the
//! workspace sees. Two implementations are provided:
//!
//! - **`Persistence`**: `SQLite` via Diesel, with embedded migrations
//! - **`InMemoryStore`**: plain vectors, for tests and ephemeral use
//!
//! ## Uniqueness
//!
//! Both stores reject a second application for the same
//! `(identity_number, certificate_kind)` pair and a reused application
//! number. In `SQLite` this is a unique index, so two racing submissions
//! cannot both succeed even if both passed the duplicate guard.
//!
//! ## Atomicity
//!
//! Every write runs in one transaction: the application row, the verified
//! copy (if any) and the audit event are committed together or not at all.
//!
//! ## Testing
//!
//! Tests run against `Persistence::new_in_memory()`, which gives each call
//! an isolated shared-cache database.

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
#![allow(clippy::multiple_crate_versions)]

use cert_track::{SubmissionResult, TransitionResult};
use cert_track_audit::AuditEvent;
use cert_track_domain::{Application, ApplicationNumber};
use diesel::SqliteConnection;
use std::sync::atomic::AtomicU64;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod memory;
mod mutations;
mod queries;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use memory::InMemoryStore;
pub use store::RecordStore;

/// `SQLite` persistence adapter.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl RecordStore for Persistence {
    fn list_applications(&mut self) -> Result<Vec<Application>, PersistenceError> {
        queries::list_applications(&mut self.conn)
    }

    fn get_application(
        &mut self,
        application_number: &ApplicationNumber,
    ) -> Result<Option<Application>, PersistenceError> {
        queries::get_application(&mut self.conn, application_number)
    }

    fn list_verified(&mut self) -> Result<Vec<Application>, PersistenceError> {
        queries::list_verified(&mut self.conn)
    }

    fn get_verified(
        &mut self,
        application_number: &ApplicationNumber,
    ) -> Result<Option<Application>, PersistenceError> {
        queries::get_verified(&mut self.conn, application_number)
    }

    fn persist_submission(&mut self, result: &SubmissionResult) -> Result<i64, PersistenceError> {
        mutations::persist_submission(&mut self.conn, result)
    }

    fn persist_transition(&mut self, result: &TransitionResult) -> Result<i64, PersistenceError> {
        mutations::persist_transition(&mut self.conn, result)
    }

    fn list_audit_events(
        &mut self,
        application_number: &ApplicationNumber,
    ) -> Result<Vec<AuditEvent>, PersistenceError> {
        queries::list_audit_events(&mut self.conn, application_number)
    }
}
