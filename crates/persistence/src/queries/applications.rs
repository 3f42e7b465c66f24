// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application and verified certificate lookups.
//!
//! Rows carry the full record as JSON; indexed columns exist only for
//! uniqueness and filtering.

use cert_track_domain::{Application, ApplicationNumber};
use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::{ApplicationRow, VerifiedRow};
use crate::diesel_schema::{applications, verified_certificates};
use crate::error::PersistenceError;

fn decode(application_number: &str, record_json: &str) -> Result<Application, PersistenceError> {
    serde_json::from_str(record_json).map_err(|e| {
        PersistenceError::SerializationError(format!(
            "Stored record for {application_number} is unreadable: {e}"
        ))
    })
}

/// Retrieves every application in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails or a record cannot be decoded.
pub fn list_applications(conn: &mut SqliteConnection) -> Result<Vec<Application>, PersistenceError> {
    let rows: Vec<ApplicationRow> = applications::table
        .order(applications::application_id.asc())
        .select(ApplicationRow::as_select())
        .load(conn)?;

    rows.iter()
        .map(|row| decode(&row.application_number, &row.record_json))
        .collect()
}

/// Retrieves one application by number.
///
/// # Errors
///
/// Returns an error if the query fails or the record cannot be decoded.
pub fn get_application(
    conn: &mut SqliteConnection,
    application_number: &ApplicationNumber,
) -> Result<Option<Application>, PersistenceError> {
    let row: Option<ApplicationRow> = applications::table
        .filter(applications::application_number.eq(application_number.value()))
        .select(ApplicationRow::as_select())
        .first(conn)
        .optional()?;

    row.map(|row| decode(&row.application_number, &row.record_json))
        .transpose()
}

/// Retrieves every verified certificate in verification order.
///
/// # Errors
///
/// Returns an error if the query fails or a record cannot be decoded.
pub fn list_verified(conn: &mut SqliteConnection) -> Result<Vec<Application>, PersistenceError> {
    let rows: Vec<VerifiedRow> = verified_certificates::table
        .order(verified_certificates::verified_id.asc())
        .select(VerifiedRow::as_select())
        .load(conn)?;

    rows.iter()
        .map(|row| decode(&row.application_number, &row.record_json))
        .collect()
}

/// Retrieves one verified certificate by number.
///
/// # Errors
///
/// Returns an error if the query fails or the record cannot be decoded.
pub fn get_verified(
    conn: &mut SqliteConnection,
    application_number: &ApplicationNumber,
) -> Result<Option<Application>, PersistenceError> {
    let row: Option<VerifiedRow> = verified_certificates::table
        .filter(verified_certificates::application_number.eq(application_number.value()))
        .select(VerifiedRow::as_select())
        .first(conn)
        .optional()?;

    row.map(|row| decode(&row.application_number, &row.record_json))
        .transpose()
}
