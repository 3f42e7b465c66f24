// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stored timestamp format.
//!
//! Timestamps are stored as local wall-clock strings of the form
//! `YYYY-MM-DD HH:MM:SS`.

use crate::error::DomainError;
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Placeholder shown for stages that have not been acted on.
pub const WAITING_PLACEHOLDER: &str = "Waiting for previous steps";

/// The stored timestamp layout, shared by parsing and rendering.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Renders a timestamp in the stored format.
///
/// # Errors
///
/// Returns `DomainError::MalformedTimestamp` if the value cannot be
/// rendered.
pub fn format_timestamp(value: PrimitiveDateTime) -> Result<String, DomainError> {
    value
        .format(TIMESTAMP_FORMAT)
        .map_err(|e| DomainError::MalformedTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Parses a stored timestamp.
///
/// # Errors
///
/// Returns `DomainError::MalformedTimestamp` if `raw` does not follow the
/// stored format.
pub fn parse_timestamp(raw: &str) -> Result<PrimitiveDateTime, DomainError> {
    PrimitiveDateTime::parse(raw, TIMESTAMP_FORMAT).map_err(|e| DomainError::MalformedTimestamp {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Renders a stored timestamp for display.
///
/// Missing or empty values render as the waiting placeholder. Values that
/// fail to parse are shown verbatim.
#[must_use]
pub fn display_timestamp(raw: Option<&str>) -> String {
    match raw {
        None => WAITING_PLACEHOLDER.to_string(),
        Some(value) if value.is_empty() || value == WAITING_PLACEHOLDER => {
            WAITING_PLACEHOLDER.to_string()
        }
        Some(value) => parse_timestamp(value)
            .and_then(format_timestamp)
            .unwrap_or_else(|_| value.to_string()),
    }
}

/// Returns the `YYYY-MM-DD` prefix of a stored timestamp, if present.
#[must_use]
pub fn date_prefix(raw: &str) -> &str {
    raw.get(..10).unwrap_or(raw)
}
