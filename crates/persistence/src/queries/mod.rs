// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries against the `SQLite` store.
//!
//! ## Module Organization
//!
//! - `applications`: Application and verified certificate lookups
//! - `audit`: Audit trail retrieval

pub mod applications;
pub mod audit;

pub use applications::{get_application, get_verified, list_applications, list_verified};
pub use audit::list_audit_events;
