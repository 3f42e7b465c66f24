// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the `SQLite` store.
//!
//! ## Module Organization
//!
//! - `audit`: Audit event persistence
//! - `applications`: Submission and transition persistence

pub mod applications;
pub mod audit;

pub use applications::{persist_submission, persist_transition};
