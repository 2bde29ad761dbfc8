// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules.
//!
//! This module contains all state-changing operations for the persistence layer.
//! Every insert into `ratings` bumps `company_counts` inside the same
//! transaction, so readers never see one without the other.
//!
//! ## Backend-Specific Code
//!
//! Backend-specific helpers (e.g., `get_last_insert_rowid()`) are imported from
//! the `backend` module. All other code uses Diesel DSL exclusively.

pub mod ratings;

pub use ratings::{import_rating, insert_rating};
