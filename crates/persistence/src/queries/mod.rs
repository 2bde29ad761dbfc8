// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `ratings` — Rating lookups and listings
//! - `companies` — The per-company count index

pub mod companies;
pub mod ratings;

pub use companies::list_company_counts;
pub use ratings::{count_ratings, get_rating, list_ratings};
