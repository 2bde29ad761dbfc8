// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors surfaced by rating stores and the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// No rating carries the requested identifier.
    #[error("could not find rating with id {0}")]
    RatingNotFound(i64),
    /// An imported rating reuses an identifier already in the store.
    #[error("rating with id {0} already exists")]
    DuplicateRating(i64),
    /// The backing store failed.
    #[error("storage failure: {0}")]
    Storage(String),
}
