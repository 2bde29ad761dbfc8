// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rating store contract and the read-side engine built on top of it.
//!
//! Everything here works against the [`RatingStore`] trait so the same
//! semantics hold for the `SQLite` store and for [`InMemoryStore`]:
//!
//! - [`query`] — filter and paginate ratings in creation order
//! - [`average`] — per-field averages that skip unreported values
//! - [`list_visible_companies`] — companies past the display threshold

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

mod aggregate;
mod error;
mod page;
mod store;
mod visibility;

#[cfg(test)]
mod tests;

use salary_board_domain::{Rating, RatingFilter};

// Re-export public types and functions
pub use aggregate::{Averages, average, compute_averages};
pub use error::CoreError;
pub use page::{DEFAULT_LIMIT, DEFAULT_PAGE, PageRequest, RatingPage, paginate};
pub use store::{InMemoryStore, RatingStore};
pub use visibility::{
    CompanyVisibility, DEFAULT_MAX_ENTRY_BEFORE_DISPLAY, VisibleCompany, list_visible_companies,
    visible_companies,
};

/// Filters the store and returns one page of the matches.
///
/// Matches keep the store's creation order. `nb_hits` counts every match,
/// not just the returned page.
///
/// # Arguments
///
/// * `store` - The rating store to read from
/// * `filter` - The constraints a rating must satisfy
/// * `page_request` - The normalized page and limit
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn query<S: RatingStore + ?Sized>(
    store: &mut S,
    filter: &RatingFilter,
    page_request: PageRequest,
) -> Result<RatingPage, CoreError> {
    let matches: Vec<Rating> = select(store, filter)?;
    Ok(paginate(matches, page_request))
}

/// Returns every rating matching the filter, in creation order.
pub(crate) fn select<S: RatingStore + ?Sized>(
    store: &mut S,
    filter: &RatingFilter,
) -> Result<Vec<Rating>, CoreError> {
    let ratings: Vec<Rating> = store.all()?;
    if filter.is_empty() {
        return Ok(ratings);
    }
    Ok(ratings.into_iter().filter(|r| filter.matches(r)).collect())
}
