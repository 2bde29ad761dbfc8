// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use salary_board_domain::Rating;

/// Page used when none (or a non-positive one) is requested.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when none (or a non-positive one) is requested.
pub const DEFAULT_LIMIT: i64 = 20;

/// A normalized pagination request.
///
/// Both fields are always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl PageRequest {
    /// Creates a page request, replacing absent or non-positive values
    /// with [`DEFAULT_PAGE`] and [`DEFAULT_LIMIT`].
    #[must_use]
    pub const fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page: i64 = match page {
            Some(p) if p > 0 => p,
            _ => DEFAULT_PAGE,
        };
        let limit: i64 = match limit {
            Some(l) if l > 0 => l,
            _ => DEFAULT_LIMIT,
        };
        Self { page, limit }
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(&self) -> i64 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.limit
    }

    /// Returns `(page - 1) * limit`, saturating on overflow.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of filtered ratings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingPage {
    /// The ratings on this page, in creation order.
    pub hits: Vec<Rating>,
    /// Total number of matches before slicing.
    pub nb_hits: usize,
    /// Index of the first hit within all matches.
    pub offset: i64,
    /// The page size that was applied.
    pub limit: i64,
}

/// Slices `[offset, offset + limit)` out of the ordered matches.
///
/// An offset at or past the end yields an empty page; `nb_hits` still
/// reports every match.
#[must_use]
pub fn paginate(matches: Vec<Rating>, page_request: PageRequest) -> RatingPage {
    let nb_hits: usize = matches.len();
    let offset: usize = usize::try_from(page_request.offset()).unwrap_or(usize::MAX);
    let limit: usize = usize::try_from(page_request.limit()).unwrap_or(usize::MAX);

    let hits: Vec<Rating> = matches.into_iter().skip(offset).take(limit).collect();

    RatingPage {
        hits,
        nb_hits,
        offset: page_request.offset(),
        limit: page_request.limit(),
    }
}
