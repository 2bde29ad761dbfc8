// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use salary_board_domain::CompanyCount;

use crate::error::CoreError;
use crate::store::RatingStore;

/// Submissions a company needs before it is listed publicly.
pub const DEFAULT_MAX_ENTRY_BEFORE_DISPLAY: u64 = 4;

/// Where a company stands relative to the display threshold.
///
/// Counts only grow, so a company moves `Unknown → Hidden → Visible`
/// and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyVisibility {
    /// No submission references the company.
    Unknown,
    /// Submitted, but below the threshold.
    Hidden,
    /// At or above the threshold.
    Visible,
}

impl CompanyVisibility {
    /// Classifies a submission count against a threshold.
    #[must_use]
    pub const fn classify(ratings_count: u64, threshold: u64) -> Self {
        if ratings_count == 0 {
            Self::Unknown
        } else if ratings_count >= threshold {
            Self::Visible
        } else {
            Self::Hidden
        }
    }
}

/// A company shown in the public listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleCompany {
    /// The company name.
    pub name: String,
    /// How many ratings reference it.
    pub ratings_count: u64,
}

/// Keeps the companies whose count reaches the threshold.
///
/// Entries sharing a name are merged first so each name appears once.
/// The result is sorted by name.
#[must_use]
pub fn visible_companies(counts: Vec<CompanyCount>, threshold: u64) -> Vec<VisibleCompany> {
    let mut merged: BTreeMap<String, u64> = BTreeMap::new();
    for count in counts {
        *merged.entry(count.company_name).or_insert(0) += count.ratings_count;
    }

    merged
        .into_iter()
        .filter(|(_, ratings_count)| {
            CompanyVisibility::classify(*ratings_count, threshold) == CompanyVisibility::Visible
        })
        .map(|(name, ratings_count)| VisibleCompany {
            name,
            ratings_count,
        })
        .collect()
}

/// Lists the companies visible under the given threshold.
///
/// # Arguments
///
/// * `store` - The rating store whose count index is read
/// * `threshold` - The `maxEntryBeforeDisplay` setting
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_visible_companies<S: RatingStore + ?Sized>(
    store: &mut S,
    threshold: u64,
) -> Result<Vec<VisibleCompany>, CoreError> {
    let counts: Vec<CompanyCount> = store.company_counts()?;
    Ok(visible_companies(counts, threshold))
}
