// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::create_test_rating;
use crate::{Rating, RatingFilter};

#[test]
fn test_empty_filter_matches_everything() {
    let filter: RatingFilter = RatingFilter::new();
    assert!(filter.is_empty());
    assert!(filter.matches(&create_test_rating()));
}

#[test]
fn test_matching_is_case_insensitive() {
    let rating: Rating = create_test_rating();
    let filter: RatingFilter = RatingFilter::new()
        .with_job_title(Some("statistician ii"))
        .with_city(Some("DOUALA"));

    assert!(filter.matches(&rating));
}

#[test]
fn test_matching_is_exact_not_substring() {
    let rating: Rating = create_test_rating();

    assert!(!RatingFilter::new().with_job_title(Some("Statistician")).matches(&rating));
    assert!(!RatingFilter::new().with_company_name(Some("Flip")).matches(&rating));
}

#[test]
fn test_constraints_are_conjunctive() {
    let rating: Rating = create_test_rating();

    let both: RatingFilter = RatingFilter::new()
        .with_company_name(Some("Fliptune"))
        .with_job_title(Some("Statistician II"));
    assert!(both.matches(&rating));

    let mismatch: RatingFilter = both.with_seniority(Some("Junior"));
    assert!(!mismatch.matches(&rating));
}

#[test]
fn test_blank_constraint_is_ignored() {
    let filter: RatingFilter = RatingFilter::new()
        .with_company_name(Some(""))
        .with_city(Some("   "))
        .with_seniority(None);

    assert!(filter.is_empty());
}

#[test]
fn test_non_ascii_case_folding() {
    let mut rating: Rating = create_test_rating();
    rating.city = String::from("Ébolowa");

    assert!(RatingFilter::new().with_city(Some("ébolowa")).matches(&rating));
}
