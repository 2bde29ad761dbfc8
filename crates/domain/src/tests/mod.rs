// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod filter;

use time::macros::datetime;

use crate::{NewRating, Rating, ReportedValue};

pub fn create_test_new_rating() -> NewRating {
    NewRating {
        company_id: 0,
        company_rating_id: 0,
        rating: ReportedValue::new(4),
        salary: ReportedValue::new(350_000),
        company_name: String::from("Fliptune"),
        seniority: String::from("Senior"),
        comment: String::from("Good team"),
        job_title: String::from("Statistician II"),
        country: None,
        city: String::from("Douala"),
    }
}

pub fn create_test_rating() -> Rating {
    create_test_new_rating().into_rating(1, datetime!(2026-01-04 12:00:00 UTC))
}
