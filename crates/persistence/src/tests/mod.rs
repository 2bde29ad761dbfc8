// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;
mod store_tests;

use salary_board_domain::{NewRating, Rating, ReportedValue};
use time::macros::datetime;

pub fn create_test_new_rating(company_name: &str, rating: i64, salary: i64) -> NewRating {
    NewRating {
        company_id: 0,
        company_rating_id: 0,
        rating: ReportedValue::new(rating),
        salary: ReportedValue::new(salary),
        company_name: company_name.to_string(),
        seniority: String::from("Senior"),
        comment: String::from("Good pay, long hours"),
        job_title: String::from("Accountant"),
        country: None,
        city: String::from("Douala"),
    }
}

/// Creates a complete rating as found in a seed export.
pub fn create_test_rating(salary_id: i64, company_name: &str) -> Rating {
    Rating {
        salary_id,
        company_id: 7,
        company_rating_id: 3,
        rating: ReportedValue::new(4),
        salary: ReportedValue::new(350_000),
        company_name: company_name.to_string(),
        seniority: String::from("Junior"),
        comment: String::from("imported"),
        job_title: String::from("Developer"),
        country: String::from("Country"),
        city: String::from("Ndop"),
        createdat: datetime!(2024-03-15 08:30:00 UTC),
    }
}
