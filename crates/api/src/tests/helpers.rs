// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use salary_board::InMemoryStore;
use salary_board_domain::{Rating, ReportedValue};
use time::macros::datetime;

use crate::{SubmitRatingRequest, submit_rating};

pub fn create_test_submission(company_name: &str, rating: Option<i64>) -> SubmitRatingRequest {
    SubmitRatingRequest {
        company_name: company_name.to_string(),
        job_title: String::from("technicien de surface"),
        salary: Some(0),
        rating,
        comment: String::from("my comment"),
        seniority: String::from("Seniority"),
        city: String::from("maroua"),
        ..SubmitRatingRequest::default()
    }
}

/// Submits `count` identical ratings for a company.
pub fn submit_many(store: &mut InMemoryStore, company_name: &str, count: usize) {
    for _ in 0..count {
        submit_rating(store, create_test_submission(company_name, Some(0))).unwrap();
    }
}

pub fn create_test_export_rating(salary_id: i64) -> Rating {
    Rating {
        salary_id,
        company_id: 0,
        company_rating_id: 0,
        rating: ReportedValue::new(0),
        salary: ReportedValue::new(1_624_669),
        company_name: String::new(),
        seniority: String::from("Seniority"),
        comment: String::new(),
        job_title: String::from("Assistant Manager"),
        country: String::from("Country"),
        city: String::from("Ndop"),
        createdat: datetime!(2020-01-01 00:00:00 UTC),
    }
}

/// Creates a store holding 100 ratings.
///
/// Every sixth rating is a "Statistician II"; id 6 alone belongs to
/// "Fliptune".
pub fn create_seeded_store() -> InMemoryStore {
    let companies: [&str; 4] = ["Jabbertype", "Skinix", "Yodel", "Oyoyo"];
    let mut store: InMemoryStore = InMemoryStore::new();

    for i in 1..=100_usize {
        let company: &str = if i == 6 {
            "Fliptune"
        } else {
            companies[i % companies.len()]
        };
        let request = SubmitRatingRequest {
            company_name: company.to_string(),
            job_title: String::from(if i % 6 == 0 { "Statistician II" } else { "Nurse" }),
            salary: Some(i64::try_from(i * 1000).unwrap()),
            rating: Some(i64::try_from(i % 6).unwrap()),
            seniority: String::from("Seniority"),
            city: String::from(if i % 2 == 0 { "Maroua" } else { "Ndop" }),
            ..SubmitRatingRequest::default()
        };
        submit_rating(&mut store, request).unwrap();
    }

    store
}
