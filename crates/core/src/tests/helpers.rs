// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use salary_board_domain::{NewRating, ReportedValue};

use crate::{InMemoryStore, RatingStore};

/// Builds a submission with the given company, job title and values.
pub fn create_test_new_rating(
    company_name: &str,
    job_title: &str,
    rating: i64,
    salary: i64,
) -> NewRating {
    NewRating {
        company_id: 0,
        company_rating_id: 0,
        rating: ReportedValue::new(rating),
        salary: ReportedValue::new(salary),
        company_name: company_name.to_string(),
        seniority: String::from("Seniority"),
        comment: String::from("my comment"),
        job_title: job_title.to_string(),
        country: None,
        city: String::from("Maroua"),
    }
}

/// Creates a store holding 100 ratings.
///
/// - ids 6, 12, …, 96 (16 ratings) are "Statistician II"
/// - only id 6 belongs to "Fliptune"
/// - odd ids live in Ndop, even ids in Maroua
pub fn create_seeded_store() -> InMemoryStore {
    let companies: [&str; 4] = ["Jabbertype", "Skinix", "Yodel", "Oyoyo"];
    let mut store: InMemoryStore = InMemoryStore::new();

    for i in 1..=100_i64 {
        let job_title: &str = if i % 6 == 0 { "Statistician II" } else { "Nurse" };
        let company: &str = if i == 6 {
            "Fliptune"
        } else {
            companies[usize::try_from(i).unwrap() % companies.len()]
        };
        let mut new_rating: NewRating = create_test_new_rating(company, job_title, i % 6, i * 1000);
        new_rating.city = String::from(if i % 2 == 0 { "Maroua" } else { "Ndop" });
        store.create(new_rating).unwrap();
    }

    store
}
