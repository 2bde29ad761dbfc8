// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The core engine running against the `SQLite` store.

use salary_board::{
    Averages, CoreError, PageRequest, RatingStore, VisibleCompany, average,
    list_visible_companies, query,
};
use salary_board_domain::RatingFilter;

use crate::tests::{create_test_new_rating, create_test_rating};
use crate::SqlitePersistence;

fn create_populated_store() -> SqlitePersistence {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    for i in 1..=30_i64 {
        let company = if i % 3 == 0 { "Skinix" } else { "Yodel" };
        persistence
            .create(create_test_new_rating(company, i % 6, i * 100))
            .unwrap();
    }
    persistence
}

#[test]
fn test_store_get_missing_is_not_found() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    assert_eq!(persistence.get(9), Err(CoreError::RatingNotFound(9)));
}

#[test]
fn test_store_import_duplicate_maps_to_core_error() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    persistence.import(create_test_rating(3, "Skinix")).unwrap();

    assert_eq!(
        persistence.import(create_test_rating(3, "Skinix")),
        Err(CoreError::DuplicateRating(3))
    );
}

#[test]
fn test_query_paginates_store_contents() {
    let mut persistence = create_populated_store();

    let page = query(
        &mut persistence,
        &RatingFilter::new(),
        PageRequest::new(Some(2), Some(7)),
    )
    .unwrap();

    assert_eq!(page.nb_hits, 30);
    assert_eq!(page.offset, 7);
    assert_eq!(page.limit, 7);
    let ids: Vec<i64> = page.hits.iter().map(|r| r.salary_id).collect();
    assert_eq!(ids, vec![8, 9, 10, 11, 12, 13, 14]);
}

#[test]
fn test_query_filters_case_insensitively() {
    let mut persistence = create_populated_store();

    let filter = RatingFilter::new().with_company_name(Some("SKINIX"));
    let page = query(&mut persistence, &filter, PageRequest::new(None, None)).unwrap();

    assert_eq!(page.nb_hits, 10);
    assert!(page.hits.iter().all(|r| r.company_name == "Skinix"));
}

#[test]
fn test_average_skips_unreported_values() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    persistence
        .create(create_test_new_rating("Oyoyo", 0, -1))
        .unwrap();
    persistence
        .create(create_test_new_rating("Oyoyo", 5, 3000))
        .unwrap();

    let averages = average(&mut persistence, &RatingFilter::new()).unwrap();

    assert_eq!(
        averages,
        Averages {
            rating: 5,
            salary: 3000
        }
    );
}

#[test]
fn test_visible_companies_respect_threshold() {
    let mut persistence = create_populated_store();
    persistence
        .create(create_test_new_rating("Fliptune", 2, 100))
        .unwrap();

    let visible = list_visible_companies(&mut persistence, 4).unwrap();

    assert_eq!(
        visible,
        vec![
            VisibleCompany {
                name: String::from("Skinix"),
                ratings_count: 10
            },
            VisibleCompany {
                name: String::from("Yodel"),
                ratings_count: 20
            },
        ]
    );
}
