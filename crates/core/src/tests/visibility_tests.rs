// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use salary_board_domain::CompanyCount;

use crate::tests::helpers::create_test_new_rating;
use crate::{
    CompanyVisibility, DEFAULT_MAX_ENTRY_BEFORE_DISPLAY, InMemoryStore, RatingStore,
    VisibleCompany, list_visible_companies, visible_companies,
};

fn submit(store: &mut InMemoryStore, company: &str) {
    store
        .create(create_test_new_rating(company, "A Job_title", 0, 0))
        .unwrap();
}

fn is_listed(store: &mut InMemoryStore, company: &str) -> bool {
    list_visible_companies(store, DEFAULT_MAX_ENTRY_BEFORE_DISPLAY)
        .unwrap()
        .iter()
        .any(|c| c.name == company)
}

#[test]
fn test_classify_boundaries() {
    assert_eq!(CompanyVisibility::classify(0, 4), CompanyVisibility::Unknown);
    assert_eq!(CompanyVisibility::classify(1, 4), CompanyVisibility::Hidden);
    assert_eq!(CompanyVisibility::classify(3, 4), CompanyVisibility::Hidden);
    assert_eq!(CompanyVisibility::classify(4, 4), CompanyVisibility::Visible);
    assert_eq!(CompanyVisibility::classify(9, 4), CompanyVisibility::Visible);
}

#[test]
fn test_company_appears_once_threshold_is_reached() {
    let mut store: InMemoryStore = InMemoryStore::new();

    submit(&mut store, "Elhmnco");
    assert!(!is_listed(&mut store, "Elhmnco"));

    for _ in 0..2 {
        submit(&mut store, "Elhmnco");
        assert!(!is_listed(&mut store, "Elhmnco"));
    }

    submit(&mut store, "Elhmnco");
    assert!(is_listed(&mut store, "Elhmnco"));

    // Stays visible as more submissions arrive.
    submit(&mut store, "Elhmnco");
    assert!(is_listed(&mut store, "Elhmnco"));
}

#[test]
fn test_visible_iff_count_reaches_threshold() {
    for threshold in 1..=6_u64 {
        for count in 1..=8_u64 {
            let listed: Vec<VisibleCompany> =
                visible_companies(vec![CompanyCount::new("Acme", count)], threshold);
            assert_eq!(!listed.is_empty(), count >= threshold);
        }
    }
}

#[test]
fn test_each_name_listed_once_and_sorted() {
    let counts: Vec<CompanyCount> = vec![
        CompanyCount::new("Yodel", 5),
        CompanyCount::new("Acme", 2),
        CompanyCount::new("Acme", 3),
        CompanyCount::new("Small", 1),
    ];

    let listed: Vec<VisibleCompany> = visible_companies(counts, 4);
    assert_eq!(
        listed,
        vec![
            VisibleCompany {
                name: String::from("Acme"),
                ratings_count: 5
            },
            VisibleCompany {
                name: String::from("Yodel"),
                ratings_count: 5
            },
        ]
    );
}
