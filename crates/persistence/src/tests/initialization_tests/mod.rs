// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Every other persistence test opens its database through
//! `SqlitePersistence::new_in_memory()`, so migrations are exercised
//! implicitly. These tests cover isolation and file-backed databases.

use crate::SqlitePersistence;
use crate::tests::create_test_new_rating;

#[test]
fn test_persistence_initialization() {
    let result: Result<SqlitePersistence, crate::error::PersistenceError> =
        SqlitePersistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_fresh_database_is_empty() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    assert_eq!(persistence.count_ratings().unwrap(), 0);
    assert!(persistence.list_ratings().unwrap().is_empty());
    assert!(persistence.list_company_counts().unwrap().is_empty());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = SqlitePersistence::new_in_memory().unwrap();
    let mut db2 = SqlitePersistence::new_in_memory().unwrap();

    db1.create_rating(create_test_new_rating("Skinix", 3, 1000))
        .unwrap();

    let count1 = db1.count_ratings().unwrap();
    let count2 = db2.count_ratings().unwrap();

    assert_eq!(count1, 1, "db1 should have 1 rating");
    assert_eq!(count2, 0, "db2 should have 0 ratings (isolated)");
}

#[test]
fn test_file_database_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ratings.db");

    let created = {
        let mut persistence = SqlitePersistence::new_with_file(&path).unwrap();
        persistence
            .create_rating(create_test_new_rating("Yodel", 5, 2500))
            .unwrap()
    };

    let mut reopened = SqlitePersistence::new_with_file(&path).unwrap();
    let fetched = reopened.get_rating(created.salary_id).unwrap();

    assert_eq!(fetched, Some(created));
    assert_eq!(reopened.count_ratings().unwrap(), 1);
}

#[test]
fn test_file_database_ids_continue_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ratings.db");

    let first = {
        let mut persistence = SqlitePersistence::new_with_file(&path).unwrap();
        persistence
            .create_rating(create_test_new_rating("Yodel", 5, 2500))
            .unwrap()
    };

    let mut reopened = SqlitePersistence::new_with_file(&path).unwrap();
    let second = reopened
        .create_rating(create_test_new_rating("Yodel", 4, 2000))
        .unwrap();

    assert!(second.salary_id > first.salary_id);
}
