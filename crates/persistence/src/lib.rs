// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Salary Board.
//!
//! This crate stores ratings and the per-company count index in `SQLite`
//! through Diesel, and implements [`salary_board::RatingStore`] on top.
//!
//! ## Schema
//!
//! - `ratings` — one row per submission; `salary_id` is an
//!   `INTEGER PRIMARY KEY AUTOINCREMENT`, so identifiers increase strictly
//!   and are never reused
//! - `company_counts` — submissions per company name, bumped in the same
//!   transaction as every insert
//!
//! Migrations are embedded at compile time and applied on every open.
//!
//! ## Testing
//!
//! `Persistence::new_in_memory()` hands out a fresh shared-cache memory
//! database per call, so tests never observe each other's rows.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use salary_board_domain::{CompanyCount, NewRating, Rating};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The store used by the server.
pub type SqlitePersistence = Persistence;

/// Persistence adapter for ratings.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    /// Stores a new submission stamped with the current UTC time.
    ///
    /// # Arguments
    ///
    /// * `new_rating` - The submission to store
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn create_rating(&mut self, new_rating: NewRating) -> Result<Rating, PersistenceError> {
        mutations::insert_rating(&mut self.conn, new_rating, OffsetDateTime::now_utc())
    }

    /// Stores a fully-formed rating as-is.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DuplicateRating` if the identifier is taken,
    /// or an error if the database operation fails.
    pub fn import_rating(&mut self, rating: Rating) -> Result<Rating, PersistenceError> {
        mutations::import_rating(&mut self.conn, rating)
    }

    /// Retrieves a rating by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_rating(&mut self, salary_id: i64) -> Result<Option<Rating>, PersistenceError> {
        queries::get_rating(&mut self.conn, salary_id)
    }

    /// Lists every rating in creation order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_ratings(&mut self) -> Result<Vec<Rating>, PersistenceError> {
        queries::list_ratings(&mut self.conn)
    }

    /// Lists the per-company submission counts, ordered by company name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_company_counts(&mut self) -> Result<Vec<CompanyCount>, PersistenceError> {
        queries::list_company_counts(&mut self.conn)
    }

    /// Counts the stored ratings.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_ratings(&mut self) -> Result<i64, PersistenceError> {
        queries::count_ratings(&mut self.conn)
    }
}
