// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rating queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use salary_board_domain::Rating;
use tracing::debug;

use crate::data_models::RatingRow;
use crate::diesel_schema::ratings;
use crate::error::PersistenceError;

/// Retrieves a rating by its identifier.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `salary_id` - The rating identifier
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the rating is not found.
pub fn get_rating(
    conn: &mut SqliteConnection,
    salary_id: i64,
) -> Result<Option<Rating>, PersistenceError> {
    debug!(salary_id, "Looking up rating");

    let row: Option<RatingRow> = ratings::table
        .find(salary_id)
        .select(RatingRow::as_select())
        .first(conn)
        .optional()?;

    row.map(RatingRow::into_rating).transpose()
}

/// Lists every rating in creation order.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails or a stored row is invalid.
pub fn list_ratings(conn: &mut SqliteConnection) -> Result<Vec<Rating>, PersistenceError> {
    let rows: Vec<RatingRow> = ratings::table
        .order(ratings::salary_id.asc())
        .select(RatingRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Loaded ratings");

    rows.into_iter().map(RatingRow::into_rating).collect()
}

/// Returns whether a rating with the given identifier exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn rating_exists(
    conn: &mut SqliteConnection,
    salary_id: i64,
) -> Result<bool, PersistenceError> {
    Ok(diesel::select(diesel::dsl::exists(ratings::table.find(salary_id))).get_result(conn)?)
}

/// Counts all stored ratings.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_ratings(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(ratings::table.count().get_result(conn)?)
}
