// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rating mutations.
//!
//! Inserts and the matching count-index update always run inside one
//! transaction.

use diesel::prelude::*;
use diesel::SqliteConnection;
use salary_board_domain::{NewRating, Rating};
use time::OffsetDateTime;
use tracing::debug;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{NewRatingRow, RatingRow, format_timestamp};
use crate::diesel_schema::{company_counts, ratings};
use crate::error::PersistenceError;
use crate::queries::ratings::rating_exists;

/// Increments the submission count of a company, creating the entry if needed.
fn bump_company_count(
    conn: &mut SqliteConnection,
    company_name: &str,
) -> Result<(), PersistenceError> {
    diesel::insert_into(company_counts::table)
        .values((
            company_counts::company_name.eq(company_name),
            company_counts::ratings_count.eq(1_i64),
        ))
        .on_conflict(company_counts::company_name)
        .do_update()
        .set(company_counts::ratings_count.eq(company_counts::ratings_count + 1_i64))
        .execute(conn)?;
    Ok(())
}

/// Inserts a new rating and lets the database assign its identifier.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `new_rating` - The submission to store
/// * `createdat` - The creation timestamp to record
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted or any statement
/// fails. Nothing is written in that case.
pub fn insert_rating(
    conn: &mut SqliteConnection,
    new_rating: NewRating,
    createdat: OffsetDateTime,
) -> Result<Rating, PersistenceError> {
    let country: String = new_rating.resolved_country();
    let createdat_text: String = format_timestamp(createdat)?;

    let salary_id: i64 = conn.transaction::<_, PersistenceError, _>(|conn| {
        let row: NewRatingRow<'_> = NewRatingRow {
            company_id: new_rating.company_id,
            company_rating_id: new_rating.company_rating_id,
            rating: new_rating.rating.raw(),
            salary: new_rating.salary.raw(),
            company_name: &new_rating.company_name,
            seniority: &new_rating.seniority,
            comment: &new_rating.comment,
            job_title: &new_rating.job_title,
            country: &country,
            city: &new_rating.city,
            createdat: &createdat_text,
        };

        diesel::insert_into(ratings::table)
            .values(&row)
            .execute(conn)?;

        let salary_id: i64 = get_last_insert_rowid(conn)?;
        bump_company_count(conn, &new_rating.company_name)?;
        Ok(salary_id)
    })?;

    debug!(
        salary_id,
        company_name = %new_rating.company_name,
        "Inserted rating"
    );

    Ok(new_rating.into_rating(salary_id, createdat))
}

/// Inserts a fully-formed rating, keeping its identifier and timestamp.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `rating` - The rating to store
///
/// # Errors
///
/// Returns `PersistenceError::DuplicateRating` if the identifier is already
/// taken, or an error if any statement fails.
pub fn import_rating(
    conn: &mut SqliteConnection,
    rating: Rating,
) -> Result<Rating, PersistenceError> {
    let row: RatingRow = RatingRow::from_rating(&rating)?;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        if rating_exists(conn, row.salary_id)? {
            return Err(PersistenceError::DuplicateRating(row.salary_id));
        }

        diesel::insert_into(ratings::table)
            .values(&row)
            .execute(conn)?;

        bump_company_count(conn, &row.company_name)
    })?;

    debug!(
        salary_id = rating.salary_id,
        company_name = %rating.company_name,
        "Imported rating"
    );

    Ok(rating)
}
