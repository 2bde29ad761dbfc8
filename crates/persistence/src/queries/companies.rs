// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Company count index queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use salary_board_domain::CompanyCount;

use crate::data_models::CompanyCountRow;
use crate::diesel_schema::company_counts;
use crate::error::PersistenceError;

/// Lists the per-company submission counts, ordered by company name.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails or a stored count is negative.
pub fn list_company_counts(
    conn: &mut SqliteConnection,
) -> Result<Vec<CompanyCount>, PersistenceError> {
    let rows: Vec<CompanyCountRow> = company_counts::table
        .order(company_counts::company_name.asc())
        .select(CompanyCountRow::as_select())
        .load(conn)?;

    rows.into_iter()
        .map(CompanyCountRow::into_company_count)
        .collect()
}
