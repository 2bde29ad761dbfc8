// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types for the `ratings` and `company_counts` tables.
//!
//! Timestamps are stored as RFC 3339 text and converted at this boundary.

use diesel::prelude::*;
use num_traits::ToPrimitive;
use salary_board_domain::{CompanyCount, Rating, ReportedValue};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::diesel_schema::{company_counts, ratings};
use crate::error::PersistenceError;

/// A full row of the `ratings` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = ratings)]
pub struct RatingRow {
    pub salary_id: i64,
    pub company_id: i64,
    pub company_rating_id: i64,
    pub rating: i64,
    pub salary: i64,
    pub company_name: String,
    pub seniority: String,
    pub comment: String,
    pub job_title: String,
    pub country: String,
    pub city: String,
    pub createdat: String,
}

/// A `ratings` row without its identifier, which the database assigns.
#[derive(Debug, Insertable)]
#[diesel(table_name = ratings)]
pub struct NewRatingRow<'a> {
    pub company_id: i64,
    pub company_rating_id: i64,
    pub rating: i64,
    pub salary: i64,
    pub company_name: &'a str,
    pub seniority: &'a str,
    pub comment: &'a str,
    pub job_title: &'a str,
    pub country: &'a str,
    pub city: &'a str,
    pub createdat: &'a str,
}

/// A row of the `company_counts` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = company_counts)]
pub struct CompanyCountRow {
    pub company_name: String,
    pub ratings_count: i64,
}

/// Formats a creation timestamp for storage.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be represented in RFC 3339.
pub fn format_timestamp(createdat: OffsetDateTime) -> Result<String, PersistenceError> {
    Ok(createdat.format(&Rfc3339)?)
}

impl RatingRow {
    /// Builds a row from a complete rating.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be formatted.
    pub fn from_rating(rating: &Rating) -> Result<Self, PersistenceError> {
        Ok(Self {
            salary_id: rating.salary_id,
            company_id: rating.company_id,
            company_rating_id: rating.company_rating_id,
            rating: rating.rating.raw(),
            salary: rating.salary.raw(),
            company_name: rating.company_name.clone(),
            seniority: rating.seniority.clone(),
            comment: rating.comment.clone(),
            job_title: rating.job_title.clone(),
            country: rating.country.clone(),
            city: rating.city.clone(),
            createdat: format_timestamp(rating.createdat)?,
        })
    }

    /// Converts the row back into a domain rating.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored timestamp is not valid RFC 3339.
    pub fn into_rating(self) -> Result<Rating, PersistenceError> {
        let createdat: OffsetDateTime = OffsetDateTime::parse(&self.createdat, &Rfc3339)?;
        Ok(Rating {
            salary_id: self.salary_id,
            company_id: self.company_id,
            company_rating_id: self.company_rating_id,
            rating: ReportedValue::new(self.rating),
            salary: ReportedValue::new(self.salary),
            company_name: self.company_name,
            seniority: self.seniority,
            comment: self.comment,
            job_title: self.job_title,
            country: self.country,
            city: self.city,
            createdat,
        })
    }
}

impl CompanyCountRow {
    /// Converts the row into a domain count.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored count is negative.
    pub fn into_company_count(self) -> Result<CompanyCount, PersistenceError> {
        let ratings_count: u64 = self.ratings_count.to_u64().ok_or_else(|| {
            PersistenceError::QueryFailed(format!(
                "Negative ratings count {} for company '{}'",
                self.ratings_count, self.company_name
            ))
        })?;
        Ok(CompanyCount {
            company_name: self.company_name,
            ratings_count,
        })
    }
}
