// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Country recorded on a submission that does not name one.
pub const DEFAULT_COUNTRY: &str = "Cameroon";

/// A rating or salary as reported by a submitter.
///
/// On the wire this is a plain integer. Zero and the sentinel `-1` both
/// mean "not provided". Any other non-positive value is stored as given
/// but, like the sentinel, never takes part in averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportedValue(i64);

impl ReportedValue {
    /// The sentinel stored when a submission omits the value.
    pub const NOT_PROVIDED: Self = Self(-1);

    /// Wraps a raw wire value.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Maps an optional value onto the wire encoding.
    #[must_use]
    pub const fn from_option(value: Option<i64>) -> Self {
        match value {
            Some(raw) => Self(raw),
            None => Self::NOT_PROVIDED,
        }
    }

    /// Returns the raw wire value, sentinel included.
    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Returns the value if it counts towards an average.
    #[must_use]
    pub const fn counted(self) -> Option<i64> {
        if self.0 > 0 { Some(self.0) } else { None }
    }
}

impl Default for ReportedValue {
    fn default() -> Self {
        Self::NOT_PROVIDED
    }
}

/// A stored salary/rating submission.
///
/// Records are immutable once created. Field order matches the JSON
/// representation served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Identifier assigned at creation, strictly increasing.
    pub salary_id: i64,
    /// Reference to an external company entity, 0 when unset.
    #[serde(default)]
    pub company_id: i64,
    /// Reference to an external company rating entity, 0 when unset.
    #[serde(default)]
    pub company_rating_id: i64,
    /// The reported rating.
    #[serde(default)]
    pub rating: ReportedValue,
    /// The reported salary.
    #[serde(default)]
    pub salary: ReportedValue,
    /// The company the submission is about.
    pub company_name: String,
    /// Seniority level of the position.
    #[serde(default)]
    pub seniority: String,
    /// Free-text comment.
    #[serde(default)]
    pub comment: String,
    /// Job title of the position.
    pub job_title: String,
    /// Country of the position.
    pub country: String,
    /// City of the position.
    #[serde(default)]
    pub city: String,
    /// Creation timestamp (UTC).
    #[serde(with = "time::serde::rfc3339")]
    pub createdat: OffsetDateTime,
}

/// A submission that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRating {
    /// Reference to an external company entity, 0 when unset.
    pub company_id: i64,
    /// Reference to an external company rating entity, 0 when unset.
    pub company_rating_id: i64,
    /// The reported rating.
    pub rating: ReportedValue,
    /// The reported salary.
    pub salary: ReportedValue,
    /// The company the submission is about.
    pub company_name: String,
    /// Seniority level of the position.
    pub seniority: String,
    /// Free-text comment.
    pub comment: String,
    /// Job title of the position.
    pub job_title: String,
    /// Country of the position. `None` or blank falls back to [`DEFAULT_COUNTRY`].
    pub country: Option<String>,
    /// City of the position.
    pub city: String,
}

impl NewRating {
    /// Returns the country to store for this submission.
    #[must_use]
    pub fn resolved_country(&self) -> String {
        match self.country.as_deref() {
            Some(country) if !country.trim().is_empty() => country.to_string(),
            _ => String::from(DEFAULT_COUNTRY),
        }
    }

    /// Turns the submission into a stored record.
    ///
    /// # Arguments
    ///
    /// * `salary_id` - The identifier assigned by the store
    /// * `createdat` - The creation timestamp assigned by the store
    #[must_use]
    pub fn into_rating(self, salary_id: i64, createdat: OffsetDateTime) -> Rating {
        let country: String = self.resolved_country();
        Rating {
            salary_id,
            company_id: self.company_id,
            company_rating_id: self.company_rating_id,
            rating: self.rating,
            salary: self.salary,
            company_name: self.company_name,
            seniority: self.seniority,
            comment: self.comment,
            job_title: self.job_title,
            country,
            city: self.city,
            createdat,
        }
    }
}

/// Number of submissions referencing one company name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyCount {
    /// The company name (grouping key).
    pub company_name: String,
    /// How many ratings reference it.
    pub ratings_count: u64,
}

impl CompanyCount {
    /// Creates a new `CompanyCount`.
    #[must_use]
    pub fn new(company_name: &str, ratings_count: u64) -> Self {
        Self {
            company_name: company_name.to_string(),
            ratings_count,
        }
    }
}
