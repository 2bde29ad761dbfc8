// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Query-string requests keep every value as a raw string; normalization
//! happens in the operation that consumes them.

use salary_board::{Averages, RatingPage, VisibleCompany};
use salary_board_domain::{NewRating, Rating, RatingFilter, ReportedValue};
use serde::{Deserialize, Serialize};

/// API request to list ratings, as found in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListRatingsRequest {
    /// Page number, 1-based.
    pub page: Option<String>,
    /// Page size.
    pub limit: Option<String>,
    /// Company name constraint.
    pub company: Option<String>,
    /// Job title constraint.
    pub jobtitle: Option<String>,
    /// City constraint.
    pub city: Option<String>,
    /// Seniority constraint.
    pub seniority: Option<String>,
}

impl ListRatingsRequest {
    /// Builds the filter described by this request.
    #[must_use]
    pub fn filter(&self) -> RatingFilter {
        build_filter(
            self.company.as_deref(),
            self.jobtitle.as_deref(),
            self.city.as_deref(),
            self.seniority.as_deref(),
        )
    }
}

/// API response for a page of ratings.
///
/// Serialized as `{hits, limit, nbHits, offset}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRatingsResponse {
    /// The ratings on this page.
    pub hits: Vec<Rating>,
    /// The page size in effect.
    pub limit: i64,
    /// Total number of matching ratings.
    #[serde(rename = "nbHits")]
    pub nb_hits: usize,
    /// Index of the first returned rating among all matches.
    pub offset: i64,
}

impl From<RatingPage> for ListRatingsResponse {
    fn from(page: RatingPage) -> Self {
        Self {
            hits: page.hits,
            limit: page.limit,
            nb_hits: page.nb_hits,
            offset: page.offset,
        }
    }
}

/// API request to submit a rating.
///
/// Omitted `rating` and `salary` are stored as `-1`. Omitted `country`
/// falls back to the default country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubmitRatingRequest {
    /// The company the submission is about.
    pub company_name: String,
    /// Job title of the position.
    pub job_title: String,
    /// The reported salary.
    pub salary: Option<i64>,
    /// The reported rating.
    pub rating: Option<i64>,
    /// Free-text comment.
    pub comment: String,
    /// Seniority level of the position.
    pub seniority: String,
    /// City of the position.
    pub city: String,
    /// Country of the position.
    pub country: Option<String>,
    /// Reference to an external company entity.
    pub company_id: i64,
    /// Reference to an external company rating entity.
    pub company_rating_id: i64,
}

impl SubmitRatingRequest {
    /// Converts the request into a domain submission.
    #[must_use]
    pub fn into_new_rating(self) -> NewRating {
        NewRating {
            company_id: self.company_id,
            company_rating_id: self.company_rating_id,
            rating: ReportedValue::from_option(self.rating),
            salary: ReportedValue::from_option(self.salary),
            company_name: self.company_name,
            seniority: self.seniority,
            comment: self.comment,
            job_title: self.job_title,
            country: self.country,
            city: self.city,
        }
    }
}

/// API request for averages, as found in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AverageRatingRequest {
    /// Company name constraint.
    pub company: Option<String>,
    /// Job title constraint.
    pub jobtitle: Option<String>,
    /// City constraint.
    pub city: Option<String>,
    /// Seniority constraint.
    pub seniority: Option<String>,
}

impl AverageRatingRequest {
    /// Builds the filter described by this request.
    #[must_use]
    pub fn filter(&self) -> RatingFilter {
        build_filter(
            self.company.as_deref(),
            self.jobtitle.as_deref(),
            self.city.as_deref(),
            self.seniority.as_deref(),
        )
    }
}

/// API response for averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AverageRatingResponse {
    /// Average of the counted ratings, 0 when none.
    pub rating: i64,
    /// Average of the counted salaries, 0 when none.
    pub salary: i64,
}

impl From<Averages> for AverageRatingResponse {
    fn from(averages: Averages) -> Self {
        Self {
            rating: averages.rating,
            salary: averages.salary,
        }
    }
}

/// A company in the public listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyResponse {
    /// The company name.
    pub name: String,
    /// How many ratings reference it.
    pub ratings_count: u64,
}

impl From<VisibleCompany> for CompanyResponse {
    fn from(company: VisibleCompany) -> Self {
        Self {
            name: company.name,
            ratings_count: company.ratings_count,
        }
    }
}

/// Result of loading a seed export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Ratings stored.
    pub imported: usize,
    /// Ratings skipped because their identifier already existed.
    pub skipped: usize,
}

fn build_filter(
    company: Option<&str>,
    job_title: Option<&str>,
    city: Option<&str>,
    seniority: Option<&str>,
) -> RatingFilter {
    RatingFilter::new()
        .with_company_name(company)
        .with_job_title(job_title)
        .with_city(city)
        .with_seniority(seniority)
}
