// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One function per API operation.
//!
//! Each takes the store plus a request DTO and returns a response DTO or
//! an [`ApiError`]. None of them know about HTTP.

use salary_board::{
    CoreError, PageRequest, RatingPage, RatingStore, VisibleCompany, average,
    list_visible_companies, query,
};
use salary_board_domain::{NewRating, Rating, parse_page_parameter};
use tracing::{debug, info};

use crate::config::ServiceConfig;
use crate::error::{ApiError, rating_not_found, translate_core_error, translate_domain_error};
use crate::request_response::{
    AverageRatingRequest, AverageRatingResponse, CompanyResponse, ImportSummary,
    ListRatingsRequest, ListRatingsResponse, SubmitRatingRequest,
};

/// Lists one page of ratings matching the request's filters.
///
/// # Arguments
///
/// * `store` - The rating store
/// * `request` - The raw query parameters
///
/// # Errors
///
/// Returns an error if:
/// - `page` or `limit` is present but not an integer
/// - The store cannot be read
pub fn list_ratings<S: RatingStore + ?Sized>(
    store: &mut S,
    request: &ListRatingsRequest,
) -> Result<ListRatingsResponse, ApiError> {
    let page: Option<i64> =
        parse_page_parameter("page", request.page.as_deref()).map_err(translate_domain_error)?;
    let limit: Option<i64> =
        parse_page_parameter("limit", request.limit.as_deref()).map_err(translate_domain_error)?;

    let result: RatingPage = query(store, &request.filter(), PageRequest::new(page, limit))
        .map_err(translate_core_error)?;

    debug!(
        nb_hits = result.nb_hits,
        returned = result.hits.len(),
        "Listed ratings"
    );

    Ok(ListRatingsResponse::from(result))
}

/// Parses a rating identifier taken from a request path.
///
/// # Errors
///
/// Returns a not-found error if the identifier is not an integer, since no
/// rating can have such an identifier.
pub fn parse_rating_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim().parse::<i64>().map_err(|_| rating_not_found(raw))
}

/// Retrieves one rating.
///
/// # Arguments
///
/// * `store` - The rating store
/// * `salary_id` - The rating identifier
///
/// # Errors
///
/// Returns an error if the rating does not exist or the store fails.
pub fn get_rating<S: RatingStore + ?Sized>(
    store: &mut S,
    salary_id: i64,
) -> Result<Rating, ApiError> {
    store.get(salary_id).map_err(translate_core_error)
}

/// Stores a new submission.
///
/// Any strings and integers are accepted as given; values that are not
/// strictly positive are simply left out of averages later.
///
/// # Arguments
///
/// * `store` - The rating store
/// * `request` - The submission
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn submit_rating<S: RatingStore + ?Sized>(
    store: &mut S,
    request: SubmitRatingRequest,
) -> Result<Rating, ApiError> {
    let new_rating: NewRating = request.into_new_rating();

    let rating: Rating = store.create(new_rating).map_err(translate_core_error)?;

    info!(
        salary_id = rating.salary_id,
        company_name = %rating.company_name,
        "Rating submitted"
    );

    Ok(rating)
}

/// Computes rating and salary averages over the matching ratings.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn average_rating<S: RatingStore + ?Sized>(
    store: &mut S,
    request: &AverageRatingRequest,
) -> Result<AverageRatingResponse, ApiError> {
    average(store, &request.filter())
        .map(AverageRatingResponse::from)
        .map_err(translate_core_error)
}

/// Lists the companies with enough submissions to be shown.
///
/// # Arguments
///
/// * `store` - The rating store
/// * `config` - Supplies the display threshold
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_companies<S: RatingStore + ?Sized>(
    store: &mut S,
    config: &ServiceConfig,
) -> Result<Vec<CompanyResponse>, ApiError> {
    let companies: Vec<VisibleCompany> =
        list_visible_companies(store, config.max_entry_before_display)
            .map_err(translate_core_error)?;

    Ok(companies.into_iter().map(CompanyResponse::from).collect())
}

/// Loads complete ratings, keeping their identifiers and timestamps.
///
/// Ratings whose identifier is already stored are skipped, so loading the
/// same export twice is harmless.
///
/// # Errors
///
/// Returns an error if the store fails for any other reason. Ratings
/// imported before the failure stay stored.
pub fn import_ratings<S: RatingStore + ?Sized>(
    store: &mut S,
    ratings: Vec<Rating>,
) -> Result<ImportSummary, ApiError> {
    let mut summary: ImportSummary = ImportSummary::default();

    for rating in ratings {
        let salary_id: i64 = rating.salary_id;
        match store.import(rating) {
            Ok(_) => summary.imported += 1,
            Err(CoreError::DuplicateRating(_)) => {
                debug!(salary_id, "Skipping already imported rating");
                summary.skipped += 1;
            }
            Err(e) => return Err(translate_core_error(e)),
        }
    }

    info!(
        imported = summary.imported,
        skipped = summary.skipped,
        "Imported ratings"
    );

    Ok(summary)
}
