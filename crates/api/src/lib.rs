// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Salary Board.
//!
//! Turns raw request values into domain inputs, runs them against a
//! [`salary_board::RatingStore`], and translates every failure into an
//! [`ApiError`]. Transport concerns live in the server crate.

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

mod config;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use config::ServiceConfig;
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    average_rating, get_rating, import_ratings, list_companies, list_ratings, parse_rating_id,
    submit_rating,
};
pub use request_response::{
    AverageRatingRequest, AverageRatingResponse, CompanyResponse, ImportSummary,
    ListRatingsRequest, ListRatingsResponse, SubmitRatingRequest,
};
