// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use salary_board::CoreError;
use salary_board_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

/// Builds the not-found error for a rating identifier as given by the client.
pub(crate) fn rating_not_found(id: impl std::fmt::Display) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Rating"),
        message: format!("could not find rating with id {id}"),
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidPageParameter { field, value } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("'{value}' is not an integer"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::RatingNotFound(id) => rating_not_found(id),
        CoreError::DuplicateRating(id) => ApiError::InvalidInput {
            field: String::from("salary_id"),
            message: format!("rating with id {id} already exists"),
        },
        CoreError::Storage(msg) => ApiError::Internal { message: msg },
    }
}
