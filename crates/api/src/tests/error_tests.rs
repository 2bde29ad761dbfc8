// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use salary_board::CoreError;
use salary_board_domain::DomainError;

use crate::{ApiError, translate_core_error, translate_domain_error};

#[test]
fn test_rating_not_found_message() {
    let err = translate_core_error(CoreError::RatingNotFound(1001));

    assert_eq!(
        err,
        ApiError::ResourceNotFound {
            resource_type: String::from("Rating"),
            message: String::from("could not find rating with id 1001"),
        }
    );
}

#[test]
fn test_storage_failure_is_internal() {
    let err = translate_core_error(CoreError::Storage(String::from("disk full")));

    assert_eq!(err.to_string(), "Internal error: disk full");
}

#[test]
fn test_page_parameter_error_names_field() {
    let err = translate_domain_error(DomainError::InvalidPageParameter {
        field: "limit",
        value: String::from("ten"),
    });

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("limit"),
            message: String::from("'ten' is not an integer"),
        }
    );
}
