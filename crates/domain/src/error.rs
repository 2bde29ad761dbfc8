// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A pagination parameter could not be parsed as an integer.
    InvalidPageParameter {
        /// The parameter name (`page` or `limit`).
        field: &'static str,
        /// The raw value as received.
        value: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPageParameter { field, value } => {
                write!(f, "Invalid {field}: '{value}' is not an integer")
            }
        }
    }
}

impl std::error::Error for DomainError {}
