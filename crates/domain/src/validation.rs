// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Parses a raw pagination parameter.
///
/// Absent and blank values yield `None`, so the caller's defaults apply.
/// Out-of-range values such as `0` or negatives parse fine; normalizing
/// them is the pagination engine's job.
///
/// # Arguments
///
/// * `field` - The parameter name, used in the error
/// * `raw` - The raw query-string value
///
/// # Errors
///
/// Returns an error if the value is present but not an integer.
pub fn parse_page_parameter(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<i64>, DomainError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    raw.parse::<i64>()
        .map(Some)
        .map_err(|_| DomainError::InvalidPageParameter {
            field,
            value: raw.to_string(),
        })
}
