// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Rating;

/// Equality constraints over the queryable fields of a rating.
///
/// Each constraint matches case-insensitively and exactly (no substring
/// matching). Absent constraints match everything; present ones are
/// combined with AND. Blank values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingFilter {
    company_name: Option<String>,
    job_title: Option<String>,
    city: Option<String>,
    seniority: Option<String>,
}

impl RatingFilter {
    /// Creates a filter that matches every rating.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            company_name: None,
            job_title: None,
            city: None,
            seniority: None,
        }
    }

    /// Constrains the company name.
    #[must_use]
    pub fn with_company_name(mut self, company_name: Option<&str>) -> Self {
        self.company_name = non_blank(company_name);
        self
    }

    /// Constrains the job title.
    #[must_use]
    pub fn with_job_title(mut self, job_title: Option<&str>) -> Self {
        self.job_title = non_blank(job_title);
        self
    }

    /// Constrains the city.
    #[must_use]
    pub fn with_city(mut self, city: Option<&str>) -> Self {
        self.city = non_blank(city);
        self
    }

    /// Constrains the seniority.
    #[must_use]
    pub fn with_seniority(mut self, seniority: Option<&str>) -> Self {
        self.seniority = non_blank(seniority);
        self
    }

    /// Returns whether no constraint is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.company_name.is_none()
            && self.job_title.is_none()
            && self.city.is_none()
            && self.seniority.is_none()
    }

    /// Returns whether the rating satisfies every constraint.
    #[must_use]
    pub fn matches(&self, rating: &Rating) -> bool {
        constraint_holds(self.company_name.as_deref(), &rating.company_name)
            && constraint_holds(self.job_title.as_deref(), &rating.job_title)
            && constraint_holds(self.city.as_deref(), &rating.city)
            && constraint_holds(self.seniority.as_deref(), &rating.seniority)
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(ToString::to_string)
}

fn constraint_holds(expected: Option<&str>, actual: &str) -> bool {
    expected.is_none_or(|expected| eq_ignore_case(expected, actual))
}

/// Unicode-aware case-insensitive equality without allocating.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
