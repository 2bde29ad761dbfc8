// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use salary_board_domain::{Rating, RatingFilter, ReportedValue};

use crate::error::CoreError;
use crate::select;
use crate::store::RatingStore;

/// Average rating and salary over a set of ratings.
///
/// A field with no countable value averages to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Averages {
    /// Truncated mean of the provided ratings.
    pub rating: i64,
    /// Truncated mean of the provided salaries.
    pub salary: i64,
}

/// Running sum and count for one field.
#[derive(Debug, Default)]
struct Accumulator {
    sum: i128,
    count: i128,
}

impl Accumulator {
    fn push(&mut self, value: ReportedValue) {
        if let Some(v) = value.counted() {
            self.sum += i128::from(v);
            self.count += 1;
        }
    }

    fn mean(&self) -> i64 {
        if self.count == 0 {
            return 0;
        }
        // Inputs are positive, so division already truncates toward zero
        // and the mean never exceeds the largest input.
        i64::try_from(self.sum / self.count).unwrap_or(i64::MAX)
    }
}

/// Computes both averages in a single pass.
///
/// Each field is aggregated on its own: a rating without a salary still
/// counts towards the rating average, and the other way round.
#[must_use]
pub fn compute_averages<'a, I>(ratings: I) -> Averages
where
    I: IntoIterator<Item = &'a Rating>,
{
    let mut rating: Accumulator = Accumulator::default();
    let mut salary: Accumulator = Accumulator::default();

    for r in ratings {
        rating.push(r.rating);
        salary.push(r.salary);
    }

    Averages {
        rating: rating.mean(),
        salary: salary.mean(),
    }
}

/// Averages rating and salary over every rating matching the filter.
///
/// # Arguments
///
/// * `store` - The rating store to read from
/// * `filter` - The constraints selecting the working set
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn average<S: RatingStore + ?Sized>(
    store: &mut S,
    filter: &RatingFilter,
) -> Result<Averages, CoreError> {
    let matches: Vec<Rating> = select(store, filter)?;
    Ok(compute_averages(&matches))
}
