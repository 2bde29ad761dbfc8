// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use salary_board_domain::{CompanyCount, NewRating, Rating};
use time::OffsetDateTime;

use crate::error::CoreError;

/// Durable collection of ratings.
///
/// A store owns identifier assignment: every created rating receives the
/// next `salary_id` from a single global sequence, and identifiers are
/// never reused. Alongside the records it maintains a per-company count
/// index, updated in the same step as the insert.
///
/// Methods take `&mut self` because the backing connection is exclusive;
/// callers sharing a store across tasks wrap it in a mutex.
pub trait RatingStore {
    /// Stores a new submission.
    ///
    /// Assigns `salary_id` and `createdat`, resolves the default country,
    /// and bumps the company's count.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the backing store fails.
    fn create(&mut self, new_rating: NewRating) -> Result<Rating, CoreError>;

    /// Retrieves a rating by identifier.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::RatingNotFound` if no rating has this identifier.
    fn get(&mut self, salary_id: i64) -> Result<Rating, CoreError>;

    /// Returns every rating in creation order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the backing store fails.
    fn all(&mut self) -> Result<Vec<Rating>, CoreError>;

    /// Returns the per-company count index.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the backing store fails.
    fn company_counts(&mut self) -> Result<Vec<CompanyCount>, CoreError>;

    /// Stores an already-formed rating, keeping its identifier and timestamp.
    ///
    /// Used to seed a store from an export.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateRating` if the identifier is taken.
    fn import(&mut self, rating: Rating) -> Result<Rating, CoreError>;
}

/// A rating store held entirely in memory.
///
/// Ratings are kept sorted by `salary_id`, which is also creation order.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    ratings: Vec<Rating>,
    counts: BTreeMap<String, u64>,
    next_id: i64,
}

impl InMemoryStore {
    /// Creates an empty store. The first created rating gets id 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ratings: Vec::new(),
            counts: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Returns the number of stored ratings.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ratings.len()
    }

    /// Returns whether the store holds no ratings.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    fn position(&self, salary_id: i64) -> Result<usize, usize> {
        self.ratings.binary_search_by_key(&salary_id, |r| r.salary_id)
    }

    fn bump_count(&mut self, company_name: &str) {
        *self.counts.entry(company_name.to_string()).or_insert(0) += 1;
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RatingStore for InMemoryStore {
    fn create(&mut self, new_rating: NewRating) -> Result<Rating, CoreError> {
        let salary_id: i64 = self.next_id;
        self.next_id = salary_id
            .checked_add(1)
            .ok_or_else(|| CoreError::Storage(String::from("rating id space exhausted")))?;

        let rating: Rating = new_rating.into_rating(salary_id, OffsetDateTime::now_utc());
        self.bump_count(&rating.company_name);
        self.ratings.push(rating.clone());
        Ok(rating)
    }

    fn get(&mut self, salary_id: i64) -> Result<Rating, CoreError> {
        self.position(salary_id)
            .map(|index| self.ratings[index].clone())
            .map_err(|_| CoreError::RatingNotFound(salary_id))
    }

    fn all(&mut self) -> Result<Vec<Rating>, CoreError> {
        Ok(self.ratings.clone())
    }

    fn company_counts(&mut self) -> Result<Vec<CompanyCount>, CoreError> {
        Ok(self
            .counts
            .iter()
            .map(|(name, count)| CompanyCount::new(name, *count))
            .collect())
    }

    fn import(&mut self, rating: Rating) -> Result<Rating, CoreError> {
        let index: usize = match self.position(rating.salary_id) {
            Ok(_) => return Err(CoreError::DuplicateRating(rating.salary_id)),
            Err(index) => index,
        };

        // Later creates must still land after every imported id.
        if rating.salary_id >= self.next_id {
            self.next_id = rating.salary_id.saturating_add(1);
        }

        self.bump_count(&rating.company_name);
        self.ratings.insert(index, rating.clone());
        Ok(rating)
    }
}
