// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use salary_board::{CoreError, RatingStore};
use salary_board_domain::{CompanyCount, NewRating, Rating};

use crate::Persistence;

impl RatingStore for Persistence {
    fn create(&mut self, new_rating: NewRating) -> Result<Rating, CoreError> {
        Ok(self.create_rating(new_rating)?)
    }

    fn get(&mut self, salary_id: i64) -> Result<Rating, CoreError> {
        self.get_rating(salary_id)?
            .ok_or(CoreError::RatingNotFound(salary_id))
    }

    fn all(&mut self) -> Result<Vec<Rating>, CoreError> {
        Ok(self.list_ratings()?)
    }

    fn company_counts(&mut self) -> Result<Vec<CompanyCount>, CoreError> {
        Ok(self.list_company_counts()?)
    }

    fn import(&mut self, rating: Rating) -> Result<Rating, CoreError> {
        Ok(self.import_rating(rating)?)
    }
}
