//! Rating recording for completed walks.

use sea_orm::{DatabaseConnection, SqlErr};

use entity::enums::WalkStatus;

use crate::server::{
    data::{walk_rating::WalkRatingRepository, walk_request::WalkRequestRepository},
    error::Error,
};

/// Records the single rating a completed walk may receive.
pub struct RatingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingService<'a> {
    /// Creates a new instance of [`RatingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Rates a completed walk.
    ///
    /// The request must be completed, `walker_id` must be the walker who was
    /// assigned to it, `owner_id` must own the walked dog, and the rating
    /// must fall in 1..=5. A request can be rated once; the schema's unique
    /// constraint backs the check, so a concurrent duplicate still surfaces
    /// as [`Error::RequestAlreadyRated`].
    pub async fn rate_walk(
        &self,
        request_id: i32,
        walker_id: i32,
        owner_id: i32,
        rating: i32,
        comments: Option<String>,
    ) -> Result<entity::walk_rating::Model, Error> {
        if !(1..=5).contains(&rating) {
            return Err(Error::RatingOutOfRange(rating));
        }

        let walk_request_repository = WalkRequestRepository::new(self.db);
        let (request, dog) = walk_request_repository
            .get_with_dog(request_id)
            .await?
            .ok_or(Error::WalkRequestNotFound(request_id))?;

        if request.status != WalkStatus::Completed {
            return Err(Error::RequestNotCompleted {
                request_id,
                status: request.status,
            });
        }

        if request.walker_id != Some(walker_id) {
            return Err(Error::WalkerMismatch {
                request_id,
                walker_id,
            });
        }

        let dog = dog.ok_or(Error::DogNotFound(request.dog_id))?;
        if dog.owner_id != owner_id {
            return Err(Error::OwnerMismatch {
                request_id,
                owner_id,
            });
        }

        let walk_rating_repository = WalkRatingRepository::new(self.db);
        if walk_rating_repository
            .get_by_request_id(request_id)
            .await?
            .is_some()
        {
            return Err(Error::RequestAlreadyRated(request_id));
        }

        let rating = match walk_rating_repository
            .create(request_id, walker_id, owner_id, rating, comments)
            .await
        {
            Ok(rating) => rating,
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(Error::RequestAlreadyRated(request_id));
            }
            Err(err) => return Err(err.into()),
        };

        Ok(rating)
    }
}
