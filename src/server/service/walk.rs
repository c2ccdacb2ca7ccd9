//! Walk request lifecycle management.
//!
//! A request starts open, is claimed by exactly one walker, and ends either
//! completed or cancelled. Every status change is a guarded update in the
//! store; when the guard misses, the request is re-read once to report why.

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use entity::enums::{UserRole, WalkStatus};

use crate::server::{
    data::{
        dog::DogRepository, user::UserRepository, walk_request::WalkRequestRepository,
    },
    error::Error,
};

/// Drives a walk request through its lifecycle.
pub struct WalkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WalkService<'a> {
    /// Creates a new instance of [`WalkService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a new walk request for one of the owner's dogs.
    ///
    /// The dog must exist and belong to `owner_id`, and the duration must be
    /// a positive number of minutes. The request is created open with no
    /// walker assigned.
    pub async fn create_request(
        &self,
        owner_id: i32,
        dog_id: i32,
        requested_time: NaiveDateTime,
        duration_minutes: i32,
        location: &str,
    ) -> Result<entity::walk_request::Model, Error> {
        if duration_minutes <= 0 {
            return Err(Error::NonPositiveDuration(duration_minutes));
        }

        let dog_repository = DogRepository::new(self.db);
        let dog = dog_repository
            .get(dog_id)
            .await?
            .ok_or(Error::DogNotFound(dog_id))?;

        if dog.owner_id != owner_id {
            return Err(Error::DogNotOwned { dog_id, owner_id });
        }

        let walk_request_repository = WalkRequestRepository::new(self.db);
        let request = walk_request_repository
            .create(dog_id, requested_time, duration_minutes, location)
            .await?;

        Ok(request)
    }

    /// Accepts an open request on behalf of a walker.
    ///
    /// The status change and the walker assignment are written atomically,
    /// guarded on the request still being open; of two racing walkers
    /// exactly one wins and the other receives
    /// [`Error::RequestAlreadyClaimed`].
    pub async fn accept_request(
        &self,
        request_id: i32,
        walker_id: i32,
    ) -> Result<entity::walk_request::Model, Error> {
        let user_repository = UserRepository::new(self.db);
        let walker = user_repository
            .get(walker_id)
            .await?
            .ok_or(Error::UserNotFound(walker_id))?;

        if walker.role != UserRole::Walker {
            return Err(Error::RoleMismatch {
                user_id: walker_id,
                expected: UserRole::Walker,
            });
        }

        let walk_request_repository = WalkRequestRepository::new(self.db);
        let claimed = walk_request_repository.claim(request_id, walker_id).await?;

        if claimed == 0 {
            return Err(self
                .classify_failed_transition(request_id, WalkStatus::Accepted)
                .await?);
        }

        self.reload(request_id).await
    }

    /// Marks an accepted request as completed.
    pub async fn complete_request(
        &self,
        request_id: i32,
    ) -> Result<entity::walk_request::Model, Error> {
        let walk_request_repository = WalkRequestRepository::new(self.db);
        let updated = walk_request_repository
            .transition(request_id, &[WalkStatus::Accepted], WalkStatus::Completed)
            .await?;

        if updated == 0 {
            return Err(self
                .classify_failed_transition(request_id, WalkStatus::Completed)
                .await?);
        }

        self.reload(request_id).await
    }

    /// Cancels a request that has not yet been completed.
    pub async fn cancel_request(
        &self,
        request_id: i32,
    ) -> Result<entity::walk_request::Model, Error> {
        let walk_request_repository = WalkRequestRepository::new(self.db);
        let updated = walk_request_repository
            .transition(
                request_id,
                &[WalkStatus::Open, WalkStatus::Accepted],
                WalkStatus::Cancelled,
            )
            .await?;

        if updated == 0 {
            return Err(self
                .classify_failed_transition(request_id, WalkStatus::Cancelled)
                .await?);
        }

        self.reload(request_id).await
    }

    /// Works out why a guarded status update matched no rows.
    async fn classify_failed_transition(
        &self,
        request_id: i32,
        to: WalkStatus,
    ) -> Result<Error, Error> {
        let walk_request_repository = WalkRequestRepository::new(self.db);
        let request = walk_request_repository.get(request_id).await?;

        Ok(match request {
            None => Error::WalkRequestNotFound(request_id),
            // A double-accept is a race lost, not an illegal request
            Some(request)
                if to == WalkStatus::Accepted && request.status == WalkStatus::Accepted =>
            {
                Error::RequestAlreadyClaimed(request_id)
            }
            Some(request) => Error::InvalidTransition {
                request_id,
                from: request.status,
                to,
            },
        })
    }

    async fn reload(&self, request_id: i32) -> Result<entity::walk_request::Model, Error> {
        let walk_request_repository = WalkRequestRepository::new(self.db);
        walk_request_repository
            .get(request_id)
            .await?
            .ok_or(Error::WalkRequestNotFound(request_id))
    }
}
