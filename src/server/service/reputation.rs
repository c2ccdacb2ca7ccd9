//! Walker reputation aggregation.
//!
//! Summaries are recomputed from the store on every call; nothing is cached.

use sea_orm::DatabaseConnection;

use entity::enums::UserRole;

use crate::server::{
    data::{
        user::UserRepository, walk_rating::WalkRatingRepository,
        walk_request::WalkRequestRepository,
    },
    error::Error,
};

/// Aggregate rating statistics for one walker.
#[derive(Debug)]
pub struct WalkerSummary {
    /// The walker the statistics describe
    pub walker: entity::user::Model,
    /// Number of ratings the walker has received
    pub total_ratings: u64,
    /// Mean rating rounded to one decimal place; `None` until the walker has
    /// been rated at least once
    pub average_rating: Option<f64>,
    /// Completed walks that have received a rating; a completed walk with no
    /// rating is not counted
    pub completed_walks: u64,
}

/// Computes per-walker reputation from current store state.
pub struct ReputationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReputationService<'a> {
    /// Creates a new instance of [`ReputationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Summarizes every registered walker
    pub async fn summarize_walkers(&self) -> Result<Vec<WalkerSummary>, Error> {
        let user_repository = UserRepository::new(self.db);
        let walkers = user_repository.get_many_by_role(UserRole::Walker).await?;

        let mut summaries = Vec::with_capacity(walkers.len());
        for walker in walkers {
            summaries.push(self.summarize(walker).await?);
        }

        Ok(summaries)
    }

    /// Summarizes a single walker
    pub async fn summarize_walker(&self, walker_id: i32) -> Result<WalkerSummary, Error> {
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

        self.summarize(walker).await
    }

    async fn summarize(&self, walker: entity::user::Model) -> Result<WalkerSummary, Error> {
        let walk_rating_repository = WalkRatingRepository::new(self.db);
        let walk_request_repository = WalkRequestRepository::new(self.db);

        let ratings = walk_rating_repository
            .get_many_by_walker_id(walker.id)
            .await?;

        let total_ratings = ratings.len() as u64;
        let average_rating = if ratings.is_empty() {
            None
        } else {
            let sum: i32 = ratings.iter().map(|r| r.rating).sum();
            // Rounded to one decimal place
            Some((sum as f64 / ratings.len() as f64 * 10.0).round() / 10.0)
        };

        // Completed walks only count toward the summary once rated
        let completed_walks = walk_request_repository
            .count_rated_completions(walker.id)
            .await?;

        Ok(WalkerSummary {
            walker,
            total_ratings,
            average_rating,
            completed_walks,
        })
    }
}
