use serde::{Deserialize, Serialize};

/// Aggregate rating statistics for a single walker
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct WalkerSummaryDto {
    pub walker_username: String,
    pub total_ratings: u64,
    /// Mean rating rounded to one decimal place; absent until the walker has
    /// been rated at least once
    pub average_rating: Option<f64>,
    /// Completed walks that have received a rating; a completed walk with no
    /// rating does not count
    pub completed_walks: u64,
}
