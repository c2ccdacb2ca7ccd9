use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use entity::enums::{DogSize, WalkStatus};

/// Payload for posting a new walk request
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateWalkRequestDto {
    /// ID of the authenticated owner posting the request
    pub owner_id: i32,
    pub dog_id: i32,
    pub requested_time: NaiveDateTime,
    pub duration_minutes: i32,
    pub location: String,
}

/// Payload for accepting an open walk request
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AcceptWalkRequestDto {
    /// ID of the authenticated walker claiming the request
    pub walker_id: i32,
}

/// Payload for rating a completed walk
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RateWalkDto {
    pub walker_id: i32,
    pub owner_id: i32,
    pub rating: i32,
    pub comments: Option<String>,
}

/// A walk request as returned by the lifecycle endpoints
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct WalkRequestDto {
    pub request_id: i32,
    pub dog_id: i32,
    pub requested_time: NaiveDateTime,
    pub duration_minutes: i32,
    pub location: String,
    #[schema(value_type = String)]
    pub status: WalkStatus,
    pub walker_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

impl From<entity::walk_request::Model> for WalkRequestDto {
    fn from(request: entity::walk_request::Model) -> Self {
        WalkRequestDto {
            request_id: request.id,
            dog_id: request.dog_id,
            requested_time: request.requested_time,
            duration_minutes: request.duration_minutes,
            location: request.location,
            status: request.status,
            walker_id: request.walker_id,
            created_at: request.created_at,
        }
    }
}

/// A walk request in the catalog listing, joined with dog and owner details
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct WalkListItemDto {
    pub request_id: i32,
    pub dog_name: String,
    #[schema(value_type = String)]
    pub size: DogSize,
    pub requested_time: NaiveDateTime,
    pub duration_minutes: i32,
    pub location: String,
    #[schema(value_type = String)]
    pub status: WalkStatus,
    pub owner_username: String,
}

/// A rating recorded against a completed walk
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct WalkRatingDto {
    pub rating_id: i32,
    pub request_id: i32,
    pub walker_id: i32,
    pub owner_id: i32,
    pub rating: i32,
    pub comments: Option<String>,
    pub rated_at: NaiveDateTime,
}

impl From<entity::walk_rating::Model> for WalkRatingDto {
    fn from(rating: entity::walk_rating::Model) -> Self {
        WalkRatingDto {
            rating_id: rating.id,
            request_id: rating.request_id,
            walker_id: rating.walker_id,
            owner_id: rating.owner_id,
            rating: rating.rating,
            comments: rating.comments,
            rated_at: rating.rated_at,
        }
    }
}
