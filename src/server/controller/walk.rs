//! Walk request lifecycle and rating endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use entity::enums::WalkStatus;

use crate::{
    model::{
        api::ErrorDto,
        walk::{
            AcceptWalkRequestDto, CreateWalkRequestDto, RateWalkDto, WalkListItemDto,
            WalkRatingDto, WalkRequestDto,
        },
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{catalog::CatalogService, rating::RatingService, walk::WalkService},
    },
};

/// OpenAPI tag for walk request routes
pub static WALK_TAG: &str = "walk";

/// Query parameters accepted by the walk request listing
#[derive(Deserialize, IntoParams)]
pub struct ListWalksQuery {
    /// Only return requests holding this status
    #[param(value_type = Option<String>)]
    pub status: Option<WalkStatus>,
}

/// Post a new walk request for one of the caller's dogs
#[utoipa::path(
    post,
    path = "/api/walks",
    tag = WALK_TAG,
    request_body = CreateWalkRequestDto,
    responses(
        (status = 201, description = "Walk request created", body = WalkRequestDto),
        (status = 400, description = "Invalid duration or dog ownership", body = ErrorDto),
        (status = 404, description = "Dog not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_walk_request(
    State(state): State<AppState>,
    Json(payload): Json<CreateWalkRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let walk_service = WalkService::new(&state.db);

    let request = walk_service
        .create_request(
            payload.owner_id,
            payload.dog_id,
            payload.requested_time,
            payload.duration_minutes,
            &payload.location,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(WalkRequestDto::from(request))).into_response())
}

/// List walk requests joined with dog and owner details
#[utoipa::path(
    get,
    path = "/api/walks",
    tag = WALK_TAG,
    params(ListWalksQuery),
    responses(
        (status = 200, description = "Success when listing walk requests", body = Vec<WalkListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_walk_requests(
    State(state): State<AppState>,
    Query(query): Query<ListWalksQuery>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let requests = catalog_service.list_requests(query.status).await?;

    let items: Vec<WalkListItemDto> = requests
        .into_iter()
        .map(|r| WalkListItemDto {
            request_id: r.id,
            dog_name: r.dog_name,
            size: r.size,
            requested_time: r.requested_time,
            duration_minutes: r.duration_minutes,
            location: r.location,
            status: r.status,
            owner_username: r.owner_username,
        })
        .collect();

    Ok((StatusCode::OK, Json(items)).into_response())
}

/// Accept an open walk request on behalf of a walker
#[utoipa::path(
    post,
    path = "/api/walks/{request_id}/accept",
    tag = WALK_TAG,
    params(("request_id" = i32, Path, description = "ID of the walk request")),
    request_body = AcceptWalkRequestDto,
    responses(
        (status = 200, description = "Walk request accepted", body = WalkRequestDto),
        (status = 400, description = "User is not a walker", body = ErrorDto),
        (status = 404, description = "Walk request or walker not found", body = ErrorDto),
        (status = 409, description = "Walk request already accepted", body = ErrorDto),
        (status = 422, description = "Walk request is not open", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_walk_request(
    State(state): State<AppState>,
    Path(request_id): Path<i32>,
    Json(payload): Json<AcceptWalkRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let walk_service = WalkService::new(&state.db);

    let request = walk_service
        .accept_request(request_id, payload.walker_id)
        .await?;

    Ok((StatusCode::OK, Json(WalkRequestDto::from(request))).into_response())
}

/// Mark an accepted walk request as completed
#[utoipa::path(
    post,
    path = "/api/walks/{request_id}/complete",
    tag = WALK_TAG,
    params(("request_id" = i32, Path, description = "ID of the walk request")),
    responses(
        (status = 200, description = "Walk request completed", body = WalkRequestDto),
        (status = 404, description = "Walk request not found", body = ErrorDto),
        (status = 422, description = "Walk request is not accepted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_walk_request(
    State(state): State<AppState>,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let walk_service = WalkService::new(&state.db);

    let request = walk_service.complete_request(request_id).await?;

    Ok((StatusCode::OK, Json(WalkRequestDto::from(request))).into_response())
}

/// Cancel a walk request that has not been completed
#[utoipa::path(
    post,
    path = "/api/walks/{request_id}/cancel",
    tag = WALK_TAG,
    params(("request_id" = i32, Path, description = "ID of the walk request")),
    responses(
        (status = 200, description = "Walk request cancelled", body = WalkRequestDto),
        (status = 404, description = "Walk request not found", body = ErrorDto),
        (status = 422, description = "Walk request already finished", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_walk_request(
    State(state): State<AppState>,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let walk_service = WalkService::new(&state.db);

    let request = walk_service.cancel_request(request_id).await?;

    Ok((StatusCode::OK, Json(WalkRequestDto::from(request))).into_response())
}

/// Rate a completed walk
#[utoipa::path(
    post,
    path = "/api/walks/{request_id}/rating",
    tag = WALK_TAG,
    params(("request_id" = i32, Path, description = "ID of the walk request")),
    request_body = RateWalkDto,
    responses(
        (status = 201, description = "Rating recorded", body = WalkRatingDto),
        (status = 400, description = "Rating out of range or identity mismatch", body = ErrorDto),
        (status = 404, description = "Walk request not found", body = ErrorDto),
        (status = 409, description = "Walk request already rated", body = ErrorDto),
        (status = 422, description = "Walk request is not completed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rate_walk(
    State(state): State<AppState>,
    Path(request_id): Path<i32>,
    Json(payload): Json<RateWalkDto>,
) -> Result<impl IntoResponse, Error> {
    let rating_service = RatingService::new(&state.db);

    let rating = rating_service
        .rate_walk(
            request_id,
            payload.walker_id,
            payload.owner_id,
            payload.rating,
            payload.comments,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(WalkRatingDto::from(rating))).into_response())
}
