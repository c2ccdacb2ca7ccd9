use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::enums::WalkStatus;
use walkies::{
    model::walk::{AcceptWalkRequestDto, CreateWalkRequestDto, RateWalkDto, WalkRequestDto},
    server::controller::walk::{
        accept_walk_request, cancel_walk_request, complete_walk_request, create_walk_request,
        list_walk_requests, rate_walk, ListWalksQuery,
    },
};
use walkies_test_utils::prelude::*;

use crate::util::setup::test_setup;

/// Expect 201 created followed by 200 on accept, complete, and 201 on rating
#[tokio::test]
async fn walks_through_full_lifecycle() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    let owner = test.users().insert_owner("alice123").await?;
    let walker = test.users().insert_walker("bobwalker").await?;
    let dog = test.dogs().insert_mock_dog(owner.id).await?;

    let result = create_walk_request(
        State(state.clone()),
        Json(CreateWalkRequestDto {
            owner_id: owner.id,
            dog_id: dog.id,
            requested_time: test.walks().sample_time(),
            duration_minutes: 30,
            location: "Parklands".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let created: WalkRequestDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(created.status, WalkStatus::Open);
    let request_id = created.request_id;

    let result = accept_walk_request(
        State(state.clone()),
        Path(request_id),
        Json(AcceptWalkRequestDto {
            walker_id: walker.id,
        }),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = complete_walk_request(State(state.clone()), Path(request_id)).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = rate_walk(
        State(state),
        Path(request_id),
        Json(RateWalkDto {
            walker_id: walker.id,
            owner_id: owner.id,
            rating: 5,
            comments: Some("Great walk".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 409 conflict when a second walker accepts the same request
#[tokio::test]
async fn returns_conflict_for_double_accept() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    let owner = test.users().insert_owner("alice123").await?;
    let walker = test.users().insert_walker("bobwalker").await?;
    let rival = test.users().insert_walker("danwalker").await?;
    let dog = test.dogs().insert_mock_dog(owner.id).await?;
    let request = test.walks().insert_open(dog.id).await?;

    let result = accept_walk_request(
        State(state.clone()),
        Path(request.id),
        Json(AcceptWalkRequestDto {
            walker_id: walker.id,
        }),
    )
    .await;
    assert!(result.is_ok());

    let result = accept_walk_request(
        State(state),
        Path(request.id),
        Json(AcceptWalkRequestDto {
            walker_id: rival.id,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 422 when completing a request that was never accepted
#[tokio::test]
async fn returns_unprocessable_for_completing_open_request() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    let owner = test.users().insert_owner("alice123").await?;
    let dog = test.dogs().insert_mock_dog(owner.id).await?;
    let request = test.walks().insert_open(dog.id).await?;

    let result = complete_walk_request(State(state), Path(request.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect 404 for lifecycle calls on a request that does not exist
#[tokio::test]
async fn returns_not_found_for_nonexistent_request() -> Result<(), TestError> {
    let (_test, state) = test_setup().await?;

    let nonexistent_request_id = 1;
    let result = cancel_walk_request(State(state), Path(nonexistent_request_id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 for a rating outside the 1..=5 range
#[tokio::test]
async fn returns_bad_request_for_out_of_range_rating() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    let owner = test.users().insert_owner("alice123").await?;
    let walker = test.users().insert_walker("bobwalker").await?;
    let dog = test.dogs().insert_mock_dog(owner.id).await?;
    let request = test.walks().insert_completed(dog.id, walker.id).await?;

    let result = rate_walk(
        State(state),
        Path(request.id),
        Json(RateWalkDto {
            walker_id: walker.id,
            owner_id: owner.id,
            rating: 6,
            comments: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 409 when rating the same walk twice
#[tokio::test]
async fn returns_conflict_for_double_rating() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    let owner = test.users().insert_owner("alice123").await?;
    let walker = test.users().insert_walker("bobwalker").await?;
    let dog = test.dogs().insert_mock_dog(owner.id).await?;
    let request = test.walks().insert_completed(dog.id, walker.id).await?;

    let result = rate_walk(
        State(state.clone()),
        Path(request.id),
        Json(RateWalkDto {
            walker_id: walker.id,
            owner_id: owner.id,
            rating: 5,
            comments: None,
        }),
    )
    .await;
    assert!(result.is_ok());

    let result = rate_walk(
        State(state),
        Path(request.id),
        Json(RateWalkDto {
            walker_id: walker.id,
            owner_id: owner.id,
            rating: 3,
            comments: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 200 with the open filter applied
#[tokio::test]
async fn lists_open_walk_requests() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    let owner = test.users().insert_owner("alice123").await?;
    let walker = test.users().insert_walker("bobwalker").await?;
    let dog = test.dogs().insert_mock_dog(owner.id).await?;
    test.walks().insert_open(dog.id).await?;
    test.walks().insert_accepted(dog.id, walker.id).await?;

    let result = list_walk_requests(
        State(state),
        Query(ListWalksQuery {
            status: Some(WalkStatus::Open),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
