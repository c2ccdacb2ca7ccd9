use axum::{extract::State, http::StatusCode, response::IntoResponse};
use walkies::{model::walker::WalkerSummaryDto, server::controller::walker::get_walker_summaries};
use walkies_test_utils::prelude::*;

use crate::util::setup::test_setup;

/// Expect a rated completed walk to show up in the walker's summary
#[tokio::test]
async fn summarizes_rated_walker() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    let owner = test.users().insert_owner("alice123").await?;
    let walker = test.users().insert_walker("bobwalker").await?;
    let dog = test.dogs().insert_mock_dog(owner.id).await?;
    let request = test.walks().insert_completed(dog.id, walker.id).await?;
    test.walks()
        .insert_rating(request.id, walker.id, owner.id, 5)
        .await?;

    let result = get_walker_summaries(State(state)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let summaries: Vec<WalkerSummaryDto> = serde_json::from_slice(&body).unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].walker_username, "bobwalker");
    assert_eq!(summaries[0].total_ratings, 1);
    assert_eq!(summaries[0].average_rating, Some(5.0));
    assert_eq!(summaries[0].completed_walks, 1);

    Ok(())
}

/// Expect walkers with no activity to be listed with empty statistics
#[tokio::test]
async fn summarizes_inactive_walker() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    test.users().insert_walker("bobwalker").await?;

    let result = get_walker_summaries(State(state)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let summaries: Vec<WalkerSummaryDto> = serde_json::from_slice(&body).unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].average_rating, None);
    assert_eq!(summaries[0].completed_walks, 0);

    Ok(())
}
