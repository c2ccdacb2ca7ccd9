use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::enums::DogSize;
use walkies::{model::dog::DogDto, server::controller::dog::list_dogs};
use walkies_test_utils::prelude::*;

use crate::util::setup::test_setup;

/// Expect 200 with every dog joined to its owner's username
#[tokio::test]
async fn lists_dogs_with_owners() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    let alice = test.users().insert_owner("alice123").await?;
    let carol = test.users().insert_owner("carol123").await?;
    test.dogs().insert(alice.id, "Max", DogSize::Medium).await?;
    test.dogs().insert(carol.id, "Bella", DogSize::Small).await?;

    let result = list_dogs(State(state)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let dogs: Vec<DogDto> = serde_json::from_slice(&body).unwrap();
    assert_eq!(dogs.len(), 2);
    let max = dogs.iter().find(|d| d.name == "Max").unwrap();
    assert_eq!(max.owner_username, "alice123");

    Ok(())
}

/// Expect 200 with an empty list when no dogs are registered
#[tokio::test]
async fn returns_empty_list_for_no_dogs() -> Result<(), TestError> {
    let (_test, state) = test_setup().await?;

    let result = list_dogs(State(state)).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}
