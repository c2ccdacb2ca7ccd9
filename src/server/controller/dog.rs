//! Dog catalog endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, dog::DogDto},
    server::{error::Error, model::app::AppState, service::catalog::CatalogService},
};

/// OpenAPI tag for dog catalog routes
pub static DOG_TAG: &str = "dog";

/// List every dog with its owner's username
#[utoipa::path(
    get,
    path = "/api/dogs",
    tag = DOG_TAG,
    responses(
        (status = 200, description = "Success when listing dogs", body = Vec<DogDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_dogs(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let dogs = catalog_service.list_dogs().await?;

    let dog_dtos: Vec<DogDto> = dogs
        .into_iter()
        .map(|d| DogDto {
            dog_id: d.id,
            name: d.name,
            size: d.size,
            owner_username: d.owner_username,
        })
        .collect();

    Ok((StatusCode::OK, Json(dog_dtos)).into_response())
}
