//! Walker reputation endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, walker::WalkerSummaryDto},
    server::{error::Error, model::app::AppState, service::reputation::ReputationService},
};

/// OpenAPI tag for walker reputation routes
pub static WALKER_TAG: &str = "walker";

/// Summarize the ratings and completed walks of every walker
#[utoipa::path(
    get,
    path = "/api/walkers/summary",
    tag = WALKER_TAG,
    responses(
        (status = 200, description = "Success when summarizing walkers", body = Vec<WalkerSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_walker_summaries(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let reputation_service = ReputationService::new(&state.db);

    let summaries = reputation_service.summarize_walkers().await?;

    let summary_dtos: Vec<WalkerSummaryDto> = summaries
        .into_iter()
        .map(|s| WalkerSummaryDto {
            walker_username: s.walker.username,
            total_ratings: s.total_ratings,
            average_rating: s.average_rating,
            completed_walks: s.completed_walks,
        })
        .collect();

    Ok((StatusCode::OK, Json(summary_dtos)).into_response())
}
