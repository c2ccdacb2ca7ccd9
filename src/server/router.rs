//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with
//! their OpenAPI specifications, and Swagger UI is configured to provide
//! interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/walks` - Post a new walk request
/// - `GET  /api/walks` - List walk requests, optionally filtered by status
/// - `POST /api/walks/{request_id}/accept` - Accept an open request
/// - `POST /api/walks/{request_id}/complete` - Complete an accepted request
/// - `POST /api/walks/{request_id}/cancel` - Cancel an unfinished request
/// - `POST /api/walks/{request_id}/rating` - Rate a completed walk
/// - `GET  /api/dogs` - List dogs with their owners
/// - `GET  /api/walkers/summary` - Walker reputation summaries
///
/// # Returns
/// An Axum `Router<AppState>` with all routes registered and Swagger UI
/// served at `/api/docs`, ready to be merged into the application router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Walkies", description = "Walkies API"), tags(
        (name = controller::walk::WALK_TAG, description = "Walk request lifecycle and rating API routes"),
        (name = controller::dog::DOG_TAG, description = "Dog catalog API routes"),
        (name = controller::walker::WALKER_TAG, description = "Walker reputation API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::walk::create_walk_request,
            controller::walk::list_walk_requests
        ))
        .routes(routes!(controller::walk::accept_walk_request))
        .routes(routes!(controller::walk::complete_walk_request))
        .routes(routes!(controller::walk::cancel_walk_request))
        .routes(routes!(controller::walk::rate_walk))
        .routes(routes!(controller::dog::list_dogs))
        .routes(routes!(controller::walker::get_walker_summaries))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
