//! HTTP controller endpoints for the Walkies web API.
//!
//! This module contains Axum handlers for the walk request lifecycle, walk
//! ratings, the dog catalog, and walker reputation summaries. Controllers
//! handle HTTP requests, hand validated input to services, and map models to
//! response DTOs. Routes are documented with utoipa for OpenAPI generation.

pub mod dog;
pub mod walk;
pub mod walker;
