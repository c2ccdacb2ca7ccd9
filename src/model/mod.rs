//! Request and response types for the Walkies web API.

pub mod api;
pub mod dog;
pub mod walk;
pub mod walker;
