//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the
//! application. Repositories provide an abstraction layer over database
//! operations, one per marketplace entity: users, dogs, walk requests, and
//! walk ratings. Referential integrity and uniqueness live in the schema;
//! repositories surface constraint failures as [`sea_orm::DbErr`].

pub mod dog;
pub mod user;
pub mod walk_request;
pub mod walk_rating;
