//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements the marketplace
//! rules on top of the repositories: the walk request lifecycle, rating
//! recording, walker reputation aggregation, and the read-only catalog.
//! Services validate preconditions and translate guard failures into the
//! error kinds callers act on.

pub mod catalog;
pub mod rating;
pub mod reputation;
pub mod walk;
