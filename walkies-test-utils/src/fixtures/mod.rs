//! Test fixture modules for database record creation.
//!
//! Each submodule hangs a fixture handle off [`TestSetup`](crate::TestSetup)
//! for one slice of the marketplace data: users (owners and walkers), dogs,
//! and walks (requests plus their ratings).

pub mod dog;
pub mod user;
pub mod walk;
