//! Read-only catalog queries.
//!
//! Listings join dogs and walk requests with their owner's identity; nothing
//! here mutates state, each call returns the current snapshot.

use sea_orm::DatabaseConnection;

use entity::enums::WalkStatus;

use crate::server::{
    data::{
        dog::{DogRepository, DogWithOwner},
        walk_request::{WalkRequestDetails, WalkRequestRepository},
    },
    error::Error,
};

/// Read-only listings of dogs and walk requests.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every dog with its owner's username
    pub async fn list_dogs(&self) -> Result<Vec<DogWithOwner>, Error> {
        let dog_repository = DogRepository::new(self.db);
        let dogs = dog_repository.get_all_with_owner().await?;

        Ok(dogs)
    }

    /// Lists walk requests with dog and owner details, optionally narrowed
    /// to a single status
    pub async fn list_requests(
        &self,
        status: Option<WalkStatus>,
    ) -> Result<Vec<WalkRequestDetails>, Error> {
        let walk_request_repository = WalkRequestRepository::new(self.db);
        let requests = walk_request_repository
            .get_many_with_details(status)
            .await?;

        Ok(requests)
    }
}
