pub use sea_orm_migration::prelude::*;

mod m20250601_000001_users;
mod m20250601_000002_dogs;
mod m20250601_000003_walk_requests;
mod m20250601_000004_walk_ratings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_users::Migration),
            Box::new(m20250601_000002_dogs::Migration),
            Box::new(m20250601_000003_walk_requests::Migration),
            Box::new(m20250601_000004_walk_ratings::Migration),
        ]
    }
}
