use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            state: TestAppState { db },
        })
    }

    /// Create database tables from the provided schema statements.
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup {
    // Bare in-memory database with no tables created
    () => {{
        $crate::TestSetup::new().await
    }};
}

#[macro_export]
macro_rules! test_setup_with_walk_tables {
    // Pattern 1: The four marketplace tables
    () => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Dog),
                schema.create_table_from_entity(entity::prelude::WalkRequest),
                schema.create_table_from_entity(entity::prelude::WalkRating),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};

    // Pattern 2: Additional entities on top of the marketplace tables
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Dog),
                schema.create_table_from_entity(entity::prelude::WalkRequest),
                schema.create_table_from_entity(entity::prelude::WalkRating),
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
