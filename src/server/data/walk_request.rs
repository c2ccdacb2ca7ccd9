use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QuerySelect,
    RelationTrait,
};

use entity::enums::{DogSize, WalkStatus};

/// A walk request row projected with dog and owner details for listings.
#[derive(Debug, FromQueryResult)]
pub struct WalkRequestDetails {
    /// The request's ID
    pub id: i32,
    /// Name of the dog to be walked
    pub dog_name: String,
    /// Size class of the dog
    pub size: DogSize,
    /// When the walk should take place
    pub requested_time: NaiveDateTime,
    /// How long the walk should last
    pub duration_minutes: i32,
    /// Where the walk starts
    pub location: String,
    /// Current lifecycle status
    pub status: WalkStatus,
    /// Username of the dog's owner
    pub owner_username: String,
}

/// Repository for walk request rows.
///
/// Status changes go through [`claim`](WalkRequestRepository::claim) and
/// [`transition`](WalkRequestRepository::transition), which guard the update
/// on the row still holding an expected status. A zero row count means the
/// guard did not match; callers decide what that means for them.
pub struct WalkRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WalkRequestRepository<'a> {
    /// Creates a new instance of [`WalkRequestRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new open walk request with no walker assigned
    pub async fn create(
        &self,
        dog_id: i32,
        requested_time: NaiveDateTime,
        duration_minutes: i32,
        location: &str,
    ) -> Result<entity::walk_request::Model, DbErr> {
        let request = entity::walk_request::ActiveModel {
            dog_id: ActiveValue::Set(dog_id),
            requested_time: ActiveValue::Set(requested_time),
            duration_minutes: ActiveValue::Set(duration_minutes),
            location: ActiveValue::Set(location.to_string()),
            status: ActiveValue::Set(WalkStatus::Open),
            walker_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        request.insert(self.db).await
    }

    /// Gets a walk request by ID
    pub async fn get(
        &self,
        request_id: i32,
    ) -> Result<Option<entity::walk_request::Model>, DbErr> {
        entity::prelude::WalkRequest::find_by_id(request_id)
            .one(self.db)
            .await
    }

    /// Gets a walk request together with the dog it was posted for
    pub async fn get_with_dog(
        &self,
        request_id: i32,
    ) -> Result<Option<(entity::walk_request::Model, Option<entity::dog::Model>)>, DbErr> {
        entity::prelude::WalkRequest::find_by_id(request_id)
            .find_also_related(entity::dog::Entity)
            .one(self.db)
            .await
    }

    /// Lists walk requests joined with dog name/size and owner username,
    /// optionally narrowed to a single status
    pub async fn get_many_with_details(
        &self,
        status: Option<WalkStatus>,
    ) -> Result<Vec<WalkRequestDetails>, DbErr> {
        let mut query = entity::prelude::WalkRequest::find()
            .join(JoinType::InnerJoin, entity::walk_request::Relation::Dog.def())
            .join(JoinType::InnerJoin, entity::dog::Relation::User.def())
            .select_only()
            .column(entity::walk_request::Column::Id)
            .column_as(entity::dog::Column::Name, "dog_name")
            .column(entity::dog::Column::Size)
            .column(entity::walk_request::Column::RequestedTime)
            .column(entity::walk_request::Column::DurationMinutes)
            .column(entity::walk_request::Column::Location)
            .column(entity::walk_request::Column::Status)
            .column_as(entity::user::Column::Username, "owner_username");

        if let Some(status) = status {
            query = query.filter(entity::walk_request::Column::Status.eq(status));
        }

        query.into_model::<WalkRequestDetails>().all(self.db).await
    }

    /// Atomically accepts an open request for the provided walker.
    ///
    /// The update writes the accepted status and the walker assignment in a
    /// single statement guarded on `status = open`, so exactly one of any
    /// number of racing callers can win. Returns the number of rows updated:
    /// 1 for the winner, 0 when the request is missing or no longer open.
    pub async fn claim(&self, request_id: i32, walker_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::WalkRequest::update_many()
            .col_expr(
                entity::walk_request::Column::Status,
                Expr::value(WalkStatus::Accepted),
            )
            .col_expr(
                entity::walk_request::Column::WalkerId,
                Expr::value(walker_id),
            )
            .filter(entity::walk_request::Column::Id.eq(request_id))
            .filter(entity::walk_request::Column::Status.eq(WalkStatus::Open))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Moves a request to `to` if it currently holds one of the `from`
    /// statuses. Returns the number of rows updated; 0 when the request is
    /// missing or holds a status outside `from`.
    pub async fn transition(
        &self,
        request_id: i32,
        from: &[WalkStatus],
        to: WalkStatus,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::WalkRequest::update_many()
            .col_expr(entity::walk_request::Column::Status, Expr::value(to))
            .filter(entity::walk_request::Column::Id.eq(request_id))
            .filter(entity::walk_request::Column::Status.is_in(from.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts the walker's completed requests that have received a rating.
    /// Completed-but-unrated walks are not counted.
    pub async fn count_rated_completions(&self, walker_id: i32) -> Result<u64, DbErr> {
        entity::prelude::WalkRequest::find()
            .join(
                JoinType::InnerJoin,
                entity::walk_request::Relation::WalkRating.def(),
            )
            .filter(entity::walk_request::Column::Status.eq(WalkStatus::Completed))
            .filter(entity::walk_request::Column::WalkerId.eq(walker_id))
            .count(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use walkies_test_utils::prelude::*;

    async fn setup_open_request(
    ) -> Result<(TestSetup, entity::walk_request::Model, entity::user::Model), TestError> {
        let test = test_setup_with_walk_tables!()?;
        let owner = test.users().insert_owner("alice123").await?;
        let walker = test.users().insert_walker("bobwalker").await?;
        let dog = test.dogs().insert_mock_dog(owner.id).await?;
        let request = test.walks().insert_open(dog.id).await?;

        Ok((test, request, walker))
    }

    mod create {
        use entity::enums::WalkStatus;
        use walkies_test_utils::prelude::*;

        use crate::server::data::walk_request::WalkRequestRepository;

        /// Expect a fresh request to be open with no walker assigned
        #[tokio::test]
        async fn creates_open_request() -> Result<(), TestError> {
            let test = test_setup_with_walk_tables!()?;
            let owner = test.users().insert_owner("alice123").await?;
            let dog = test.dogs().insert_mock_dog(owner.id).await?;

            let walk_request_repository = WalkRequestRepository::new(&test.state.db);
            let result = walk_request_repository
                .create(dog.id, test.walks().sample_time(), 30, "Parklands")
                .await;

            assert!(result.is_ok(), "Error: {:?}", result);
            let request = result.unwrap();
            assert_eq!(request.status, WalkStatus::Open);
            assert_eq!(request.walker_id, None);
            assert_eq!(request.location, "Parklands");

            Ok(())
        }

        /// Expect Error when the dog does not exist in the database
        #[tokio::test]
        async fn fails_for_nonexistent_dog() -> Result<(), TestError> {
            let test = test_setup_with_walk_tables!()?;

            let nonexistent_dog_id = 1;
            let walk_request_repository = WalkRequestRepository::new(&test.state.db);
            let result = walk_request_repository
                .create(nonexistent_dog_id, test.walks().sample_time(), 30, "Parklands")
                .await;

            assert!(result.is_err(), "Expected error, instead got: {:?}", result);

            Ok(())
        }
    }

    mod claim {
        use entity::enums::WalkStatus;
        use walkies_test_utils::prelude::*;

        use crate::server::data::walk_request::{tests::setup_open_request, WalkRequestRepository};

        /// Expect the first claim to update the row and assign the walker
        #[tokio::test]
        async fn claims_open_request() -> Result<(), TestError> {
            let (test, request, walker) = setup_open_request().await?;

            let walk_request_repository = WalkRequestRepository::new(&test.state.db);
            let rows = walk_request_repository.claim(request.id, walker.id).await?;

            assert_eq!(rows, 1);
            let updated = walk_request_repository.get(request.id).await?.unwrap();
            assert_eq!(updated.status, WalkStatus::Accepted);
            assert_eq!(updated.walker_id, Some(walker.id));

            Ok(())
        }

        /// Expect a second claim to match no rows and leave the winner assigned
        #[tokio::test]
        async fn second_claim_updates_nothing() -> Result<(), TestError> {
            let (test, request, walker) = setup_open_request().await?;
            let rival = test.users().insert_walker("danwalker").await?;

            let walk_request_repository = WalkRequestRepository::new(&test.state.db);
            let first = walk_request_repository.claim(request.id, walker.id).await?;
            let second = walk_request_repository.claim(request.id, rival.id).await?;

            assert_eq!(first, 1);
            assert_eq!(second, 0);
            let updated = walk_request_repository.get(request.id).await?.unwrap();
            assert_eq!(updated.walker_id, Some(walker.id));

            Ok(())
        }

        /// Expect zero rows for a request that does not exist
        #[tokio::test]
        async fn returns_zero_for_nonexistent_request() -> Result<(), TestError> {
            let test = test_setup_with_walk_tables!()?;
            let walker = test.users().insert_walker("bobwalker").await?;

            let nonexistent_request_id = 1;
            let walk_request_repository = WalkRequestRepository::new(&test.state.db);
            let rows = walk_request_repository
                .claim(nonexistent_request_id, walker.id)
                .await?;

            assert_eq!(rows, 0);

            Ok(())
        }
    }

    mod transition {
        use entity::enums::WalkStatus;
        use walkies_test_utils::prelude::*;

        use crate::server::data::walk_request::WalkRequestRepository;

        /// Expect an accepted request to move to completed
        #[tokio::test]
        async fn completes_accepted_request() -> Result<(), TestError> {
            let test = test_setup_with_walk_tables!()?;
            let owner = test.users().insert_owner("alice123").await?;
            let walker = test.users().insert_walker("bobwalker").await?;
            let dog = test.dogs().insert_mock_dog(owner.id).await?;
            let request = test.walks().insert_accepted(dog.id, walker.id).await?;

            let walk_request_repository = WalkRequestRepository::new(&test.state.db);
            let rows = walk_request_repository
                .transition(request.id, &[WalkStatus::Accepted], WalkStatus::Completed)
                .await?;

            assert_eq!(rows, 1);
            let updated = walk_request_repository.get(request.id).await?.unwrap();
            assert_eq!(updated.status, WalkStatus::Completed);

            Ok(())
        }

        /// Expect zero rows when the guard status does not match
        #[tokio::test]
        async fn guards_against_wrong_status() -> Result<(), TestError> {
            let test = test_setup_with_walk_tables!()?;
            let owner = test.users().insert_owner("alice123").await?;
            let dog = test.dogs().insert_mock_dog(owner.id).await?;
            let request = test.walks().insert_open(dog.id).await?;

            let walk_request_repository = WalkRequestRepository::new(&test.state.db);
            let rows = walk_request_repository
                .transition(request.id, &[WalkStatus::Accepted], WalkStatus::Completed)
                .await?;

            assert_eq!(rows, 0);
            let unchanged = walk_request_repository.get(request.id).await?.unwrap();
            assert_eq!(unchanged.status, WalkStatus::Open);

            Ok(())
        }
    }

    mod count_rated_completions {
        use walkies_test_utils::prelude::*;

        use crate::server::data::walk_request::WalkRequestRepository;

        /// Expect only completed walks with a rating to be counted
        #[tokio::test]
        async fn excludes_unrated_completions() -> Result<(), TestError> {
            let test = test_setup_with_walk_tables!()?;
            let owner = test.users().insert_owner("alice123").await?;
            let walker = test.users().insert_walker("bobwalker").await?;
            let dog = test.dogs().insert_mock_dog(owner.id).await?;

            let rated = test.walks().insert_completed(dog.id, walker.id).await?;
            test.walks()
                .insert_rating(rated.id, walker.id, owner.id, 5)
                .await?;
            // Completed but never rated; must not be counted
            test.walks().insert_completed(dog.id, walker.id).await?;

            let walk_request_repository = WalkRequestRepository::new(&test.state.db);
            let count = walk_request_repository
                .count_rated_completions(walker.id)
                .await?;

            assert_eq!(count, 1);

            Ok(())
        }
    }
}
