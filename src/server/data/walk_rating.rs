use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Repository for walk rating rows. The schema holds a unique constraint on
/// `request_id`; inserting a second rating for a request fails with a
/// constraint [`DbErr`].
pub struct WalkRatingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WalkRatingRepository<'a> {
    /// Creates a new instance of [`WalkRatingRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new rating for a walk request
    pub async fn create(
        &self,
        request_id: i32,
        walker_id: i32,
        owner_id: i32,
        rating: i32,
        comments: Option<String>,
    ) -> Result<entity::walk_rating::Model, DbErr> {
        let rating = entity::walk_rating::ActiveModel {
            request_id: ActiveValue::Set(request_id),
            walker_id: ActiveValue::Set(walker_id),
            owner_id: ActiveValue::Set(owner_id),
            rating: ActiveValue::Set(rating),
            comments: ActiveValue::Set(comments),
            rated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        rating.insert(self.db).await
    }

    /// Gets the rating recorded for a walk request, if any
    pub async fn get_by_request_id(
        &self,
        request_id: i32,
    ) -> Result<Option<entity::walk_rating::Model>, DbErr> {
        entity::prelude::WalkRating::find()
            .filter(entity::walk_rating::Column::RequestId.eq(request_id))
            .one(self.db)
            .await
    }

    /// Gets every rating received by the provided walker
    pub async fn get_many_by_walker_id(
        &self,
        walker_id: i32,
    ) -> Result<Vec<entity::walk_rating::Model>, DbErr> {
        entity::prelude::WalkRating::find()
            .filter(entity::walk_rating::Column::WalkerId.eq(walker_id))
            .all(self.db)
            .await
    }
}
