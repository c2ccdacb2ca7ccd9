use chrono::{NaiveDate, NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};

use entity::enums::WalkStatus;

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn walks(&self) -> WalkFixtures<'_> {
        WalkFixtures { setup: self }
    }
}

pub struct WalkFixtures<'a> {
    pub setup: &'a TestSetup,
}

impl WalkFixtures<'_> {
    /// The requested time used by the standard sample request
    pub fn sample_time(&self) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    /// Insert an open 30-minute walk request at Parklands
    pub async fn insert_open(&self, dog_id: i32) -> Result<entity::walk_request::Model, TestError> {
        self.insert(dog_id, WalkStatus::Open, None).await
    }

    /// Insert a request already accepted by the provided walker
    pub async fn insert_accepted(
        &self,
        dog_id: i32,
        walker_id: i32,
    ) -> Result<entity::walk_request::Model, TestError> {
        self.insert(dog_id, WalkStatus::Accepted, Some(walker_id))
            .await
    }

    /// Insert a request completed by the provided walker
    pub async fn insert_completed(
        &self,
        dog_id: i32,
        walker_id: i32,
    ) -> Result<entity::walk_request::Model, TestError> {
        self.insert(dog_id, WalkStatus::Completed, Some(walker_id))
            .await
    }

    pub async fn insert(
        &self,
        dog_id: i32,
        status: WalkStatus,
        walker_id: Option<i32>,
    ) -> Result<entity::walk_request::Model, TestError> {
        let request = entity::walk_request::ActiveModel {
            dog_id: ActiveValue::Set(dog_id),
            requested_time: ActiveValue::Set(self.sample_time()),
            duration_minutes: ActiveValue::Set(30),
            location: ActiveValue::Set("Parklands".to_string()),
            status: ActiveValue::Set(status),
            walker_id: ActiveValue::Set(walker_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(request.insert(&self.setup.state.db).await?)
    }

    /// Insert a rating row for a completed request
    pub async fn insert_rating(
        &self,
        request_id: i32,
        walker_id: i32,
        owner_id: i32,
        rating: i32,
    ) -> Result<entity::walk_rating::Model, TestError> {
        let rating = entity::walk_rating::ActiveModel {
            request_id: ActiveValue::Set(request_id),
            walker_id: ActiveValue::Set(walker_id),
            owner_id: ActiveValue::Set(owner_id),
            rating: ActiveValue::Set(rating),
            comments: ActiveValue::Set(None),
            rated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(rating.insert(&self.setup.state.db).await?)
    }
}
