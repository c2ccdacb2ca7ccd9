use sea_orm::{ActiveModelTrait, ActiveValue};

use entity::enums::DogSize;

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn dogs(&self) -> DogFixtures<'_> {
        DogFixtures { setup: self }
    }
}

pub struct DogFixtures<'a> {
    pub setup: &'a TestSetup,
}

impl DogFixtures<'_> {
    /// Insert a medium-sized dog named Max
    pub async fn insert_mock_dog(&self, owner_id: i32) -> Result<entity::dog::Model, TestError> {
        self.insert(owner_id, "Max", DogSize::Medium).await
    }

    pub async fn insert(
        &self,
        owner_id: i32,
        name: &str,
        size: DogSize,
    ) -> Result<entity::dog::Model, TestError> {
        let dog = entity::dog::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            name: ActiveValue::Set(name.to_string()),
            size: ActiveValue::Set(size),
            ..Default::default()
        };

        Ok(dog.insert(&self.setup.state.db).await?)
    }
}
