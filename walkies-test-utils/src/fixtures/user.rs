use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use entity::enums::UserRole;

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn users(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    pub setup: &'a TestSetup,
}

impl UserFixtures<'_> {
    /// Insert a user with the owner role
    pub async fn insert_owner(&self, username: &str) -> Result<entity::user::Model, TestError> {
        self.insert(username, UserRole::Owner).await
    }

    /// Insert a user with the walker role
    pub async fn insert_walker(&self, username: &str) -> Result<entity::user::Model, TestError> {
        self.insert(username, UserRole::Walker).await
    }

    pub async fn insert(
        &self,
        username: &str,
        role: UserRole,
    ) -> Result<entity::user::Model, TestError> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            email: ActiveValue::Set(format!("{username}@example.com")),
            password_hash: ActiveValue::Set("hashed123".to_string()),
            role: ActiveValue::Set(role),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(&self.setup.state.db).await?)
    }
}
