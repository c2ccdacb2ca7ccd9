use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use entity::enums::UserRole;

/// Repository for user rows. Usernames and emails are unique at the schema
/// level; a duplicate insert surfaces as a constraint [`DbErr`].
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user with the provided role
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
        role: UserRole,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            role: ActiveValue::Set(role),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets a user by ID
    pub async fn get(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Gets all users holding the provided role
    pub async fn get_many_by_role(&self, role: UserRole) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role))
            .all(self.db)
            .await
    }
}
