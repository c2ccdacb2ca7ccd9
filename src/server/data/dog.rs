use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    JoinType, QuerySelect, RelationTrait,
};

use entity::enums::DogSize;

/// A dog row projected together with its owner's username.
#[derive(Debug, FromQueryResult)]
pub struct DogWithOwner {
    /// The dog's ID
    pub id: i32,
    /// The dog's name
    pub name: String,
    /// The dog's size class
    pub size: DogSize,
    /// Username of the owning user
    pub owner_username: String,
}

/// Repository for dog rows.
pub struct DogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DogRepository<'a> {
    /// Creates a new instance of [`DogRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new dog owned by the provided user
    pub async fn create(
        &self,
        owner_id: i32,
        name: &str,
        size: DogSize,
    ) -> Result<entity::dog::Model, DbErr> {
        let dog = entity::dog::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            name: ActiveValue::Set(name.to_string()),
            size: ActiveValue::Set(size),
            ..Default::default()
        };

        dog.insert(self.db).await
    }

    /// Gets a dog by ID
    pub async fn get(&self, dog_id: i32) -> Result<Option<entity::dog::Model>, DbErr> {
        entity::prelude::Dog::find_by_id(dog_id).one(self.db).await
    }

    /// Gets every dog joined with its owner's username
    pub async fn get_all_with_owner(&self) -> Result<Vec<DogWithOwner>, DbErr> {
        entity::prelude::Dog::find()
            .join(JoinType::InnerJoin, entity::dog::Relation::User.def())
            .select_only()
            .column(entity::dog::Column::Id)
            .column(entity::dog::Column::Name)
            .column(entity::dog::Column::Size)
            .column_as(entity::user::Column::Username, "owner_username")
            .into_model::<DogWithOwner>()
            .all(self.db)
            .await
    }
}
