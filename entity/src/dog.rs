use sea_orm::entity::prelude::*;

use crate::enums::DogSize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dogs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub size: DogSize,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::walk_request::Entity")]
    WalkRequest,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::walk_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WalkRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
