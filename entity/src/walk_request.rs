use sea_orm::entity::prelude::*;

use crate::enums::WalkStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "walk_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub dog_id: i32,
    pub requested_time: DateTime,
    pub duration_minutes: i32,
    pub location: String,
    pub status: WalkStatus,
    /// Walker assigned on the open -> accepted transition; null until then.
    pub walker_id: Option<i32>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dog::Entity",
        from = "Column::DogId",
        to = "super::dog::Column::Id"
    )]
    Dog,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::WalkerId",
        to = "super::user::Column::Id"
    )]
    Walker,
    #[sea_orm(has_one = "super::walk_rating::Entity")]
    WalkRating,
}

impl Related<super::dog::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dog.def()
    }
}

impl Related<super::walk_rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WalkRating.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
