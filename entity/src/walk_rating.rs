use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "walk_ratings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// One rating per walk request, enforced by a unique constraint.
    #[sea_orm(unique)]
    pub request_id: i32,
    pub walker_id: i32,
    pub owner_id: i32,
    pub rating: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
    pub rated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::walk_request::Entity",
        from = "Column::RequestId",
        to = "super::walk_request::Column::Id"
    )]
    WalkRequest,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::WalkerId",
        to = "super::user::Column::Id"
    )]
    Walker,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id"
    )]
    Owner,
}

impl Related<super::walk_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WalkRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
