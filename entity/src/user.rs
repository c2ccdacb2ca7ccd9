use sea_orm::entity::prelude::*;

use crate::enums::UserRole;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Opaque credential hash; rotation is handled outside this service.
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dog::Entity")]
    Dog,
}

impl Related<super::dog::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
