use serde::{Deserialize, Serialize};

use entity::enums::DogSize;

/// A dog listed in the catalog together with its owner's username
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DogDto {
    pub dog_id: i32,
    pub name: String,
    #[schema(value_type = String)]
    pub size: DogSize,
    pub owner_username: String,
}
