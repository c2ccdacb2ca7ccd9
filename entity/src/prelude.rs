pub use super::dog::Entity as Dog;
pub use super::user::Entity as User;
pub use super::walk_request::Entity as WalkRequest;
pub use super::walk_rating::Entity as WalkRating;
