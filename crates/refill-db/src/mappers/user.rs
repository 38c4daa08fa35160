//! User entity <-> model mapper

use refill_core::entities::User;
use refill_core::value_objects::Id;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Id::new(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
        }
    }
}
