//! User entity <-> model mapper

use symposium_core::entities::User;
use symposium_core::value_objects::Snowflake;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            name: model.name,
            email: model.email,
            created_at: model.created_at,
        }
    }
}
