//! User entity - someone who submits talks and curates conference lists

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User account as seen by this service
///
/// Credentials live with the identity provider; only the profile is kept here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Snowflake, name: String, email: String) -> Self {
        Self {
            id,
            name,
            email,
            created_at: Utc::now(),
        }
    }
}
