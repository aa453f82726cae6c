//! Conference preference database model

use sqlx::FromRow;

/// Database model for conference_preferences table
#[derive(Debug, Clone, FromRow)]
pub struct PreferenceModel {
    pub user_id: i64,
    pub conference_id: i64,
    /// Either `favorite` or `dismissed`
    pub preference: String,
}
