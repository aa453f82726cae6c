//! Conference database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for conferences table
#[derive(Debug, Clone, FromRow)]
pub struct ConferenceModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub cfp_starts_at: Option<DateTime<Utc>>,
    pub cfp_ends_at: Option<DateTime<Utc>>,
    pub is_approved: bool,
    pub is_shared: bool,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
