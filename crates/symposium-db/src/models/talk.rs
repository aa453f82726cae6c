//! Talk and talk revision database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for talks table
#[derive(Debug, Clone, FromRow)]
pub struct TalkModel {
    pub id: i64,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Database model for talk_revisions table
#[derive(Debug, Clone, FromRow)]
pub struct TalkRevisionModel {
    pub id: i64,
    pub talk_id: i64,
    pub title: String,
    pub kind: String,
    pub length: i32,
    pub level: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
