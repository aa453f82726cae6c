//! Submission database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for submissions table
#[derive(Debug, Clone, FromRow)]
pub struct SubmissionModel {
    pub id: i64,
    pub conference_id: i64,
    pub talk_revision_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
