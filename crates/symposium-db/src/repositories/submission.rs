//! PostgreSQL implementation of SubmissionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use symposium_core::entities::Submission;
use symposium_core::traits::{RepoResult, SubmissionRepository};
use symposium_core::value_objects::Snowflake;

use crate::models::SubmissionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SubmissionRepository
#[derive(Clone)]
pub struct PgSubmissionRepository {
    pool: PgPool,
}

impl PgSubmissionRepository {
    /// Create a new PgSubmissionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionRepository for PgSubmissionRepository {
    #[instrument(skip(self, submission), fields(submission_id = %submission.id))]
    async fn create(&self, submission: &Submission) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO submissions (id, conference_id, talk_revision_id, status, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(submission.id.into_inner())
        .bind(submission.conference_id.into_inner())
        .bind(submission.talk_revision_id.into_inner())
        .bind(submission.status.as_str())
        .bind(submission.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_conference(&self, conference_id: Snowflake) -> RepoResult<Vec<Submission>> {
        let rows = sqlx::query_as::<_, SubmissionModel>(
            r"
            SELECT id, conference_id, talk_revision_id, status, created_at
            FROM submissions
            WHERE conference_id = $1
            ORDER BY created_at, id
            ",
        )
        .bind(conference_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Submission::try_from).collect()
    }
}
