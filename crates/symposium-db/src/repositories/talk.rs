//! PostgreSQL implementation of TalkRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use symposium_core::entities::{Talk, TalkRevision};
use symposium_core::traits::{RepoResult, TalkRepository};
use symposium_core::value_objects::Snowflake;

use crate::models::{TalkModel, TalkRevisionModel};

use super::error::map_db_error;

/// PostgreSQL implementation of TalkRepository
#[derive(Clone)]
pub struct PgTalkRepository {
    pool: PgPool,
}

impl PgTalkRepository {
    /// Create a new PgTalkRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TalkRepository for PgTalkRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Talk>> {
        let result = sqlx::query_as::<_, TalkModel>(
            "SELECT id, author_id, created_at FROM talks WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Talk::from))
    }

    #[instrument(skip(self))]
    async fn current_revision(&self, talk_id: Snowflake) -> RepoResult<Option<TalkRevision>> {
        let result = sqlx::query_as::<_, TalkRevisionModel>(
            r"
            SELECT id, talk_id, title, kind, length, level, description, created_at
            FROM talk_revisions
            WHERE talk_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            ",
        )
        .bind(talk_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(TalkRevision::from))
    }

    #[instrument(skip(self, talk), fields(talk_id = %talk.id))]
    async fn create(&self, talk: &Talk) -> RepoResult<()> {
        sqlx::query("INSERT INTO talks (id, author_id, created_at) VALUES ($1, $2, $3)")
            .bind(talk.id.into_inner())
            .bind(talk.author_id.into_inner())
            .bind(talk.created_at)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, revision), fields(talk_id = %revision.talk_id))]
    async fn add_revision(&self, revision: &TalkRevision) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO talk_revisions (id, talk_id, title, kind, length, level, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(revision.id.into_inner())
        .bind(revision.talk_id.into_inner())
        .bind(&revision.title)
        .bind(&revision.kind)
        .bind(revision.length)
        .bind(&revision.level)
        .bind(&revision.description)
        .bind(revision.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
