//! PostgreSQL implementation of ConferenceRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use symposium_core::entities::Conference;
use symposium_core::traits::{ConferenceRepository, RepoResult};
use symposium_core::value_objects::Snowflake;

use crate::models::ConferenceModel;

use super::error::{conference_not_found, map_db_error};

const CONFERENCE_COLUMNS: &str = r"
    id, title, description, url, latitude, longitude,
    starts_at, ends_at, cfp_starts_at, cfp_ends_at,
    is_approved, is_shared, author_id, created_at, updated_at
";

/// PostgreSQL implementation of ConferenceRepository
#[derive(Clone)]
pub struct PgConferenceRepository {
    pool: PgPool,
}

impl PgConferenceRepository {
    /// Create a new PgConferenceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run a `SELECT` over conferences with the given clause, in creation order
    async fn select_where(&self, clause: &str) -> RepoResult<Vec<Conference>> {
        let sql = format!(
            "SELECT {CONFERENCE_COLUMNS} FROM conferences WHERE {clause} ORDER BY created_at, id"
        );

        let results = sqlx::query_as::<_, ConferenceModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Conference::from).collect())
    }
}

#[async_trait]
impl ConferenceRepository for PgConferenceRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Conference>> {
        let sql = format!("SELECT {CONFERENCE_COLUMNS} FROM conferences WHERE id = $1");

        let result = sqlx::query_as::<_, ConferenceModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Conference::from))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<Conference>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();
        let sql = format!(
            "SELECT {CONFERENCE_COLUMNS} FROM conferences WHERE id = ANY($1) ORDER BY created_at, id"
        );

        let results = sqlx::query_as::<_, ConferenceModel>(&sql)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Conference::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_approved(&self) -> RepoResult<Vec<Conference>> {
        self.select_where("is_approved").await
    }

    #[instrument(skip(self))]
    async fn find_not_shared(&self) -> RepoResult<Vec<Conference>> {
        self.select_where("NOT is_shared").await
    }

    #[instrument(skip(self))]
    async fn find_listable(&self, viewer: Option<Snowflake>) -> RepoResult<Vec<Conference>> {
        let Some(viewer) = viewer else {
            return self.find_approved().await;
        };

        let sql = format!(
            "SELECT {CONFERENCE_COLUMNS} FROM conferences
             WHERE is_approved OR author_id = $1
             ORDER BY created_at, id"
        );

        let results = sqlx::query_as::<_, ConferenceModel>(&sql)
            .bind(viewer.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Conference::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_approved(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM conferences WHERE is_approved")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_not_shared(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM conferences WHERE NOT is_shared")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, conference), fields(conference_id = %conference.id))]
    async fn create(&self, conference: &Conference) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO conferences (
                id, title, description, url, latitude, longitude,
                starts_at, ends_at, cfp_starts_at, cfp_ends_at,
                is_approved, is_shared, author_id, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ",
        )
        .bind(conference.id.into_inner())
        .bind(&conference.title)
        .bind(&conference.description)
        .bind(&conference.url)
        .bind(conference.latitude)
        .bind(conference.longitude)
        .bind(conference.starts_at)
        .bind(conference.ends_at)
        .bind(conference.cfp_starts_at)
        .bind(conference.cfp_ends_at)
        .bind(conference.is_approved)
        .bind(conference.is_shared)
        .bind(conference.author_id.into_inner())
        .bind(conference.created_at)
        .bind(conference.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, conference), fields(conference_id = %conference.id))]
    async fn update(&self, conference: &Conference) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE conferences
            SET title = $2, description = $3, url = $4, latitude = $5, longitude = $6,
                starts_at = $7, ends_at = $8, cfp_starts_at = $9, cfp_ends_at = $10,
                is_approved = $11, is_shared = $12, updated_at = $13
            WHERE id = $1
            ",
        )
        .bind(conference.id.into_inner())
        .bind(&conference.title)
        .bind(&conference.description)
        .bind(&conference.url)
        .bind(conference.latitude)
        .bind(conference.longitude)
        .bind(conference.starts_at)
        .bind(conference.ends_at)
        .bind(conference.cfp_starts_at)
        .bind(conference.cfp_ends_at)
        .bind(conference.is_approved)
        .bind(conference.is_shared)
        .bind(conference.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(conference_not_found(conference.id));
        }

        Ok(())
    }
}
