//! PostgreSQL implementation of PreferenceRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use symposium_core::error::DomainError;
use symposium_core::traits::{PreferenceRepository, RepoResult};
use symposium_core::value_objects::{Preference, PreferenceAction, Snowflake};

use crate::mappers::preference_map;
use crate::models::PreferenceModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PreferenceRepository
#[derive(Clone)]
pub struct PgPreferenceRepository {
    pool: PgPool,
}

impl PgPreferenceRepository {
    /// Create a new PgPreferenceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PreferenceRepository for PgPreferenceRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: Snowflake, conference_id: Snowflake) -> RepoResult<Preference> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT preference FROM conference_preferences
            WHERE user_id = $1 AND conference_id = $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(conference_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map_or(Preference::None, |value| Preference::from_db(&value)))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<HashMap<Snowflake, Preference>> {
        let rows = sqlx::query_as::<_, PreferenceModel>(
            r"
            SELECT user_id, conference_id, preference
            FROM conference_preferences
            WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(preference_map(rows))
    }

    #[instrument(skip(self))]
    async fn find_conference_ids(
        &self,
        user_id: Snowflake,
        preference: Preference,
    ) -> RepoResult<Vec<Snowflake>> {
        let Some(value) = preference.as_str() else {
            return Ok(Vec::new());
        };

        let ids = sqlx::query_scalar::<_, i64>(
            r"
            SELECT conference_id FROM conference_preferences
            WHERE user_id = $1 AND preference = $2
            ORDER BY conference_id
            ",
        )
        .bind(user_id.into_inner())
        .bind(value)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids.into_iter().map(Snowflake::new).collect())
    }

    #[instrument(skip(self))]
    async fn apply(
        &self,
        user_id: Snowflake,
        conference_id: Snowflake,
        action: PreferenceAction,
    ) -> RepoResult<Preference> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Serialize all preference changes of one user; a missing preference
        // row can't be locked on its own
        let user_exists = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM users WHERE id = $1 FOR NO KEY UPDATE",
        )
        .bind(user_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if user_exists.is_none() {
            return Err(DomainError::UserNotFound(user_id));
        }

        let current = sqlx::query_scalar::<_, String>(
            r"
            SELECT preference FROM conference_preferences
            WHERE user_id = $1 AND conference_id = $2
            FOR UPDATE
            ",
        )
        .bind(user_id.into_inner())
        .bind(conference_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .map_or(Preference::None, |value| Preference::from_db(&value));

        let next = current.apply(action);
        debug!(?current, ?action, ?next, "Applying preference change");

        match next.as_str() {
            Some(value) => {
                sqlx::query(
                    r"
                    INSERT INTO conference_preferences (user_id, conference_id, preference, updated_at)
                    VALUES ($1, $2, $3, NOW())
                    ON CONFLICT (user_id, conference_id)
                    DO UPDATE SET preference = EXCLUDED.preference, updated_at = NOW()
                    ",
                )
                .bind(user_id.into_inner())
                .bind(conference_id.into_inner())
                .bind(value)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
            None => {
                sqlx::query(
                    r"
                    DELETE FROM conference_preferences
                    WHERE user_id = $1 AND conference_id = $2
                    ",
                )
                .bind(user_id.into_inner())
                .bind(conference_id.into_inner())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(next)
    }
}
