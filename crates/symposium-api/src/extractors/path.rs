//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::Deserialize;
use symposium_core::Snowflake;

use crate::response::ApiError;

/// `/conferences/:conference_id` routes
#[derive(Debug, Clone, Copy)]
pub struct ConferenceIdPath(pub Snowflake);

#[derive(Debug, Deserialize)]
struct RawConferenceIdPath {
    conference_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for ConferenceIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<RawConferenceIdPath>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        raw.conference_id
            .parse()
            .map(ConferenceIdPath)
            .map_err(|_| ApiError::invalid_path("Invalid conference_id format"))
    }
}
