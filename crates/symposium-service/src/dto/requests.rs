//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use symposium_core::Snowflake;
use validator::{Validate, ValidationError};

// ============================================================================
// Conference Requests
// ============================================================================

/// Query string of the conference list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConferenceListQuery {
    pub filter: Option<String>,
    pub sort: Option<String>,
}

/// Create conference request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateConferenceRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Description must be 1-10000 characters"))]
    pub description: String,

    #[validate(url(message = "URL must be a valid URL"))]
    pub url: String,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: Option<f64>,

    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub cfp_starts_at: Option<DateTime<Utc>>,
    pub cfp_ends_at: Option<DateTime<Utc>>,
}

/// Partial conference update
///
/// Absent fields are left unchanged. For the optional fields an explicit
/// `null` clears the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_update_coordinates"))]
pub struct UpdateConferenceRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 10000, message = "Description must be 1-10000 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "URL must be a valid URL"))]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub latitude: Option<Option<f64>>,

    #[serde(default, deserialize_with = "nullable")]
    pub longitude: Option<Option<f64>>,

    #[serde(default, deserialize_with = "nullable")]
    pub starts_at: Option<Option<DateTime<Utc>>>,

    #[serde(default, deserialize_with = "nullable")]
    pub ends_at: Option<Option<DateTime<Utc>>>,

    #[serde(default, deserialize_with = "nullable")]
    pub cfp_starts_at: Option<Option<DateTime<Utc>>>,

    #[serde(default, deserialize_with = "nullable")]
    pub cfp_ends_at: Option<Option<DateTime<Utc>>>,
}

/// Tell a present `null` (`Some(None)`) apart from an absent field (`None`)
fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn coordinate_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

fn validate_update_coordinates(request: &UpdateConferenceRequest) -> Result<(), ValidationError> {
    if let Some(Some(latitude)) = request.latitude {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(coordinate_error(
                "latitude",
                "Latitude must be between -90 and 90",
            ));
        }
    }

    if let Some(Some(longitude)) = request.longitude {
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(coordinate_error(
                "longitude",
                "Longitude must be between -180 and 180",
            ));
        }
    }

    Ok(())
}

// ============================================================================
// Submission Requests
// ============================================================================

/// Submit a talk to a conference
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSubmissionRequest {
    pub conference_id: Snowflake,
    pub talk_id: Snowflake,
}
