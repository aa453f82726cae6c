//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;
use symposium_core::{Preference, SubmissionStatus};

// ============================================================================
// Conference Responses
// ============================================================================

/// Conference as shown in lists, detail pages and edit forms
#[derive(Debug, Clone, Serialize)]
pub struct ConferenceResponse {
    pub id: String,
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
    pub author_id: String,
    /// e.g. `Jan 1 2020 - Jan 3 2020`
    pub event_dates_display: Option<String>,
    pub is_accepting_proposals: bool,
    /// The requesting user's mark; always `none` for guests
    pub preference: Preference,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Filtered and sorted conference list
#[derive(Debug, Clone, Serialize)]
pub struct ConferenceListResponse {
    pub filter: String,
    pub sort: String,
    pub conferences: Vec<ConferenceResponse>,
}

/// Result of a favorite/dismiss action
#[derive(Debug, Clone, Serialize)]
pub struct PreferenceResponse {
    pub conference_id: String,
    pub preference: Preference,
}

/// One input of the conference form
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FormField {
    pub name: &'static str,
    /// Input type: `text`, `url`, `number` or `datetime`
    pub kind: &'static str,
    pub required: bool,
}

/// Fields accepted by the create endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ConferenceFormResponse {
    pub fields: Vec<FormField>,
}

impl ConferenceFormResponse {
    pub fn create() -> Self {
        const fn field(name: &'static str, kind: &'static str, required: bool) -> FormField {
            FormField {
                name,
                kind,
                required,
            }
        }

        Self {
            fields: vec![
                field("title", "text", true),
                field("description", "text", true),
                field("url", "url", true),
                field("latitude", "number", false),
                field("longitude", "number", false),
                field("starts_at", "datetime", false),
                field("ends_at", "datetime", false),
                field("cfp_starts_at", "datetime", false),
                field("cfp_ends_at", "datetime", false),
            ],
        }
    }
}

// ============================================================================
// Submission Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub id: String,
    pub conference_id: String,
    pub talk_revision_id: String,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
