//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use chrono::{DateTime, Utc};
use symposium_core::entities::{Conference, Submission};
use symposium_core::Preference;

use super::responses::{ConferenceResponse, SubmissionResponse};

// ============================================================================
// Conference Mappers
// ============================================================================

/// A conference seen by a particular viewer at a particular time
#[derive(Debug, Clone, Copy)]
pub struct ConferenceView<'a> {
    pub conference: &'a Conference,
    pub preference: Preference,
    pub now: DateTime<Utc>,
}

impl<'a> ConferenceView<'a> {
    pub fn new(conference: &'a Conference, preference: Preference, now: DateTime<Utc>) -> Self {
        Self {
            conference,
            preference,
            now,
        }
    }
}

impl From<ConferenceView<'_>> for ConferenceResponse {
    fn from(view: ConferenceView<'_>) -> Self {
        let conference = view.conference;
        Self {
            id: conference.id.to_string(),
            title: conference.title.clone(),
            description: conference.description.clone(),
            url: conference.url.clone(),
            latitude: conference.latitude,
            longitude: conference.longitude,
            starts_at: conference.starts_at,
            ends_at: conference.ends_at,
            cfp_starts_at: conference.cfp_starts_at,
            cfp_ends_at: conference.cfp_ends_at,
            is_approved: conference.is_approved,
            is_shared: conference.is_shared,
            author_id: conference.author_id.to_string(),
            event_dates_display: conference.event_dates_display(),
            is_accepting_proposals: conference.is_currently_accepting_proposals(view.now),
            preference: view.preference,
            created_at: conference.created_at,
            updated_at: conference.updated_at,
        }
    }
}

impl From<&Conference> for ConferenceResponse {
    fn from(conference: &Conference) -> Self {
        Self::from(ConferenceView::new(conference, Preference::None, Utc::now()))
    }
}

// ============================================================================
// Submission Mappers
// ============================================================================

impl From<&Submission> for SubmissionResponse {
    fn from(submission: &Submission) -> Self {
        Self {
            id: submission.id.to_string(),
            conference_id: submission.conference_id.to_string(),
            talk_revision_id: submission.talk_revision_id.to_string(),
            status: submission.status,
            created_at: submission.created_at,
        }
    }
}

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        Self::from(&submission)
    }
}
