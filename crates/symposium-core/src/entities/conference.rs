//! Conference entity - an event that accepts talk proposals

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::listing::{format_event_dates, is_accepting_proposals};
use crate::value_objects::Snowflake;

/// Conference entity
#[derive(Debug, Clone, PartialEq)]
pub struct Conference {
    pub id: Snowflake,
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
    pub author_id: Snowflake,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conference {
    /// Create a new, unapproved and unshared conference
    pub fn new(
        id: Snowflake,
        author_id: Snowflake,
        title: String,
        description: String,
        url: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description,
            url,
            latitude: None,
            longitude: None,
            starts_at: None,
            ends_at: None,
            cfp_starts_at: None,
            cfp_ends_at: None,
            is_approved: false,
            is_shared: false,
            author_id,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_owner(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }

    /// Whether the call for papers is open at `now`
    pub fn is_currently_accepting_proposals(&self, now: DateTime<Utc>) -> bool {
        is_accepting_proposals(self, now)
    }

    /// Human-readable event date or date range, if the start date is known
    pub fn event_dates_display(&self) -> Option<String> {
        format_event_dates(self.starts_at, self.ends_at)
    }

    /// Visible to anyone, or only to its owner while awaiting approval
    pub fn is_visible_to(&self, viewer: Option<Snowflake>) -> bool {
        self.is_approved || viewer.is_some_and(|id| self.is_owner(id))
    }

    /// Reject end dates that precede their start date
    pub fn check_schedule(&self) -> Result<(), DomainError> {
        if let (Some(starts), Some(ends)) = (self.starts_at, self.ends_at) {
            if ends < starts {
                return Err(DomainError::EventEndsBeforeStart);
            }
        }
        if let (Some(starts), Some(ends)) = (self.cfp_starts_at, self.cfp_ends_at) {
            if ends < starts {
                return Err(DomainError::CfpEndsBeforeStart);
            }
        }
        Ok(())
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
