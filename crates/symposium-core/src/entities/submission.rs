//! Submission entity - a talk revision proposed to a conference

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Review state of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Submitted,
    Accepted,
    Rejected,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "submitted" => Some(Self::Submitted),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Submission entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: Snowflake,
    pub conference_id: Snowflake,
    pub talk_revision_id: Snowflake,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
}

impl Submission {
    /// A freshly submitted proposal
    pub fn submitted(id: Snowflake, conference_id: Snowflake, talk_revision_id: Snowflake) -> Self {
        Self {
            id,
            conference_id,
            talk_revision_id,
            status: SubmissionStatus::Submitted,
            created_at: Utc::now(),
        }
    }
}
