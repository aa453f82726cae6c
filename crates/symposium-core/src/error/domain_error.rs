//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Conference not found: {0}")]
    ConferenceNotFound(Snowflake),

    #[error("Talk not found: {0}")]
    TalkNotFound(Snowflake),

    #[error("Talk {0} has no revisions")]
    TalkRevisionNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Event ends before it starts")]
    EventEndsBeforeStart,

    #[error("Call for papers closes before it opens")]
    CfpEndsBeforeStart,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not conference owner")]
    NotConferenceOwner,

    #[error("Not talk author")]
    NotTalkAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ConferenceNotFound(_) => "UNKNOWN_CONFERENCE",
            Self::TalkNotFound(_) => "UNKNOWN_TALK",
            Self::TalkRevisionNotFound(_) => "UNKNOWN_TALK_REVISION",

            // Validation
            Self::EventEndsBeforeStart => "EVENT_ENDS_BEFORE_START",
            Self::CfpEndsBeforeStart => "CFP_ENDS_BEFORE_START",

            // Authorization
            Self::NotConferenceOwner => "NOT_CONFERENCE_OWNER",
            Self::NotTalkAuthor => "NOT_TALK_AUTHOR",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ConferenceNotFound(_)
                | Self::TalkNotFound(_)
                | Self::TalkRevisionNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EventEndsBeforeStart | Self::CfpEndsBeforeStart)
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotConferenceOwner | Self::NotTalkAuthor)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists)
    }
}
