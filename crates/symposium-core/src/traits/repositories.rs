//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::entities::{Conference, Submission, Talk, TalkRevision, User};
use crate::error::DomainError;
use crate::value_objects::{Preference, PreferenceAction, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Conference Repository
// ============================================================================

#[async_trait]
pub trait ConferenceRepository: Send + Sync {
    /// Find conference by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Conference>>;

    /// Find conferences by ID, in creation order
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<Conference>>;

    /// Approved conferences, in creation order
    async fn find_approved(&self) -> RepoResult<Vec<Conference>>;

    /// Conferences not yet shared, in creation order
    async fn find_not_shared(&self) -> RepoResult<Vec<Conference>>;

    /// Approved conferences plus those authored by `viewer`, in creation order
    async fn find_listable(&self, viewer: Option<Snowflake>) -> RepoResult<Vec<Conference>>;

    /// Number of approved conferences
    async fn count_approved(&self) -> RepoResult<i64>;

    /// Number of conferences not yet shared
    async fn count_not_shared(&self) -> RepoResult<i64>;

    /// Create a new conference
    async fn create(&self, conference: &Conference) -> RepoResult<()>;

    /// Update an existing conference
    async fn update(&self, conference: &Conference) -> RepoResult<()>;
}

// ============================================================================
// Preference Repository
// ============================================================================

#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// The user's mark on one conference
    async fn find(&self, user_id: Snowflake, conference_id: Snowflake) -> RepoResult<Preference>;

    /// All of a user's marks, keyed by conference
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<HashMap<Snowflake, Preference>>;

    /// Conference IDs the user marked with `preference`
    async fn find_conference_ids(
        &self,
        user_id: Snowflake,
        preference: Preference,
    ) -> RepoResult<Vec<Snowflake>>;

    /// Atomically apply `action` to the user's mark and return the new state
    async fn apply(
        &self,
        user_id: Snowflake,
        conference_id: Snowflake,
        action: PreferenceAction,
    ) -> RepoResult<Preference>;
}

// ============================================================================
// Talk Repository
// ============================================================================

#[async_trait]
pub trait TalkRepository: Send + Sync {
    /// Find talk by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Talk>>;

    /// The talk's most recent revision
    async fn current_revision(&self, talk_id: Snowflake) -> RepoResult<Option<TalkRevision>>;

    /// Create a new talk
    async fn create(&self, talk: &Talk) -> RepoResult<()>;

    /// Save a new revision of a talk
    async fn add_revision(&self, revision: &TalkRevision) -> RepoResult<()>;
}

// ============================================================================
// Submission Repository
// ============================================================================

#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Record a submission
    async fn create(&self, submission: &Submission) -> RepoResult<()>;

    /// Submissions to a conference, oldest first
    async fn find_by_conference(&self, conference_id: Snowflake) -> RepoResult<Vec<Submission>>;
}
