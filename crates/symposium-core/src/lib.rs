//! # symposium-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! conference listing rules (CFP window, filtering, sorting, date display).
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod listing;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Conference, Submission, SubmissionStatus, Talk, TalkRevision, User,
};
pub use error::DomainError;
pub use listing::{
    format_event_dates, is_accepting_proposals, ConferenceFilter, ConferenceSort, Viewer,
};
pub use traits::{
    ConferenceRepository, PreferenceRepository, RepoResult, SubmissionRepository,
    TalkRepository, UserRepository,
};
pub use value_objects::{
    Preference, PreferenceAction, Snowflake, SnowflakeGenerator, SnowflakeParseError,
};
