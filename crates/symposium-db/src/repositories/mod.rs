//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in symposium-core.
//! Each repository handles database operations for a specific domain entity.

mod conference;
mod error;
mod preference;
mod submission;
mod talk;
mod user;

pub use conference::PgConferenceRepository;
pub use preference::PgPreferenceRepository;
pub use submission::PgSubmissionRepository;
pub use talk::PgTalkRepository;
pub use user::PgUserRepository;
