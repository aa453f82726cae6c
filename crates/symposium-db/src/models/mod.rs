//! Database models - SQLx-compatible structs for PostgreSQL tables

mod conference;
mod preference;
mod submission;
mod talk;
mod user;

pub use conference::ConferenceModel;
pub use preference::PreferenceModel;
pub use submission::SubmissionModel;
pub use talk::{TalkModel, TalkRevisionModel};
pub use user::UserModel;
