//! Domain entities - core business objects

mod conference;
mod submission;
mod talk;
mod user;

pub use conference::Conference;
pub use submission::{Submission, SubmissionStatus};
pub use talk::{Talk, TalkRevision};
pub use user::User;
