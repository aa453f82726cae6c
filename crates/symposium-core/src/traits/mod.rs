//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ConferenceRepository, PreferenceRepository, RepoResult, SubmissionRepository,
    TalkRepository, UserRepository,
};
