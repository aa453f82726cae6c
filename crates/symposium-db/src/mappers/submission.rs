//! Submission entity <-> model mapper

use symposium_core::entities::{Submission, SubmissionStatus};
use symposium_core::error::DomainError;
use symposium_core::value_objects::Snowflake;

use crate::models::SubmissionModel;

impl TryFrom<SubmissionModel> for Submission {
    type Error = DomainError;

    fn try_from(model: SubmissionModel) -> Result<Self, Self::Error> {
        let status = SubmissionStatus::parse(&model.status).ok_or_else(|| {
            DomainError::DatabaseError(format!(
                "submission {} has unknown status {:?}",
                model.id, model.status
            ))
        })?;

        Ok(Submission {
            id: Snowflake::new(model.id),
            conference_id: Snowflake::new(model.conference_id),
            talk_revision_id: Snowflake::new(model.talk_revision_id),
            status,
            created_at: model.created_at,
        })
    }
}
