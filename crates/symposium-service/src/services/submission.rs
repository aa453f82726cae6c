//! Submission service
//!
//! Submitting the current revision of a talk to a conference.

use symposium_core::entities::Submission;
use symposium_core::traits::{ConferenceRepository, SubmissionRepository, TalkRepository};
use symposium_core::{DomainError, Snowflake, SnowflakeGenerator};
use tracing::{info, instrument};

use crate::dto::{CreateSubmissionRequest, SubmissionResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Submit the talk's current revision to the conference
///
/// Every call records a new submission; resubmitting is not deduplicated.
pub async fn create_submission(
    conferences: &dyn ConferenceRepository,
    talks: &dyn TalkRepository,
    submissions: &dyn SubmissionRepository,
    generator: &SnowflakeGenerator,
    conference_id: Snowflake,
    talk_id: Snowflake,
) -> ServiceResult<Submission> {
    if conferences.find_by_id(conference_id).await?.is_none() {
        return Err(DomainError::ConferenceNotFound(conference_id).into());
    }

    if talks.find_by_id(talk_id).await?.is_none() {
        return Err(DomainError::TalkNotFound(talk_id).into());
    }

    let revision = talks
        .current_revision(talk_id)
        .await?
        .ok_or(DomainError::TalkRevisionNotFound(talk_id))?;

    let submission = Submission::submitted(generator.generate(), conference_id, revision.id);
    submissions.create(&submission).await?;

    info!(
        submission_id = %submission.id,
        conference_id = %conference_id,
        talk_revision_id = %revision.id,
        "Talk submitted"
    );

    Ok(submission)
}

/// Submission service
pub struct SubmissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubmissionService<'a> {
    /// Create a new SubmissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// [`create_submission`] against the context's repositories
    pub async fn create_submission(
        &self,
        conference_id: Snowflake,
        talk_id: Snowflake,
    ) -> ServiceResult<Submission> {
        create_submission(
            self.ctx.conference_repo(),
            self.ctx.talk_repo(),
            self.ctx.submission_repo(),
            self.ctx.snowflake_generator(),
            conference_id,
            talk_id,
        )
        .await
    }

    /// Submit one of the caller's own talks
    #[instrument(skip(self))]
    pub async fn submit_talk(
        &self,
        user_id: Snowflake,
        request: CreateSubmissionRequest,
    ) -> ServiceResult<SubmissionResponse> {
        let talk = self
            .ctx
            .talk_repo()
            .find_by_id(request.talk_id)
            .await?
            .ok_or(DomainError::TalkNotFound(request.talk_id))?;

        if !talk.is_author(user_id) {
            return Err(DomainError::NotTalkAuthor.into());
        }

        let submission = self
            .create_submission(request.conference_id, request.talk_id)
            .await?;

        Ok(SubmissionResponse::from(submission))
    }

    /// Submissions to a conference, visible to its owner only
    #[instrument(skip(self))]
    pub async fn list_for_conference(
        &self,
        user_id: Snowflake,
        conference_id: Snowflake,
    ) -> ServiceResult<Vec<SubmissionResponse>> {
        let conference = self
            .ctx
            .conference_repo()
            .find_by_id(conference_id)
            .await?
            .ok_or(DomainError::ConferenceNotFound(conference_id))?;

        if !conference.is_owner(user_id) {
            return Err(DomainError::NotConferenceOwner.into());
        }

        let submissions = self
            .ctx
            .submission_repo()
            .find_by_conference(conference_id)
            .await?;

        Ok(submissions.iter().map(SubmissionResponse::from).collect())
    }
}
