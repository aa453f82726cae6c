//! Conference service
//!
//! Listing, viewing, creating and editing conferences, and the per-user
//! favorite/dismiss marks.

use chrono::{DateTime, Utc};
use symposium_core::entities::Conference;
use symposium_core::listing::{filter_conferences, sort_conferences};
use symposium_core::{
    ConferenceFilter, ConferenceSort, DomainError, Preference, PreferenceAction, Snowflake, Viewer,
};
use tracing::{debug, info, instrument};

use crate::dto::{
    ConferenceListResponse, ConferenceResponse, ConferenceView, CreateConferenceRequest,
    PreferenceResponse, UpdateConferenceRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Conference service
pub struct ConferenceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ConferenceService<'a> {
    /// Create a new ConferenceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List conferences for `viewer_id` (or a guest), filtered then sorted
    ///
    /// Only the rows the filter can select are loaded from the store; the
    /// listing rules then run in memory so both paths agree.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        viewer_id: Option<Snowflake>,
        filter: ConferenceFilter,
        sort: ConferenceSort,
        now: DateTime<Utc>,
    ) -> ServiceResult<ConferenceListResponse> {
        let viewer = match viewer_id {
            Some(user_id) => Some(Viewer::new(
                user_id,
                self.ctx.preference_repo().find_by_user(user_id).await?,
            )),
            None => None,
        };

        let candidates = self.load_candidates(viewer_id, filter).await?;
        let conferences = filter_conferences(candidates, filter, viewer.as_ref());
        let conferences = sort_conferences(conferences, sort);

        debug!(count = conferences.len(), "Conferences listed");

        Ok(ConferenceListResponse {
            filter: filter.as_str().to_string(),
            sort: sort.as_str().to_string(),
            conferences: conferences
                .iter()
                .map(|conference| {
                    let preference = viewer
                        .as_ref()
                        .map_or(Preference::None, |v| v.preference(conference.id));
                    ConferenceResponse::from(ConferenceView::new(conference, preference, now))
                })
                .collect(),
        })
    }

    async fn load_candidates(
        &self,
        viewer_id: Option<Snowflake>,
        filter: ConferenceFilter,
    ) -> ServiceResult<Vec<Conference>> {
        let repo = self.ctx.conference_repo();

        let conferences = match (filter, viewer_id) {
            (ConferenceFilter::Approved, _) => repo.find_approved().await?,
            (ConferenceFilter::All, viewer) => repo.find_listable(viewer).await?,
            (ConferenceFilter::Dismissed | ConferenceFilter::Favorites, None) => Vec::new(),
            (ConferenceFilter::Dismissed, Some(user_id)) => {
                self.load_marked(user_id, Preference::Dismissed).await?
            }
            (ConferenceFilter::Favorites, Some(user_id)) => {
                self.load_marked(user_id, Preference::Favorite).await?
            }
        };

        Ok(conferences)
    }

    async fn load_marked(
        &self,
        user_id: Snowflake,
        preference: Preference,
    ) -> ServiceResult<Vec<Conference>> {
        let ids = self
            .ctx
            .preference_repo()
            .find_conference_ids(user_id, preference)
            .await?;

        Ok(self.ctx.conference_repo().find_by_ids(&ids).await?)
    }

    /// Get a conference entity by ID
    #[instrument(skip(self))]
    pub async fn get_conference_entity(&self, conference_id: Snowflake) -> ServiceResult<Conference> {
        Ok(self
            .ctx
            .conference_repo()
            .find_by_id(conference_id)
            .await?
            .ok_or(DomainError::ConferenceNotFound(conference_id))?)
    }

    /// Show one conference
    ///
    /// Guests only see approved conferences; anything else reads as missing.
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        viewer_id: Option<Snowflake>,
        conference_id: Snowflake,
        now: DateTime<Utc>,
    ) -> ServiceResult<ConferenceResponse> {
        let conference = self.get_conference_entity(conference_id).await?;

        let preference = match viewer_id {
            Some(user_id) => self.ctx.preference_repo().find(user_id, conference_id).await?,
            None if conference.is_approved => Preference::None,
            None => return Err(DomainError::ConferenceNotFound(conference_id).into()),
        };

        Ok(ConferenceResponse::from(ConferenceView::new(
            &conference,
            preference,
            now,
        )))
    }

    /// Current values for the owner's edit form
    #[instrument(skip(self))]
    pub async fn get_for_edit(
        &self,
        user_id: Snowflake,
        conference_id: Snowflake,
    ) -> ServiceResult<ConferenceResponse> {
        let conference = self.get_owned(user_id, conference_id).await?;
        Ok(ConferenceResponse::from(&conference))
    }

    /// Create a conference owned by `author_id`, pending approval
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        author_id: Snowflake,
        request: CreateConferenceRequest,
    ) -> ServiceResult<ConferenceResponse> {
        if self.ctx.user_repo().find_by_id(author_id).await?.is_none() {
            return Err(DomainError::UserNotFound(author_id).into());
        }

        let mut conference = Conference::new(
            self.ctx.generate_id(),
            author_id,
            request.title,
            request.description,
            request.url,
        );
        conference.latitude = request.latitude;
        conference.longitude = request.longitude;
        conference.starts_at = request.starts_at;
        conference.ends_at = request.ends_at;
        conference.cfp_starts_at = request.cfp_starts_at;
        conference.cfp_ends_at = request.cfp_ends_at;
        conference.check_schedule()?;

        self.ctx.conference_repo().create(&conference).await?;

        info!(conference_id = %conference.id, author_id = %author_id, "Conference created");

        Ok(ConferenceResponse::from(&conference))
    }

    /// Apply a partial update; only the owner may edit
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        user_id: Snowflake,
        conference_id: Snowflake,
        request: UpdateConferenceRequest,
    ) -> ServiceResult<ConferenceResponse> {
        let mut conference = self.get_owned(user_id, conference_id).await?;

        if let Some(title) = request.title {
            conference.title = title;
        }
        if let Some(description) = request.description {
            conference.description = description;
        }
        if let Some(url) = request.url {
            conference.url = url;
        }
        if let Some(latitude) = request.latitude {
            conference.latitude = latitude;
        }
        if let Some(longitude) = request.longitude {
            conference.longitude = longitude;
        }
        if let Some(starts_at) = request.starts_at {
            conference.starts_at = starts_at;
        }
        if let Some(ends_at) = request.ends_at {
            conference.ends_at = ends_at;
        }
        if let Some(cfp_starts_at) = request.cfp_starts_at {
            conference.cfp_starts_at = cfp_starts_at;
        }
        if let Some(cfp_ends_at) = request.cfp_ends_at {
            conference.cfp_ends_at = cfp_ends_at;
        }
        conference.check_schedule()?;
        conference.touch();

        self.ctx.conference_repo().update(&conference).await?;

        info!(conference_id = %conference_id, "Conference updated");

        Ok(ConferenceResponse::from(&conference))
    }

    /// Toggle the user's dismissal of a conference
    #[instrument(skip(self))]
    pub async fn dismiss(
        &self,
        user_id: Snowflake,
        conference_id: Snowflake,
    ) -> ServiceResult<PreferenceResponse> {
        self.mark(user_id, conference_id, PreferenceAction::Dismiss)
            .await
    }

    /// Toggle the user's favorite mark on a conference
    #[instrument(skip(self))]
    pub async fn favorite(
        &self,
        user_id: Snowflake,
        conference_id: Snowflake,
    ) -> ServiceResult<PreferenceResponse> {
        self.mark(user_id, conference_id, PreferenceAction::Favorite)
            .await
    }

    async fn mark(
        &self,
        user_id: Snowflake,
        conference_id: Snowflake,
        action: PreferenceAction,
    ) -> ServiceResult<PreferenceResponse> {
        // 404 before touching preferences
        self.get_conference_entity(conference_id).await?;

        let preference = self
            .ctx
            .preference_repo()
            .apply(user_id, conference_id, action)
            .await?;

        info!(
            conference_id = %conference_id,
            user_id = %user_id,
            ?action,
            ?preference,
            "Conference preference updated"
        );

        Ok(PreferenceResponse {
            conference_id: conference_id.to_string(),
            preference,
        })
    }

    async fn get_owned(
        &self,
        user_id: Snowflake,
        conference_id: Snowflake,
    ) -> ServiceResult<Conference> {
        let conference = self.get_conference_entity(conference_id).await?;

        if !conference.is_owner(user_id) {
            return Err(DomainError::NotConferenceOwner.into());
        }

        Ok(conference)
    }
}
