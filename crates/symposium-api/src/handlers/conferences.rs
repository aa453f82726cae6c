//! Conference handlers
//!
//! Listing, viewing, creating and editing conferences, plus the viewer's
//! favorite/dismiss marks.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use symposium_core::{ConferenceFilter, ConferenceSort};
use symposium_service::dto::{
    ConferenceFormResponse, ConferenceListQuery, ConferenceListResponse, ConferenceResponse,
    CreateConferenceRequest, PreferenceResponse, SubmissionResponse, UpdateConferenceRequest,
};
use symposium_service::{ConferenceService, SubmissionService};

use crate::extractors::{AuthUser, ConferenceIdPath, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List conferences
///
/// GET /conferences?filter={all|dismissed|favorites}&sort={date}
pub async fn list_conferences(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Query(query): Query<ConferenceListQuery>,
) -> ApiResult<Json<ConferenceListResponse>> {
    let filter = ConferenceFilter::from_query(query.filter.as_deref());
    let sort = ConferenceSort::from_query(query.sort.as_deref());

    let service = ConferenceService::new(state.service_context());
    let response = service
        .list(viewer.user_id(), filter, sort, Utc::now())
        .await?;
    Ok(Json(response))
}

/// Fields accepted when creating a conference
///
/// GET /conferences/create
pub async fn create_form(_auth: AuthUser) -> Json<ConferenceFormResponse> {
    Json(ConferenceFormResponse::create())
}

/// Create a conference
///
/// POST /conferences
pub async fn create_conference(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateConferenceRequest>,
) -> ApiResult<Created<Json<ConferenceResponse>>> {
    let service = ConferenceService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Show a conference
///
/// GET /conferences/{conference_id}
pub async fn get_conference(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    ConferenceIdPath(conference_id): ConferenceIdPath,
) -> ApiResult<Json<ConferenceResponse>> {
    let service = ConferenceService::new(state.service_context());
    let response = service
        .get(viewer.user_id(), conference_id, Utc::now())
        .await?;
    Ok(Json(response))
}

/// Current values for the edit form (owner only)
///
/// GET /conferences/{conference_id}/edit
pub async fn edit_conference(
    State(state): State<AppState>,
    auth: AuthUser,
    ConferenceIdPath(conference_id): ConferenceIdPath,
) -> ApiResult<Json<ConferenceResponse>> {
    let service = ConferenceService::new(state.service_context());
    let response = service.get_for_edit(auth.user_id, conference_id).await?;
    Ok(Json(response))
}

/// Update a conference (owner only)
///
/// PUT|PATCH /conferences/{conference_id}
pub async fn update_conference(
    State(state): State<AppState>,
    auth: AuthUser,
    ConferenceIdPath(conference_id): ConferenceIdPath,
    ValidatedJson(request): ValidatedJson<UpdateConferenceRequest>,
) -> ApiResult<Json<ConferenceResponse>> {
    let service = ConferenceService::new(state.service_context());
    let response = service
        .update(auth.user_id, conference_id, request)
        .await?;
    Ok(Json(response))
}

/// Toggle dismissal
///
/// GET|POST /conferences/{conference_id}/dismiss
pub async fn dismiss_conference(
    State(state): State<AppState>,
    auth: AuthUser,
    ConferenceIdPath(conference_id): ConferenceIdPath,
) -> ApiResult<Json<PreferenceResponse>> {
    let service = ConferenceService::new(state.service_context());
    let response = service.dismiss(auth.user_id, conference_id).await?;
    Ok(Json(response))
}

/// Toggle favorite
///
/// GET|POST /conferences/{conference_id}/favorite
pub async fn favorite_conference(
    State(state): State<AppState>,
    auth: AuthUser,
    ConferenceIdPath(conference_id): ConferenceIdPath,
) -> ApiResult<Json<PreferenceResponse>> {
    let service = ConferenceService::new(state.service_context());
    let response = service.favorite(auth.user_id, conference_id).await?;
    Ok(Json(response))
}

/// Submissions received by a conference (owner only)
///
/// GET /conferences/{conference_id}/submissions
pub async fn list_submissions(
    State(state): State<AppState>,
    auth: AuthUser,
    ConferenceIdPath(conference_id): ConferenceIdPath,
) -> ApiResult<Json<Vec<SubmissionResponse>>> {
    let service = SubmissionService::new(state.service_context());
    let response = service
        .list_for_conference(auth.user_id, conference_id)
        .await?;
    Ok(Json(response))
}
