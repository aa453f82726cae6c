//! Submission handlers

use axum::{extract::State, Json};
use symposium_service::dto::{CreateSubmissionRequest, SubmissionResponse};
use symposium_service::SubmissionService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Submit one of the caller's talks to a conference
///
/// POST /submissions
pub async fn create_submission(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateSubmissionRequest>,
) -> ApiResult<Created<Json<SubmissionResponse>>> {
    let service = SubmissionService::new(state.service_context());
    let response = service.submit_talk(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}
