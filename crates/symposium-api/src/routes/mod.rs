//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, conferences, health, submissions};
use crate::state::AppState;

/// Create the application router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(conference_routes())
        .merge(submission_routes())
        .route("/login", get(auth::login))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Conference routes
fn conference_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/conferences",
            get(conferences::list_conferences).post(conferences::create_conference),
        )
        .route("/conferences/create", get(conferences::create_form))
        .route(
            "/conferences/:conference_id",
            get(conferences::get_conference)
                .put(conferences::update_conference)
                .patch(conferences::update_conference),
        )
        .route(
            "/conferences/:conference_id/edit",
            get(conferences::edit_conference),
        )
        .route(
            "/conferences/:conference_id/dismiss",
            get(conferences::dismiss_conference).post(conferences::dismiss_conference),
        )
        .route(
            "/conferences/:conference_id/favorite",
            get(conferences::favorite_conference).post(conferences::favorite_conference),
        )
        .route(
            "/conferences/:conference_id/submissions",
            get(conferences::list_submissions),
        )
}

/// Submission routes
fn submission_routes() -> Router<AppState> {
    Router::new().route("/submissions", post(submissions::create_submission))
}
