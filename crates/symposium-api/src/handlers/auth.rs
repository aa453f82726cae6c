//! Login pointer
//!
//! Accounts and sign-in live with the external identity provider; this
//! service only verifies the access tokens it issues.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::response::ErrorBody;

/// Where guests land when a page needs a signed-in user
///
/// GET /login
pub async fn login() -> impl IntoResponse {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Bearer")],
        Json(ErrorBody::new(
            "LOGIN_REQUIRED",
            "Sign in with the identity provider and send the access token as a Bearer token",
        )),
    )
}
