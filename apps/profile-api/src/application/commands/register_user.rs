use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use core_lib::{
    CoreError,
    domain::user::{LoginUser, RegisterRequest},
};
use tracing::info;

use crate::AppState;
use crate::application::{error::ApiError, middleware::SESSION_COOKIE, response::Success};

// POST /api/users
// Creates the user, logs them in and answers 201 with the new profile.
pub async fn handle_register_user(
    State(app_state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;

    let (profile, user_id) = app_state.user_service.register(request).await?;
    let session_id = app_state.sessions.open(LoginUser::new(user_id)).await?;
    info!("user {} registered and logged in", user_id);

    let cookie = HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax"
    ))
    .map_err(|e| CoreError::Internal(format!("invalid session cookie: {e}")))?;

    Ok(([(header::SET_COOKIE, cookie)], Success::created(profile)).into_response())
}
