use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Response},
};
use core_lib::CoreError;

use crate::AppState;
use crate::application::{
    error::ApiError,
    middleware::{SESSION_COOKIE, session_cookie},
    response::Success,
};

// DELETE /api/users/session (session required)
pub async fn handle_close_session(
    State(app_state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    if let Some(session_id) = session_cookie(&headers) {
        app_state.sessions.close(session_id).await?;
    }

    let expired = HeaderValue::from_str(&format!("{SESSION_COOKIE}=; Path=/; Max-Age=0"))
        .map_err(|e| CoreError::Internal(format!("invalid session cookie: {e}")))?;

    Ok(([(header::SET_COOKIE, expired)], Success::empty()).into_response())
}
