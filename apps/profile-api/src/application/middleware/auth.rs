use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use tracing::{debug, info};

use crate::AppState;
use crate::application::error::ApiError;

/// Cookie carrying the session id.
pub const SESSION_COOKIE: &str = "SESSION";

/// Extracts the session id from the `Cookie` header(s), if any.
pub fn session_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

/// Middleware resolving the session principal for protected routes.
///
/// On success the `LoginUser` is placed in request extensions. A missing or
/// unknown session short-circuits with `NOT_LOGIN` before any service call.
pub async fn session_auth(
    State(app_state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let session_id = match session_cookie(req.headers()) {
        Some(id) => id.to_string(),
        None => {
            debug!("no session cookie on protected route {}", req.uri().path());
            return Err(ApiError::LoginRequired);
        }
    };

    // Store failures are faults, not a missing login.
    match app_state.sessions.principal(&session_id).await? {
        Some(login_user) => {
            info!("session authenticated for user: {}", login_user.id);
            req.extensions_mut().insert(login_user);
            Ok(next.run(req).await)
        }
        None => {
            debug!("session {} not found or expired", session_id);
            Err(ApiError::LoginRequired)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_session_cookie_parsing() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_cookie(&headers), None);

        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; SESSION=abc123; lang=ko"),
        );
        assert_eq!(session_cookie(&headers), Some("abc123"));
    }

    #[test]
    fn test_empty_session_cookie_is_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("SESSION="));
        assert_eq!(session_cookie(&headers), None);
    }

    #[test]
    fn test_cookie_name_must_match_exactly() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("XSESSION=abc"));
        assert_eq!(session_cookie(&headers), None);
    }
}
