use axum::extract::{Path, State, rejection::PathRejection};
use core_lib::domain::user::ProfileResponse;
use tracing::debug;

use super::error::ApiResult;
use super::response::Success;
use crate::AppState;

// GET /api/users/{user_id}/profile
pub async fn handle_get_profile(
    State(app_state): State<AppState>,
    user_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<ProfileResponse> {
    let Path(user_id) = user_id?;
    debug!("profile lookup user_id={}", user_id);

    let profile = app_state.user_service.get_profile(user_id).await?;
    Ok(Success::ok(profile))
}
