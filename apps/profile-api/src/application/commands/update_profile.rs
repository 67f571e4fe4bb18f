use axum::{
    Extension, Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use core_lib::domain::user::{LoginUser, ProfileResponse, ProfileUpdateRequest};

use crate::AppState;
use crate::application::{error::ApiResult, response::Success};

// PATCH /api/users/profile (session required)
pub async fn handle_update_profile(
    State(app_state): State<AppState>,
    Extension(login_user): Extension<LoginUser>,
    payload: Result<Json<ProfileUpdateRequest>, JsonRejection>,
) -> ApiResult<ProfileResponse> {
    let Json(request) = payload?;

    // Shorthand for the session's own profile
    let profile = app_state
        .user_service
        .update_profile(request, login_user.id, login_user)
        .await?;
    Ok(Success::ok(profile))
}

// PATCH /api/users/{user_id}/profile (session required, owner only)
pub async fn handle_update_user_profile(
    State(app_state): State<AppState>,
    user_id: Result<Path<i64>, PathRejection>,
    Extension(login_user): Extension<LoginUser>,
    payload: Result<Json<ProfileUpdateRequest>, JsonRejection>,
) -> ApiResult<ProfileResponse> {
    let Path(user_id) = user_id?;
    let Json(request) = payload?;

    let profile = app_state
        .user_service
        .update_profile(request, user_id, login_user)
        .await?;
    Ok(Success::ok(profile))
}
