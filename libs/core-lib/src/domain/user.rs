use crate::{DomainFailure, ErrorCode};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROFILE_IMAGE_URL: &str = "/api/images/default-profile.png";

// --- User Entity ---

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: i64,
    version: u64,
    nickname: String,
    description: String,
    profile_image_url: String,
    follower_count: u64,
    following_count: u64,
}

// --- Session Principal ---

/// Identity stored in a session once a user is logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUser {
    pub id: i64,
}

impl LoginUser {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

// --- DTOs ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub nickname: String,
    pub follower_count: u64,
    pub following_count: u64,
    pub profile_image_url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    pub nickname: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub nickname: String,
    pub description: Option<String>,
}

impl User {
    /// A user not yet stored. The repository assigns the id on insert.
    pub fn register(request: RegisterRequest) -> Self {
        Self {
            id: 0,
            version: 0,
            nickname: request.nickname,
            description: request.description.unwrap_or_default(),
            profile_image_url: DEFAULT_PROFILE_IMAGE_URL.to_string(),
            follower_count: 0,
            following_count: 0,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn with_counts(mut self, follower_count: u64, following_count: u64) -> Self {
        self.follower_count = follower_count;
        self.following_count = following_count;
        self
    }

    pub fn with_profile_image(mut self, url: impl Into<String>) -> Self {
        self.profile_image_url = url.into();
        self
    }

    // Adapter hooks: identity and version are owned by the repository.
    pub(crate) fn assign_id(&mut self, id: i64) {
        self.id = id;
    }

    pub(crate) fn bump_version(&mut self) {
        self.version += 1;
    }

    /// Fails with `CHECK_USER` unless `actor` is this user.
    pub fn ensure_owned_by(&self, actor: &LoginUser) -> Result<(), DomainFailure> {
        if self.id != actor.id {
            return Err(DomainFailure::new(ErrorCode::CheckUser).with_detail(format!(
                "user {} attempted to modify profile of user {}",
                actor.id, self.id
            )));
        }
        Ok(())
    }

    /// Applies a profile edit made by `actor`. A missing description keeps the current one.
    pub fn update_profile(
        &mut self,
        actor: &LoginUser,
        request: ProfileUpdateRequest,
    ) -> Result<(), DomainFailure> {
        self.ensure_owned_by(actor)?;
        self.nickname = request.nickname;
        if let Some(description) = request.description {
            self.description = description;
        }
        Ok(())
    }

    pub fn to_profile(&self) -> ProfileResponse {
        ProfileResponse {
            nickname: self.nickname.clone(),
            follower_count: self.follower_count,
            following_count: self.following_count,
            profile_image_url: self.profile_image_url.clone(),
            description: self.description.clone(),
        }
    }
}
