use async_trait::async_trait;
use core_lib::{
    DomainFailure, ErrorCode, ServiceError, UserRepository,
    domain::user::{LoginUser, ProfileResponse, ProfileUpdateRequest, RegisterRequest, User},
};
use std::sync::Arc;
use tracing::info;

/// Business operations behind the user routes.
///
/// Every anticipated rule violation is returned as `ServiceError::Domain`;
/// nothing here decides a response shape.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn get_profile(&self, user_id: i64) -> Result<ProfileResponse, ServiceError>;

    /// Edits the profile of `target_id` on behalf of `actor`.
    /// Anyone but the owner is refused with `CHECK_USER`.
    async fn update_profile(
        &self,
        request: ProfileUpdateRequest,
        target_id: i64,
        actor: LoginUser,
    ) -> Result<ProfileResponse, ServiceError>;

    /// Creates a user and returns its profile together with the new id.
    async fn register(&self, request: RegisterRequest)
    -> Result<(ProfileResponse, i64), ServiceError>;
}

pub struct DefaultUserService {
    user_repository: Arc<dyn UserRepository>,
}

impl DefaultUserService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    async fn load(&self, user_id: i64) -> Result<User, ServiceError> {
        self.user_repository.find(user_id).await?.ok_or_else(|| {
            DomainFailure::new(ErrorCode::NotExistUser)
                .with_detail(format!("user_id={user_id}"))
                .into()
        })
    }
}

#[async_trait]
impl UserService for DefaultUserService {
    async fn get_profile(&self, user_id: i64) -> Result<ProfileResponse, ServiceError> {
        Ok(self.load(user_id).await?.to_profile())
    }

    async fn update_profile(
        &self,
        request: ProfileUpdateRequest,
        target_id: i64,
        actor: LoginUser,
    ) -> Result<ProfileResponse, ServiceError> {
        let mut user = self.load(target_id).await?;
        let expected_version = user.version();

        user.update_profile(&actor, request)?;
        let saved = self.user_repository.update(user, expected_version).await?;

        info!("profile updated for user {}", saved.id());
        Ok(saved.to_profile())
    }

    async fn register(
        &self,
        request: RegisterRequest,
    ) -> Result<(ProfileResponse, i64), ServiceError> {
        let saved = self.user_repository.insert(User::register(request)).await?;
        info!("registered user {}", saved.id());
        Ok((saved.to_profile(), saved.id()))
    }
}
