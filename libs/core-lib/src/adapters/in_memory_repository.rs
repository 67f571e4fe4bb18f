use crate::{CoreError, UserRepository, domain::user::User};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

/// In-memory implementation of the UserRepository port for testing and single-executable mode.
/// Ids are assigned sequentially from 1.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    // Store: User ID -> User (version tracked on the entity)
    store: Arc<DashMap<i64, User>>,
    last_id: Arc<AtomicI64>,
}

impl InMemoryUserRepository {
    /// Stores `user` as-is under a fresh id. Useful for seeding fixtures.
    pub fn seed(&self, mut user: User) -> User {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        user.assign_id(id);
        self.store.insert(id, user.clone());
        user
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find(&self, user_id: i64) -> Result<Option<User>, CoreError> {
        Ok(self.store.get(&user_id).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, user: User) -> Result<User, CoreError> {
        Ok(self.seed(user))
    }

    async fn update(&self, mut user: User, expected_version: u64) -> Result<User, CoreError> {
        let mut entry = self.store.get_mut(&user.id()).ok_or_else(|| {
            CoreError::Internal(format!("update of unknown user {}", user.id()))
        })?;

        // Optimistic concurrency check
        let current_version = entry.value().version();
        if current_version != expected_version {
            return Err(CoreError::Concurrency {
                expected: expected_version,
                actual: current_version,
            });
        }

        user.bump_version();
        *entry.value_mut() = user.clone();
        Ok(user)
    }
}
