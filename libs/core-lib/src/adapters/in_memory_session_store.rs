use crate::{CoreError, SessionStore, domain::user::LoginUser};
use async_trait::async_trait;
use moka::future::Cache as MokaCache;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// In-memory implementation of the SessionStore port using Moka.
/// Sessions expire `ttl_seconds` after they are opened.
#[derive(Clone, Debug)]
pub struct InMemorySessionStore {
    sessions: MokaCache<String, LoginUser>,
}

impl InMemorySessionStore {
    pub fn new(max_capacity: u64, ttl_seconds: u64) -> Self {
        let sessions = MokaCache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_seconds))
            .build();
        Self { sessions }
    }

    /// Registers a session under a caller-chosen id. Test fixtures use this
    /// the way a servlet test sets a session attribute.
    pub async fn insert(&self, session_id: &str, user: LoginUser) {
        self.sessions.insert(session_id.to_string(), user).await;
    }
}

impl Default for InMemorySessionStore {
    /// 10,000 sessions, 30 minute lifetime.
    fn default() -> Self {
        Self::new(10_000, 1800)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn open(&self, user: LoginUser) -> Result<String, CoreError> {
        let session_id = Uuid::new_v4().simple().to_string();
        self.sessions.insert(session_id.clone(), user).await;
        debug!("opened session for user {}", user.id);
        Ok(session_id)
    }

    async fn principal(&self, session_id: &str) -> Result<Option<LoginUser>, CoreError> {
        Ok(self.sessions.get(session_id).await)
    }

    async fn close(&self, session_id: &str) -> Result<(), CoreError> {
        self.sessions.invalidate(session_id).await;
        Ok(())
    }
}
