use async_trait::async_trait;

// Declare modules
pub mod adapters;
pub mod catalog;
pub mod domain;
pub mod failure;

pub use catalog::{CatalogError, ErrorCatalog, ErrorCatalogEntry, ErrorCode, ErrorDomain};
pub use failure::DomainFailure;

use domain::user::{LoginUser, User};

// Unanticipated faults. None of these carry a client-facing meaning; the
// boundary maps every variant to the generic server-fault response.
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("Concurrency conflict: Expected version {expected}, found {actual}")]
    Concurrency { expected: u64, actual: u64 },
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Outcome of a service-layer call that did not succeed.
///
/// Recognized rule violations travel as `Domain`; everything else is `Core`.
#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainFailure),
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<ErrorCode> for ServiceError {
    fn from(code: ErrorCode) -> Self {
        ServiceError::Domain(DomainFailure::new(code))
    }
}

// Port for user persistence
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find(&self, user_id: i64) -> Result<Option<User>, CoreError>;

    /// Stores a new user and returns it with its assigned id.
    async fn insert(&self, user: User) -> Result<User, CoreError>;

    /// Replaces a stored user. `expected_version` guards against lost updates.
    async fn update(&self, user: User, expected_version: u64) -> Result<User, CoreError>;
}

// Port for the session provider
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Opens a session for `user` and returns its id.
    async fn open(&self, user: LoginUser) -> Result<String, CoreError>;

    /// `None` when the session is unknown or expired.
    async fn principal(&self, session_id: &str) -> Result<Option<LoginUser>, CoreError>;

    async fn close(&self, session_id: &str) -> Result<(), CoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_stay_unclassified() {
        let err: ServiceError = CoreError::Concurrency {
            expected: 1,
            actual: 2,
        }
        .into();

        assert!(matches!(err, ServiceError::Core(_)));
        assert_eq!(
            err.to_string(),
            "Concurrency conflict: Expected version 1, found 2"
        );
    }

    #[test]
    fn test_error_code_becomes_domain_failure() {
        let err = ServiceError::from(ErrorCode::CheckUser);
        assert!(matches!(err, ServiceError::Domain(ref f) if f.code() == ErrorCode::CheckUser));
    }
}
