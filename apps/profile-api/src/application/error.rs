//! The boundary translator.
//!
//! Every handler returns `ApiResult<T>`; axum turns the outcome into exactly
//! one response through the `IntoResponse` impls here and in `response.rs`.
//! Anticipated failures resolve through the error catalog. Anything else
//! collapses to the generic server-fault entry with the detail kept in logs.

use std::any::Any;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::{Method, Uri},
    response::{IntoResponse, Response},
};
use core_lib::{
    CoreError, DomainFailure, ErrorCatalog, ErrorCatalogEntry, ErrorCode, ServiceError,
};
use serde::Serialize;
use tracing::{error, info, warn};

use super::response::{ApiResponse, Success};

pub type ApiResult<T> = Result<Success<T>, ApiError>;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// A recognized business-rule violation. Always wins over the generic cases.
    #[error(transparent)]
    Domain(#[from] DomainFailure),

    /// No session principal on a protected route.
    #[error("Login required")]
    LoginRequired,

    /// Any unanticipated fault. The string is for logs only.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(failure) => ApiError::Domain(failure),
            ServiceError::Core(core) => core.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Domain(
            DomainFailure::new(ErrorCode::InvalidRequest).with_detail(rejection.body_text()),
        )
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Domain(
            DomainFailure::new(ErrorCode::InvalidRequest).with_detail(rejection.body_text()),
        )
    }
}

impl ApiError {
    /// The catalog entry this error is reported as.
    pub fn entry(&self) -> &'static ErrorCatalogEntry {
        let code = match self {
            ApiError::Domain(failure) => failure.code(),
            ApiError::LoginRequired => ErrorCode::NotLogin,
            ApiError::Internal(_) => ErrorCode::InternalServerError,
        };
        ErrorCatalog::global().lookup(code)
    }

    fn log(&self) {
        match self {
            ApiError::Domain(failure) => warn!(
                code = %failure.code(),
                detail = failure.detail().unwrap_or("-"),
                "request rejected"
            ),
            ApiError::LoginRequired => info!("request rejected: no session principal"),
            ApiError::Internal(detail) => error!("Unhandled failure: {}", detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let entry = self.entry();
        (entry.status, Json(ApiResponse::failure(entry))).into_response()
    }
}

/// Turns any handler outcome into its single HTTP response.
pub fn translate<T: Serialize>(outcome: ApiResult<T>) -> Response {
    match outcome {
        Ok(success) => success.into_response(),
        Err(err) => err.into_response(),
    }
}

/// Router fallback for paths no route matches.
pub async fn not_found_fallback(uri: Uri) -> ApiError {
    ApiError::Domain(DomainFailure::new(ErrorCode::NotFoundApi).with_detail(uri.path().to_string()))
}

/// Fallback for a matched path hit with a method it does not serve.
pub async fn method_not_allowed_fallback(method: Method, uri: Uri) -> ApiError {
    ApiError::Domain(
        DomainFailure::new(ErrorCode::MethodNotAllowed)
            .with_detail(format!("{} {}", method, uri.path())),
    )
}

/// `CatchPanicLayer` hook: a panicking handler becomes a generic 500 envelope.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::to_bytes, http::StatusCode};
    use core_lib::domain::user::ProfileResponse;
    use serde_json::Value;

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_not_exist_user_translation() {
        let response = translate::<()>(Err(DomainFailure::new(ErrorCode::NotExistUser).into()));

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "1000");
        assert_eq!(body["message"], "사용자가 없습니다.");
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_every_identifier_translates_to_its_entry() {
        for &id in ErrorCode::ALL {
            let entry = ErrorCatalog::global().lookup(id);
            let response = translate::<()>(Err(ApiError::Domain(DomainFailure::new(id))));

            assert_eq!(response.status(), entry.status, "{id}");
            let body = body_json(response).await;
            assert_eq!(body["code"], entry.code, "{id}");
            assert_eq!(body["message"], entry.message, "{id}");
        }
    }

    #[tokio::test]
    async fn test_translation_is_byte_identical() {
        let failure = DomainFailure::new(ErrorCode::CheckUser).with_detail("user 2 vs 1");

        let first = body_bytes(ApiError::Domain(failure.clone()).into_response()).await;
        let second = body_bytes(ApiError::Domain(failure).into_response()).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_login_required_is_not_login() {
        let response = ApiError::LoginRequired.into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["code"], "5000");
        assert_eq!(body["message"], "로그인이 필요합니다.");
    }

    #[tokio::test]
    async fn test_explicit_not_login_failure_uses_domain_rule() {
        let err = ApiError::from(ServiceError::from(ErrorCode::NotLogin));
        assert!(matches!(err, ApiError::Domain(_)));
        assert_eq!(err.entry().code, "5000");
    }

    #[tokio::test]
    async fn test_internal_detail_never_leaks() {
        let err: ApiError = CoreError::Internal("connection refused to db-primary:5432".into()).into();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let raw = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(!raw.contains("db-primary"));
        let body: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(body["code"], "5003");
        assert_eq!(body["message"], "서버 오류가 발생했습니다.");
    }

    #[tokio::test]
    async fn test_domain_detail_never_leaks() {
        let failure = DomainFailure::new(ErrorCode::NotExistUser).with_detail("user_id=99");
        let raw = String::from_utf8(body_bytes(ApiError::Domain(failure).into_response()).await)
            .unwrap();
        assert!(!raw.contains("user_id=99"));
    }

    #[tokio::test]
    async fn test_success_wraps_data() {
        let profile = ProfileResponse {
            nickname: "test".into(),
            follower_count: 100,
            following_count: 200,
            profile_image_url: "/api/test/image.png".into(),
            description: "description".into(),
        };
        let response = translate(Ok(Success::ok(profile)));

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["code"], "200");
        assert_eq!(body["message"], "성공했습니다.");
        assert_eq!(body["data"]["nickname"], "test");
        assert_eq!(body["data"]["followerCount"], 100);
    }

    #[tokio::test]
    async fn test_created_and_empty_success() {
        let created = translate(Ok(Success::created(serde_json::json!({ "id": 1 }))));
        assert_eq!(created.status(), StatusCode::CREATED);
        assert_eq!(body_json(created).await["data"]["id"], 1);

        let empty = translate(Ok(Success::empty()));
        assert_eq!(empty.status(), StatusCode::OK);
        let body = body_json(empty).await;
        assert_eq!(body["code"], "200");
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_method_not_allowed_fallback_is_enveloped() {
        let response =
            method_not_allowed_fallback(Method::PUT, Uri::from_static("/api/users/1/profile"))
                .await
                .into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let raw = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(!raw.contains("PUT"));
        let body: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(body["code"], "5004");
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_panic_payload_is_redacted() {
        let response = handle_panic(Box::new("index out of bounds: secret"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let raw = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(!raw.contains("secret"));
    }
}
