use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use core_lib::{
    ErrorCatalogEntry,
    catalog::{SUCCESS_CODE, SUCCESS_MESSAGE},
};
use serde::{Deserialize, Serialize};

/// Body of every response, success or failure.
///
/// `data` is always serialized; it is `null` on failure and for operations
/// that return nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: String,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>) -> Self {
        Self {
            code: SUCCESS_CODE.to_string(),
            message: SUCCESS_MESSAGE.to_string(),
            data,
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(entry: &ErrorCatalogEntry) -> Self {
        Self {
            code: entry.code.to_string(),
            message: entry.message.to_string(),
            data: None,
        }
    }
}

/// A successful handler outcome: the status to send and the payload to wrap.
#[derive(Debug)]
pub struct Success<T> {
    status: StatusCode,
    data: Option<T>,
}

impl<T> Success<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            data: Some(data),
        }
    }

    /// For operations that create a resource.
    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            data: Some(data),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl Success<()> {
    pub fn empty() -> Self {
        Self {
            status: StatusCode::OK,
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::success(self.data))).into_response()
    }
}
