// Declare sub-modules within the application layer
pub mod commands;
pub mod error;
pub mod middleware;
pub mod query;
pub mod response;
pub mod service;

pub use error::{ApiError, ApiResult, translate};
pub use response::{ApiResponse, Success};
pub use service::{DefaultUserService, UserService};
