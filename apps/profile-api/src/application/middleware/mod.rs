pub mod auth;

pub use auth::{SESSION_COOKIE, session_auth, session_cookie};
