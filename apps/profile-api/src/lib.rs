use axum::{
    Router,
    middleware::{self},
    routing::{delete, get, patch, post},
};
use core_lib::SessionStore;
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
};

pub mod application;
pub mod config;

use application::{
    UserService,
    commands::{
        handle_close_session, handle_register_user, handle_update_profile,
        handle_update_user_profile,
    },
    error::{handle_panic, method_not_allowed_fallback, not_found_fallback},
    middleware::session_auth,
    query::handle_get_profile,
};

// Holds shared dependencies
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub sessions: Arc<dyn SessionStore>,
}

// Function to create the main Axum router with state
pub fn create_app(app_state: AppState) -> Router {
    let api_routes = Router::new()
        // Registration opens the session, so it cannot require one
        .route("/users", post(handle_register_user))
        .route(
            "/users/{user_id}/profile",
            get(handle_get_profile).merge(patch(handle_update_user_profile).route_layer(
                middleware::from_fn_with_state(app_state.clone(), session_auth),
            )),
        )
        .route(
            "/users/profile",
            patch(handle_update_profile).route_layer(middleware::from_fn_with_state(
                app_state.clone(),
                session_auth,
            )),
        )
        .route(
            "/users/session",
            delete(handle_close_session).route_layer(middleware::from_fn_with_state(
                app_state.clone(),
                session_auth,
            )),
        )
        // Known path, unsupported verb
        .method_not_allowed_fallback(method_not_allowed_fallback);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api_routes)
        .fallback(not_found_fallback)
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(app_state)
}
