// Import necessary items from the crate's library (lib.rs)
use core_lib::{
    SessionStore, UserRepository,
    adapters::{InMemorySessionStore, InMemoryUserRepository},
    catalog,
};
use dotenvy::dotenv;
use profile_api::{
    AppState,
    application::{DefaultUserService, UserService},
    config::AppConfig,
    create_app,
};
use std::{process::ExitCode, sync::Arc};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

// main.rs only contains the binary entry point and wiring.
// Router, state and handlers live in lib.rs.

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment (.env) if present
    dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize tracing (logging); RUST_LOG wins over LOG_LEVEL
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("setting default subscriber failed: {e}");
        return ExitCode::FAILURE;
    }

    info!("Starting profile API v{}...", env!("CARGO_PKG_VERSION"));

    // The error catalog must be complete before the first request is served
    match catalog::verify() {
        Ok(catalog) => info!("error catalog ready ({} entries)", catalog.entries().count()),
        Err(e) => {
            error!("error catalog is invalid: {}", e);
            return ExitCode::FAILURE;
        }
    }

    // --- Dependency Injection Setup ---
    let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::default());
    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new(
        config.session_capacity,
        config.session_ttl_seconds,
    ));
    let user_service: Arc<dyn UserService> = Arc::new(DefaultUserService::new(user_repo));

    let app = create_app(AppState {
        user_service,
        sessions,
    });

    let listener = match TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.bind_addr, e);
            return ExitCode::FAILURE;
        }
    };
    info!("Profile API listening on {}", config.bind_addr);

    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        error!("Server failed to run: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
