// Library crate for the OnePanel server
// This file exposes the public API for integration tests

pub mod config;
pub mod example;
pub mod guard;
pub mod pages;
pub mod session;
pub mod shared;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

// Re-export commonly used types for easier access in tests
pub use config::{AppConfig, ConfigError, Environment};
pub use guard::{evaluate, ExecutionContext, GuardOutcome};
pub use shared::{AppError, AppState};

/// Builds the full application router.
///
/// API routes under `/api` are gated per route and unknown ones answer a JSON 404;
/// every other path is a page navigation answered by the page shell behind the route guard.
pub fn build_router(app_state: AppState) -> Router {
    let protected_api = Router::new()
        .route("/example", get(example::example))
        .route_layer(middleware::from_fn(session::session_auth));

    let api = Router::new()
        .route("/auth/login", post(session::login))
        .merge(protected_api)
        .fallback(shared::api_not_found);

    Router::new()
        .nest("/api", api)
        .fallback(pages::page_shell)
        .layer(middleware::from_fn(guard::route_guard))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
