// Public API - what other modules can use
pub use middleware::route_guard;
pub use rules::{evaluate, is_public_route, PUBLIC_ROUTES};
pub use types::{ExecutionContext, GuardOutcome, HOME_PATH, LOGIN_PATH};

// Internal modules
mod middleware;
mod rules;
mod types;
