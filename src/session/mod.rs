// Public API - what other modules can use
pub use handlers::login;
pub use middleware::session_auth;
pub use token::{token_from_jar, SESSION_COOKIE_NAME, SESSION_MAX_AGE_DAYS};
pub use types::{LoginRequest, LoginResponse, SessionToken};

// Internal modules
mod credentials;
mod handlers;
mod middleware;
mod token;
mod types;
