use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use time::Duration;
use tracing::{debug, instrument};

/// Cookie carrying the session token
pub const SESSION_COOKIE_NAME: &str = "access_token";

/// Cookie lifetime; the server keeps no expiry of its own
pub const SESSION_MAX_AGE_DAYS: i64 = 7;

const TOKEN_PREFIX: &str = "example-token-";

/// Issues a new session token.
///
/// The value is a fixed prefix plus the current unix time in milliseconds. It is
/// neither random nor verifiable and only proves that a login happened.
pub fn generate_token() -> String {
    format!("{}{}", TOKEN_PREFIX, Utc::now().timestamp_millis())
}

/// Builds the `HttpOnly`, `SameSite=Strict` session cookie. `Secure` is set only when asked.
#[instrument(skip(token))]
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    debug!(
        max_age_days = SESSION_MAX_AGE_DAYS,
        "Building session cookie"
    );

    Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .max_age(Duration::days(SESSION_MAX_AGE_DAYS))
        .build()
}

/// Returns the session token if the cookie is present and non-empty
pub fn token_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_owned())
        .filter(|value| !value.is_empty())
}
