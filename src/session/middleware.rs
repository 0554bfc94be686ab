use axum::{extract::Request, middleware::Next, response::Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::{info, instrument, warn};

use super::{token::token_from_jar, types::SessionToken};
use crate::shared::AppError;

/// Session cookie middleware - requires a non-empty `access_token` cookie and adds SessionToken to request.
/// Usage: .route_layer(middleware::from_fn(session::session_auth))
/// Handlers can then extract Extension(token): Extension<SessionToken>.
///
/// Only presence is checked. Any non-empty value is accepted.
#[instrument(skip_all)]
pub async fn session_auth(mut req: Request, next: Next) -> Result<Response, AppError> {
    let jar = CookieJar::from_headers(req.headers());

    let Some(token) = token_from_jar(&jar) else {
        warn!(uri = %req.uri(), "Missing session cookie in request");
        return Err(AppError::Unauthorized("Unauthorized".to_string()));
    };

    info!(uri = %req.uri(), "Session cookie present, continuing");

    req.extensions_mut().insert(SessionToken(token));

    Ok(next.run(req).await)
}
