use axum::{body::Bytes, extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use tracing::{info, instrument, warn};

use super::{
    credentials,
    token::{generate_token, session_cookie},
    types::{LoginRequest, LoginResponse},
};
use crate::shared::{AppError, AppState};

/// HTTP handler for logging in with the demo account
///
/// POST /api/auth/login
/// The body is read as JSON whatever its content type. Sets the `access_token` cookie on success
#[instrument(name = "login", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    // An unreadable body is reported the same way as missing fields
    let request = LoginRequest::from_body(&body).unwrap_or_else(|e| {
        warn!(error = %e, "Login body could not be parsed");
        LoginRequest::default()
    });

    if !request.has_credentials() {
        warn!("Login attempt with missing email or password");
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let email = request.email.as_ref().and_then(|v| v.as_str());
    let password = request.password.as_ref().and_then(|v| v.as_str());

    let email = match (email, password) {
        (Some(email), Some(password)) if credentials::verify(email, password) => email,
        _ => {
            warn!(email = ?email, "Login rejected: invalid credentials");
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }
    };

    let cookie = session_cookie(generate_token(), state.config.secure_cookies());

    info!(
        email = %email,
        secure_cookie = state.config.secure_cookies(),
        "Login successful, session cookie issued"
    );

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            success: true,
            message: "Login successful".to_string(),
        }),
    ))
}
