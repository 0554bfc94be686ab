use axum::{extract::State, Extension, Json};
use chrono::{SecondsFormat, Utc};
use tracing::{info, instrument};

use super::types::ExampleResponse;
use crate::session::SessionToken;
use crate::shared::AppState;

/// HTTP handler for the example protected endpoint
///
/// GET /api/example
/// Must sit behind `session::session_auth`; echoes the configured app name
#[instrument(name = "example", skip_all)]
pub async fn example(
    State(state): State<AppState>,
    Extension(_token): Extension<SessionToken>,
) -> Json<ExampleResponse> {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    info!(app_name = %state.config.app_name, "Serving example response");

    Json(ExampleResponse {
        message: "Example API response".to_string(),
        app_name: state.config.app_name.clone(),
        timestamp,
    })
}
