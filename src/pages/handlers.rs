use axum::{extract::State, http::Uri, response::Html};
use tracing::{debug, instrument};

use super::title::{escape_html, page_title};
use crate::shared::AppState;

const THEME_COLOR: &str = "#0f172a";

/// Fallback handler for page navigations that passed the route guard
///
/// GET /{any non-api path}
/// Returns the HTML shell the client app mounts into
#[instrument(name = "page_shell", skip(state))]
pub async fn page_shell(State(state): State<AppState>, uri: Uri) -> Html<String> {
    let title = escape_html(&page_title(uri.path(), &state.config.app_name));

    debug!(title = %title, "Rendering page shell");

    Html(format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <meta name=\"theme-color\" content=\"{THEME_COLOR}\">\n\
         <link rel=\"icon\" type=\"image/x-icon\" href=\"/favicon.ico\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body><div id=\"app\"></div></body>\n\
         </html>\n"
    ))
}
