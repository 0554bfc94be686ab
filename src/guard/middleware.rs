use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{info, instrument};

use super::{
    rules::evaluate,
    types::{ExecutionContext, GuardOutcome},
};
use crate::session::token_from_jar;

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

/// Route guard middleware for page navigations, evaluated in the server rendering context.
/// API routes are not page navigations and pass straight through.
/// Usage: .layer(middleware::from_fn(guard::route_guard))
#[instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn route_guard(req: Request, next: Next) -> Response {
    let path = req.uri().path();
    if is_api_path(path) {
        return next.run(req).await;
    }

    let jar = CookieJar::from_headers(req.headers());
    let token = token_from_jar(&jar);

    match evaluate(path, token.as_deref(), ExecutionContext::Server) {
        GuardOutcome::Allow => next.run(req).await,
        GuardOutcome::Redirect(to) => {
            info!(redirect_to = to, "Navigation redirected by route guard");
            Redirect::temporary(to).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use tower::ServiceExt; // for `oneshot`

    fn app() -> Router {
        Router::new()
            .route("/api/example", get(|| async { "api" }))
            .fallback(|| async { "page" })
            .layer(middleware::from_fn(route_guard))
    }

    async fn send(path: &str, cookie: Option<&str>) -> axum::response::Response {
        let mut builder = Request::builder().uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[test]
    fn test_is_api_path() {
        assert!(is_api_path("/api"));
        assert!(is_api_path("/api/auth/login"));
        assert!(!is_api_path("/apiary"));
        assert!(!is_api_path("/"));
    }

    #[tokio::test]
    async fn test_protected_page_without_cookie_redirects_to_login() {
        let response = send("/dashboard", None).await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }

    #[tokio::test]
    async fn test_protected_page_with_cookie_is_served() {
        let response = send("/dashboard", Some("access_token=whatever")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_public_page_with_cookie_is_served_on_server_pass() {
        let response = send("/login", Some("access_token=whatever")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_empty_cookie_is_treated_as_logged_out() {
        let response = send("/", Some("access_token=")).await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }

    #[tokio::test]
    async fn test_api_routes_bypass_guard() {
        let response = send("/api/example", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
