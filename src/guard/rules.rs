use tracing::{debug, instrument};

use super::types::{ExecutionContext, GuardOutcome, HOME_PATH, LOGIN_PATH};

/// Paths reachable without a session token. Everything else is protected.
pub const PUBLIC_ROUTES: [&str; 3] = ["/login", "/register", "/forgot-password"];

/// Exact match against the public route set
pub fn is_public_route(path: &str) -> bool {
    PUBLIC_ROUTES.contains(&path)
}

/// Decides whether a navigation to `path` may proceed.
///
/// Only the presence of a non-empty token is considered, never its content.
#[instrument(skip(token))]
pub fn evaluate(path: &str, token: Option<&str>, context: ExecutionContext) -> GuardOutcome {
    let has_token = token.is_some_and(|value| !value.is_empty());

    let outcome = if is_public_route(path) {
        if has_token && context == ExecutionContext::Client {
            GuardOutcome::Redirect(HOME_PATH)
        } else {
            GuardOutcome::Allow
        }
    } else if has_token {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Redirect(LOGIN_PATH)
    };

    debug!(has_token, outcome = ?outcome, "Route guard evaluated");

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/")]
    #[case("/dashboard")]
    #[case("/settings/profile")]
    #[case("/login/")] // trailing slash is not the public path
    #[case("/Login")]
    fn test_protected_path_without_token_redirects_to_login(#[case] path: &str) {
        for context in [ExecutionContext::Server, ExecutionContext::Client] {
            assert_eq!(
                evaluate(path, None, context),
                GuardOutcome::Redirect("/login")
            );
        }
    }

    #[rstest]
    #[case("/")]
    #[case("/dashboard")]
    #[case("/settings/profile")]
    fn test_protected_path_with_token_is_allowed(#[case] path: &str) {
        for context in [ExecutionContext::Server, ExecutionContext::Client] {
            assert_eq!(
                evaluate(path, Some("example-token-1"), context),
                GuardOutcome::Allow
            );
        }
    }

    #[rstest]
    #[case("/login")]
    #[case("/register")]
    #[case("/forgot-password")]
    fn test_public_path_with_token_depends_on_context(#[case] path: &str) {
        assert_eq!(
            evaluate(path, Some("anything"), ExecutionContext::Client),
            GuardOutcome::Redirect("/")
        );
        assert_eq!(
            evaluate(path, Some("anything"), ExecutionContext::Server),
            GuardOutcome::Allow
        );
    }

    #[rstest]
    #[case("/login")]
    #[case("/register")]
    #[case("/forgot-password")]
    fn test_public_path_without_token_is_allowed(#[case] path: &str) {
        for context in [ExecutionContext::Server, ExecutionContext::Client] {
            assert!(evaluate(path, None, context).is_allowed());
        }
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        assert_eq!(
            evaluate("/dashboard", Some(""), ExecutionContext::Server),
            GuardOutcome::Redirect("/login")
        );
        assert_eq!(
            evaluate("/login", Some(""), ExecutionContext::Client),
            GuardOutcome::Allow
        );
    }

    #[test]
    fn test_token_content_is_not_inspected() {
        assert!(evaluate("/dashboard", Some("not-a-real-token"), ExecutionContext::Client)
            .is_allowed());
    }
}
