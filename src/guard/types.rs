/// Where to send authenticated users who land on a public page
pub const HOME_PATH: &str = "/";

/// Where to send anonymous users who request a protected page
pub const LOGIN_PATH: &str = "/login";

/// Where the guard is being evaluated.
///
/// The server rendering pass never bounces a logged-in user away from a
/// public page; only the client does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    Server,
    Client,
}

/// Result of evaluating a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(&'static str),
}

impl GuardOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardOutcome::Allow)
    }
}
