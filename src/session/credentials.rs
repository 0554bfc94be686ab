/// The single demo account accepted by the login endpoint
const DEMO_EMAIL: &str = "admin@example.com";
const DEMO_PASSWORD: &str = "password123";

/// Exact, case-sensitive comparison against the demo account
pub(super) fn verify(email: &str, password: &str) -> bool {
    email == DEMO_EMAIL && password == DEMO_PASSWORD
}
