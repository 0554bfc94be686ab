// Public API - what other modules can use
pub use handlers::page_shell;

// Internal modules
mod handlers;
mod title;
