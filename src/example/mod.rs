// Public API - what other modules can use
pub use handlers::example;
pub use types::ExampleResponse;

// Internal modules
mod handlers;
mod types;
