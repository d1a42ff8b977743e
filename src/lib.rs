// Infrastructure layer (shared components)
pub mod infrastructure;

// Re-export infrastructure modules at the crate root
pub use infrastructure::config;
pub use infrastructure::error;
pub use infrastructure::metrics;
pub use infrastructure::redis;

// Domain layer (business logic)
pub mod macros;
pub mod moderation;
pub mod store;

// Application layer
pub mod actions;
pub mod api;
pub mod server;
