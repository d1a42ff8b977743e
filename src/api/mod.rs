//! API layer - HTTP endpoint handlers organized by domain.

mod actions;
mod health;
mod metrics;
mod routes;

// Re-export all handlers for use in server/app.rs
pub use actions::{
    get_custom_macro, get_message, remove_comment_with_macro, remove_post_with_macro,
    render_preview, set_custom_macro, set_message,
};
pub use actions::{
    CustomMacroResponse, MessageResponse, RenderRequest, SetCustomMacroRequest, SetMessageRequest,
};
pub use health::{health, HealthResponse};
pub use metrics::prometheus_metrics;
pub use routes::api_routes;
