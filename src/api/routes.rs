use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::server::{api_key_auth, AppState};

use super::actions::{
    get_custom_macro, get_message, remove_comment_with_macro, remove_post_with_macro,
    render_preview, set_custom_macro, set_message,
};
use super::health::health;
use super::metrics::prometheus_metrics;

pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health & Metrics
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        // Moderator actions
        .nest(
            "/api/v1",
            Router::new()
                // Remove with macro
                .route("/posts/{id}/remove-with-macro", post(remove_post_with_macro))
                .route(
                    "/comments/{id}/remove-with-macro",
                    post(remove_comment_with_macro),
                )
                // Message templates
                .route("/messages/{kind}", get(get_message).put(set_message))
                // Custom macros
                .route("/macros", put(set_custom_macro))
                .route("/macros/{name}", get(get_custom_macro))
                // Preview
                .route("/render", post(render_preview))
                .route_layer(middleware::from_fn_with_state(state, api_key_auth)),
        )
}
