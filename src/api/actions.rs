//! Moderator action endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::actions::ActionResult;
use crate::error::{AppError, Result};
use crate::macros::{MacroBindings, RenderedMessage, TemplateKind};
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct SetMessageRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SetCustomMacroRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    /// Template to preview; the stored removal body when absent
    pub template: Option<String>,
    /// Values for the reserved default macros; other names are ignored
    #[serde(default)]
    pub defaults: MacroBindings,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub kind: TemplateKind,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CustomMacroResponse {
    pub name: String,
    pub content: String,
}

/// POST /api/v1/posts/{id}/remove-with-macro
#[tracing::instrument(name = "http.remove_post_with_macro", skip(state))]
pub async fn remove_post_with_macro(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ActionResult>> {
    Ok(Json(state.actions.remove_post_with_macro(&id).await?))
}

/// POST /api/v1/comments/{id}/remove-with-macro
#[tracing::instrument(name = "http.remove_comment_with_macro", skip(state))]
pub async fn remove_comment_with_macro(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ActionResult>> {
    Ok(Json(state.actions.remove_comment_with_macro(&id).await?))
}

/// PUT /api/v1/messages/{kind}
#[tracing::instrument(
    name = "http.set_message",
    skip(state, request),
    fields(length = request.message.len())
)]
pub async fn set_message(
    State(state): State<AppState>,
    Path(kind): Path<TemplateKind>,
    Json(request): Json<SetMessageRequest>,
) -> Result<Json<ActionResult>> {
    let result = match kind {
        TemplateKind::Removal => state.actions.set_removal_message(&request.message).await?,
        TemplateKind::Ban => state.actions.set_ban_message(&request.message).await?,
    };
    Ok(Json(result))
}

/// GET /api/v1/messages/{kind}
#[tracing::instrument(name = "http.get_message", skip(state))]
pub async fn get_message(
    State(state): State<AppState>,
    Path(kind): Path<TemplateKind>,
) -> Result<Json<MessageResponse>> {
    let message = state
        .actions
        .registry()
        .template(kind)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("The {} message has not been set", kind)))?;

    Ok(Json(MessageResponse { kind, message }))
}

/// PUT /api/v1/macros
#[tracing::instrument(
    name = "http.set_custom_macro",
    skip(state, request),
    fields(macro_name = %request.name)
)]
pub async fn set_custom_macro(
    State(state): State<AppState>,
    Json(request): Json<SetCustomMacroRequest>,
) -> Result<Json<ActionResult>> {
    let result = state
        .actions
        .set_custom_macro(&request.name, &request.content)
        .await?;
    Ok(Json(result))
}

/// GET /api/v1/macros/{name}
#[tracing::instrument(name = "http.get_custom_macro", skip(state))]
pub async fn get_custom_macro(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CustomMacroResponse>> {
    match state.actions.registry().custom_macro(&name).await? {
        Some(content) => Ok(Json(CustomMacroResponse { name, content })),
        None => Err(AppError::NotFound(format!("Macro '{}' is not set", name))),
    }
}

/// POST /api/v1/render - Preview a template without side effects
#[tracing::instrument(name = "http.render_preview", skip(state, request))]
pub async fn render_preview(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Json<RenderedMessage>> {
    let renderer = state.actions.renderer();
    // Custom macros always come from the store, as in a live removal
    let defaults = request.defaults.only_reserved();
    let rendered = match request.template {
        Some(template) => renderer.render(&template, &defaults).await?,
        None => {
            renderer
                .render_stored(TemplateKind::Removal, &defaults)
                .await?
        }
    };
    Ok(Json(rendered))
}
