//! Action handlers: remove-with-macro and the configuration actions

use std::sync::Arc;

use crate::macros::{MacroError, MacroRegistry, MacroRenderer, TemplateKind};
use crate::metrics::ActionMetrics;
use crate::moderation::{ModerationPlatform, Target, TargetKind};
use crate::store::BindingStore;

use super::types::{ActionError, ActionKind, ActionResult};

/// Split a macro error into a moderator-facing rejection or a transport failure
fn into_outcome(err: MacroError) -> Result<ActionResult, ActionError> {
    if err.is_user_facing() {
        Ok(ActionResult::failure(err.to_string()))
    } else {
        Err(ActionError::Macro(err))
    }
}

fn record(
    action: ActionKind,
    result: Result<ActionResult, ActionError>,
) -> Result<ActionResult, ActionError> {
    match &result {
        Ok(outcome) if outcome.success => {
            ActionMetrics::record_success(action.as_str());
            tracing::info!(action = action.as_str(), "Action completed");
        }
        Ok(outcome) => {
            ActionMetrics::record_rejected(action.as_str());
            tracing::info!(
                action = action.as_str(),
                message = %outcome.message,
                "Action rejected"
            );
        }
        Err(e) => {
            ActionMetrics::record_failed(action.as_str());
            tracing::error!(action = action.as_str(), error = %e, "Action failed");
        }
    }
    result
}

/// Moderator actions over an injected binding store and moderation platform.
pub struct ModerationActions {
    registry: MacroRegistry,
    renderer: MacroRenderer,
    platform: Arc<dyn ModerationPlatform>,
}

impl ModerationActions {
    pub fn new(store: Arc<dyn BindingStore>, platform: Arc<dyn ModerationPlatform>) -> Self {
        Self {
            registry: MacroRegistry::new(store.clone()),
            renderer: MacroRenderer::new(store),
            platform,
        }
    }

    pub fn registry(&self) -> &MacroRegistry {
        &self.registry
    }

    pub fn renderer(&self) -> &MacroRenderer {
        &self.renderer
    }

    /// Remove a post and leave a stickied, distinguished removal reply
    pub async fn remove_post_with_macro(&self, post_id: &str) -> Result<ActionResult, ActionError> {
        let result = self.remove_with_macro(TargetKind::Submission, post_id).await;
        record(ActionKind::RemovePostWithMacro, result)
    }

    /// Remove a comment and leave a distinguished removal reply
    pub async fn remove_comment_with_macro(
        &self,
        comment_id: &str,
    ) -> Result<ActionResult, ActionError> {
        let result = self.remove_with_macro(TargetKind::Comment, comment_id).await;
        record(ActionKind::RemoveCommentWithMacro, result)
    }

    pub async fn set_removal_message(&self, body: &str) -> Result<ActionResult, ActionError> {
        let result = self.set_message(TemplateKind::Removal, body).await;
        record(ActionKind::SetRemovalMessage, result)
    }

    pub async fn set_ban_message(&self, body: &str) -> Result<ActionResult, ActionError> {
        let result = self.set_message(TemplateKind::Ban, body).await;
        record(ActionKind::SetBanMessage, result)
    }

    pub async fn set_custom_macro(
        &self,
        name: &str,
        content: &str,
    ) -> Result<ActionResult, ActionError> {
        let result = match self.registry.set_custom_macro(name, content).await {
            Ok(set) => {
                ActionMetrics::record_custom_macro_set();
                Ok(ActionResult::success(format!(
                    "Success! I've set {} to {}",
                    set.name, set.value
                )))
            }
            Err(e) => into_outcome(e),
        };
        record(ActionKind::SetCustomMacro, result)
    }

    async fn fetch_target(&self, kind: TargetKind, id: &str) -> Result<Target, ActionError> {
        let target = match kind {
            TargetKind::Submission => Target::Post(self.platform.get_post(id).await?),
            TargetKind::Comment => Target::Comment(self.platform.get_comment(id).await?),
        };
        Ok(target)
    }

    /// Template → target → moderator → render → reply → distinguish → remove.
    ///
    /// The template is checked first so an unconfigured service makes no platform calls.
    async fn remove_with_macro(
        &self,
        kind: TargetKind,
        id: &str,
    ) -> Result<ActionResult, ActionError> {
        let template = match self.registry.template(TemplateKind::Removal).await {
            Ok(Some(template)) => template,
            Ok(None) => {
                return into_outcome(MacroError::TemplateNotConfigured(TemplateKind::Removal))
            }
            Err(e) => return into_outcome(e),
        };

        let target = self.fetch_target(kind, id).await?;
        let moderator = self.platform.current_user().await?;
        let defaults = target.default_bindings(&moderator.username);

        let rendered = match self.renderer.render(&template, &defaults).await {
            Ok(rendered) => rendered,
            Err(e) => return into_outcome(e),
        };

        if !rendered.unresolved.is_empty() {
            tracing::warn!(
                target_fullname = %target.fullname(),
                unresolved = ?rendered.unresolved,
                "Removal reply sent with unresolved macros"
            );
        }

        let reply = self
            .platform
            .reply(&target.fullname(), &rendered.text)
            .await?;
        self.platform
            .distinguish(&reply.fullname, target.sticky_reply())
            .await?;
        self.platform.remove(&target.fullname(), false).await?;

        Ok(ActionResult::success(format!(
            "Success! The {} was removed, and a reply was sent.",
            kind.noun()
        )))
    }

    async fn set_message(
        &self,
        kind: TemplateKind,
        body: &str,
    ) -> Result<ActionResult, ActionError> {
        match self.registry.set_template(kind, body).await {
            Ok(()) => Ok(ActionResult::success(format!(
                "Success! I've set the {} message to {}",
                kind, body
            ))),
            Err(e) => into_outcome(e),
        }
    }
}
