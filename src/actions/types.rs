//! Action result and error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::macros::MacroError;
use crate::moderation::PlatformError;

/// Outcome reported back to the invoking moderator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
}

impl ActionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Transport failures that abort an action
#[derive(Debug, Error)]
pub enum ActionError {
    /// A macro engine failure that is not the moderator's to fix
    #[error(transparent)]
    Macro(#[from] MacroError),

    #[error("Moderation platform error: {0}")]
    Platform(#[from] PlatformError),
}

/// Actions exposed to moderators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    RemovePostWithMacro,
    RemoveCommentWithMacro,
    SetRemovalMessage,
    SetBanMessage,
    SetCustomMacro,
}

impl ActionKind {
    /// Metric label and log name
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::RemovePostWithMacro => "remove_post_with_macro",
            ActionKind::RemoveCommentWithMacro => "remove_comment_with_macro",
            ActionKind::SetRemovalMessage => "set_removal_message",
            ActionKind::SetBanMessage => "set_ban_message",
            ActionKind::SetCustomMacro => "set_custom_macro",
        }
    }
}
