//! Moderation platform trait definition

use async_trait::async_trait;
use thiserror::Error;

use super::types::{Comment, Moderator, Post, ReplyRef};

/// Errors returned by a moderation platform.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("Permission denied: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited by the moderation platform")]
    RateLimited,

    #[error("Platform API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

pub type PlatformResult<T> = Result<T, PlatformError>;

/// Remote moderation operations.
///
/// Every call is a single attempt; failures are returned to the caller.
#[async_trait]
pub trait ModerationPlatform: Send + Sync {
    /// The account the service acts as
    async fn current_user(&self) -> PlatformResult<Moderator>;

    /// Fetch a post by id (with or without the `t3_` prefix)
    async fn get_post(&self, id: &str) -> PlatformResult<Post>;

    /// Fetch a comment by id (with or without the `t1_` prefix)
    async fn get_comment(&self, id: &str) -> PlatformResult<Comment>;

    /// Reply to a post or comment identified by fullname
    async fn reply(&self, parent_fullname: &str, text: &str) -> PlatformResult<ReplyRef>;

    /// Distinguish a comment as a moderator, optionally stickying it
    async fn distinguish(&self, comment_fullname: &str, sticky: bool) -> PlatformResult<()>;

    /// Remove a post or comment, optionally flagging it as spam
    async fn remove(&self, fullname: &str, spam: bool) -> PlatformResult<()>;
}
