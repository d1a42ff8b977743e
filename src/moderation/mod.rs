//! Moderation platform integration.
//!
//! - `ModerationPlatform`: the remove/reply/distinguish capability used by actions
//! - `RedditClient`: implementation against the Reddit OAuth API
//! - `Target`: the post or comment an action applies to, and its default macros

mod platform;
mod reddit;
mod types;

pub use platform::{ModerationPlatform, PlatformError, PlatformResult};
pub use reddit::RedditClient;
pub use types::{
    normalize_id, Comment, Moderator, Post, ReplyRef, Target, TargetKind, UNDEFINED_VALUE,
};
