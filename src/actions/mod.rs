//! Moderator actions.
//!
//! Each action returns an `ActionResult` shown to the moderator. Input problems
//! and a missing removal template come back as `success: false` results; store
//! and platform failures are returned as `ActionError`.

mod handlers;
mod types;

pub use handlers::ModerationActions;
pub use types::{ActionError, ActionKind, ActionResult};
