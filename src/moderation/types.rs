//! Moderation targets and their default macro bindings

use serde::{Deserialize, Serialize};

use crate::macros::MacroBindings;

/// Value bound to a default macro when the target has no data for it
pub const UNDEFINED_VALUE: &str = "undefined";

const PERMALINK_BASE: &str = "https://www.reddit.com/";

/// Strip a type prefix such as `t3_` from an id, if present
pub fn normalize_id<'a>(id: &'a str, prefix: &str) -> &'a str {
    id.strip_prefix(prefix).unwrap_or(id)
}

/// A submission as returned by the platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Self-text body
    #[serde(default, rename = "selftext")]
    pub body: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub subreddit: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
    /// Link target (equals the permalink for self posts)
    #[serde(default)]
    pub url: Option<String>,
}

impl Post {
    pub fn fullname(&self) -> String {
        format!("t3_{}", self.id)
    }
}

/// A comment as returned by the platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub subreddit: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
}

impl Comment {
    pub fn fullname(&self) -> String {
        format!("t1_{}", self.id)
    }
}

/// The acting moderator account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Moderator {
    #[serde(rename = "name")]
    pub username: String,
}

/// Reference to a comment created by `reply`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReplyRef {
    pub id: String,
    /// Fullname (`t1_...`) used for follow-up calls
    #[serde(rename = "name")]
    pub fullname: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Submission,
    Comment,
}

impl TargetKind {
    /// Value of the `kind` default macro
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Submission => "submission",
            TargetKind::Comment => "comment",
        }
    }

    /// Noun used in moderator-facing messages
    pub fn noun(&self) -> &'static str {
        match self {
            TargetKind::Submission => "post",
            TargetKind::Comment => "comment",
        }
    }
}

/// Content a moderation action applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Post(Post),
    Comment(Comment),
}

fn or_undefined(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => UNDEFINED_VALUE.to_string(),
    }
}

fn permalink_url(permalink: Option<&str>) -> String {
    match permalink {
        Some(p) if !p.is_empty() => format!("{}{}", PERMALINK_BASE, p.trim_start_matches('/')),
        _ => UNDEFINED_VALUE.to_string(),
    }
}

/// Host of a link, or the link itself when it does not parse as a URL
fn link_domain(link: Option<&str>) -> String {
    match link {
        Some(l) if !l.is_empty() => url::Url::parse(l)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| l.to_string()),
        _ => UNDEFINED_VALUE.to_string(),
    }
}

impl Target {
    pub fn kind(&self) -> TargetKind {
        match self {
            Target::Post(_) => TargetKind::Submission,
            Target::Comment(_) => TargetKind::Comment,
        }
    }

    pub fn fullname(&self) -> String {
        match self {
            Target::Post(post) => post.fullname(),
            Target::Comment(comment) => comment.fullname(),
        }
    }

    /// Whether the removal reply is stickied when distinguished
    pub fn sticky_reply(&self) -> bool {
        matches!(self, Target::Post(_))
    }

    /// Default macro bindings for this target, acted on by `moderator`
    pub fn default_bindings(&self, moderator: &str) -> MacroBindings {
        let mut bindings = MacroBindings::new();
        bindings.insert("kind", self.kind().as_str());
        bindings.insert("mod", or_undefined(Some(moderator)));

        match self {
            Target::Post(post) => {
                bindings.insert("submission", or_undefined(post.body.as_deref()));
                bindings.insert("subreddit", or_undefined(post.subreddit.as_deref()));
                bindings.insert("author", or_undefined(post.author.as_deref()));
                bindings.insert("title", or_undefined(post.title.as_deref()));
                bindings.insert("url", permalink_url(post.permalink.as_deref()));
                bindings.insert("domain", link_domain(post.url.as_deref()));
                bindings.insert("link", or_undefined(post.url.as_deref()));
            }
            Target::Comment(comment) => {
                bindings.insert("submission", or_undefined(comment.body.as_deref()));
                bindings.insert("subreddit", or_undefined(comment.subreddit.as_deref()));
                bindings.insert("author", or_undefined(comment.author.as_deref()));
                bindings.insert("title", UNDEFINED_VALUE);
                bindings.insert("url", permalink_url(comment.permalink.as_deref()));
                bindings.insert("domain", UNDEFINED_VALUE);
                bindings.insert("link", UNDEFINED_VALUE);
            }
        }

        bindings
    }
}
