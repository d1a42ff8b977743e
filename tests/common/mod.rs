//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use removal_macros::actions::ModerationActions;
use removal_macros::moderation::{
    normalize_id, Comment, ModerationPlatform, Moderator, PlatformError, PlatformResult, Post,
    ReplyRef,
};
use removal_macros::store::MemoryBindingStore;

/// A platform call as observed by [`RecordingPlatform`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    Reply { parent: String, text: String },
    Distinguish { comment: String, sticky: bool },
    Remove { fullname: String, spam: bool },
}

/// In-memory moderation platform that records every write
pub struct RecordingPlatform {
    moderator: String,
    posts: HashMap<String, Post>,
    comments: HashMap<String, Comment>,
    calls: Mutex<Vec<PlatformCall>>,
    reads: Mutex<usize>,
    fail_remove: bool,
}

impl RecordingPlatform {
    pub fn new(moderator: &str) -> Self {
        Self {
            moderator: moderator.to_string(),
            posts: HashMap::new(),
            comments: HashMap::new(),
            calls: Mutex::new(Vec::new()),
            reads: Mutex::new(0),
            fail_remove: false,
        }
    }

    pub fn with_post(mut self, post: Post) -> Self {
        self.posts.insert(post.id.clone(), post);
        self
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.insert(comment.id.clone(), comment);
        self
    }

    /// Make every `remove` call fail with a 500 from the platform
    pub fn failing_remove(mut self) -> Self {
        self.fail_remove = true;
        self
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of read calls (user, post and comment lookups)
    pub fn reads(&self) -> usize {
        *self.reads.lock().unwrap()
    }

    fn record(&self, call: PlatformCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn record_read(&self) {
        *self.reads.lock().unwrap() += 1;
    }
}

#[async_trait]
impl ModerationPlatform for RecordingPlatform {
    async fn current_user(&self) -> PlatformResult<Moderator> {
        self.record_read();
        Ok(Moderator {
            username: self.moderator.clone(),
        })
    }

    async fn get_post(&self, id: &str) -> PlatformResult<Post> {
        self.record_read();
        let id = normalize_id(id, "t3_");
        self.posts
            .get(id)
            .cloned()
            .ok_or_else(|| PlatformError::NotFound(format!("t3_{}", id)))
    }

    async fn get_comment(&self, id: &str) -> PlatformResult<Comment> {
        self.record_read();
        let id = normalize_id(id, "t1_");
        self.comments
            .get(id)
            .cloned()
            .ok_or_else(|| PlatformError::NotFound(format!("t1_{}", id)))
    }

    async fn reply(&self, parent_fullname: &str, text: &str) -> PlatformResult<ReplyRef> {
        self.record(PlatformCall::Reply {
            parent: parent_fullname.to_string(),
            text: text.to_string(),
        });
        Ok(ReplyRef {
            id: "reply1".to_string(),
            fullname: "t1_reply1".to_string(),
        })
    }

    async fn distinguish(&self, comment_fullname: &str, sticky: bool) -> PlatformResult<()> {
        self.record(PlatformCall::Distinguish {
            comment: comment_fullname.to_string(),
            sticky,
        });
        Ok(())
    }

    async fn remove(&self, fullname: &str, spam: bool) -> PlatformResult<()> {
        self.record(PlatformCall::Remove {
            fullname: fullname.to_string(),
            spam,
        });
        if self.fail_remove {
            return Err(PlatformError::Api {
                status: 500,
                message: "internal error".to_string(),
            });
        }
        Ok(())
    }
}

pub fn spam_post() -> Post {
    Post {
        id: "abc123".to_string(),
        title: Some("Spam post".to_string()),
        body: Some("Buy now!".to_string()),
        author: Some("spammer".to_string()),
        subreddit: Some("rust".to_string()),
        permalink: Some("/r/rust/comments/abc123/spam_post/".to_string()),
        url: Some("https://shop.example.com/deal".to_string()),
    }
}

pub fn rude_comment() -> Comment {
    Comment {
        id: "c42".to_string(),
        body: Some("rude words".to_string()),
        author: Some("troll".to_string()),
        subreddit: Some("rust".to_string()),
        permalink: Some("/r/rust/comments/abc123/spam_post/c42/".to_string()),
    }
}

/// Actions over a fresh memory store and a platform holding the sample post and comment
pub fn test_actions(
    entries: &[(&str, &str)],
) -> (ModerationActions, Arc<MemoryBindingStore>, Arc<RecordingPlatform>) {
    let store = Arc::new(MemoryBindingStore::with_entries(entries.iter().copied()));
    let platform = Arc::new(
        RecordingPlatform::new("AutoModBot")
            .with_post(spam_post())
            .with_comment(rude_comment()),
    );
    let actions = ModerationActions::new(store.clone(), platform.clone());
    (actions, store, platform)
}
