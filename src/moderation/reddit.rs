//! RedditClient -- [`ModerationPlatform`] implementation for the Reddit OAuth API.
//!
//! The access token is wrapped in [`secrecy::SecretString`] and is only exposed
//! when building the Authorization header.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::RedditConfig;

use super::platform::{ModerationPlatform, PlatformError, PlatformResult};
use super::types::{normalize_id, Comment, Moderator, Post, ReplyRef};

#[derive(Debug, Deserialize)]
struct Listing<T> {
    data: ListingData<T>,
}

#[derive(Debug, Deserialize)]
struct ListingData<T> {
    children: Vec<Thing<T>>,
}

#[derive(Debug, Deserialize)]
struct Thing<T> {
    data: T,
}

/// Envelope returned by endpoints called with `api_type=json`
#[derive(Debug, Deserialize)]
struct JsonEnvelope<T> {
    json: JsonBody<T>,
}

#[derive(Debug, Deserialize)]
struct JsonBody<T> {
    #[serde(default)]
    errors: Vec<serde_json::Value>,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct CommentData {
    things: Vec<Thing<ReplyRef>>,
}

/// Flatten `[["CODE", "message", "field"], ...]` into a readable string
fn describe_errors(errors: &[serde_json::Value]) -> String {
    errors
        .iter()
        .map(|err| match err {
            serde_json::Value::Array(parts) => parts
                .iter()
                .filter_map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(": "),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn into_result<T>(envelope: JsonEnvelope<T>) -> PlatformResult<Option<T>> {
    if !envelope.json.errors.is_empty() {
        return Err(PlatformError::Api {
            status: 200,
            message: describe_errors(&envelope.json.errors),
        });
    }
    Ok(envelope.json.data)
}

/// Reddit moderation client.
///
/// Intentionally not `Debug` so the token can never end up in logs.
pub struct RedditClient {
    client: reqwest::Client,
    access_token: SecretString,
    base_url: String,
}

impl RedditClient {
    pub fn new(config: &RedditConfig) -> PlatformResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            access_token: config.access_token.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check_status(
        response: reqwest::Response,
        subject: &str,
    ) -> PlatformResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = %status, subject = %subject, "Reddit API request failed");

        Err(match status.as_u16() {
            401 => PlatformError::Unauthorized,
            403 => PlatformError::Forbidden(subject.to_string()),
            404 => PlatformError::NotFound(subject.to_string()),
            429 => PlatformError::RateLimited,
            code => PlatformError::Api {
                status: code,
                message: body,
            },
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        subject: &str,
    ) -> PlatformResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(self.access_token.expose_secret())
            .query(query)
            .send()
            .await?;

        let response = Self::check_status(response, subject).await?;
        response
            .json()
            .await
            .map_err(|e| PlatformError::UnexpectedResponse(format!("{path}: {e}")))
    }

    async fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
        subject: &str,
    ) -> PlatformResult<reqwest::Response> {
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(self.access_token.expose_secret())
            .form(form)
            .send()
            .await?;

        Self::check_status(response, subject).await
    }

    /// Look up a single thing by fullname through `/api/info`
    async fn fetch_thing<T: DeserializeOwned>(&self, fullname: &str) -> PlatformResult<T> {
        let listing: Listing<T> = self
            .get_json("/api/info", &[("id", fullname), ("raw_json", "1")], fullname)
            .await?;

        listing
            .data
            .children
            .into_iter()
            .next()
            .map(|thing| thing.data)
            .ok_or_else(|| PlatformError::NotFound(fullname.to_string()))
    }
}

#[async_trait]
impl ModerationPlatform for RedditClient {
    async fn current_user(&self) -> PlatformResult<Moderator> {
        self.get_json("/api/v1/me", &[], "current user").await
    }

    async fn get_post(&self, id: &str) -> PlatformResult<Post> {
        let fullname = format!("t3_{}", normalize_id(id, "t3_"));
        tracing::debug!(fullname = %fullname, "Fetching post");
        self.fetch_thing(&fullname).await
    }

    async fn get_comment(&self, id: &str) -> PlatformResult<Comment> {
        let fullname = format!("t1_{}", normalize_id(id, "t1_"));
        tracing::debug!(fullname = %fullname, "Fetching comment");
        self.fetch_thing(&fullname).await
    }

    async fn reply(&self, parent_fullname: &str, text: &str) -> PlatformResult<ReplyRef> {
        let response = self
            .post_form(
                "/api/comment",
                &[
                    ("api_type", "json"),
                    ("thing_id", parent_fullname),
                    ("text", text),
                ],
                parent_fullname,
            )
            .await?;

        let envelope: JsonEnvelope<CommentData> = response
            .json()
            .await
            .map_err(|e| PlatformError::UnexpectedResponse(format!("/api/comment: {e}")))?;

        let reply = into_result(envelope)?
            .and_then(|data| data.things.into_iter().next())
            .map(|thing| thing.data)
            .ok_or_else(|| {
                PlatformError::UnexpectedResponse("comment created but not returned".to_string())
            })?;

        tracing::info!(parent = %parent_fullname, reply = %reply.fullname, "Reply posted");

        Ok(reply)
    }

    async fn distinguish(&self, comment_fullname: &str, sticky: bool) -> PlatformResult<()> {
        let sticky = if sticky { "true" } else { "false" };
        let response = self
            .post_form(
                "/api/distinguish",
                &[
                    ("api_type", "json"),
                    ("id", comment_fullname),
                    ("how", "yes"),
                    ("sticky", sticky),
                ],
                comment_fullname,
            )
            .await?;

        let envelope: JsonEnvelope<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| PlatformError::UnexpectedResponse(format!("/api/distinguish: {e}")))?;
        into_result(envelope)?;

        tracing::debug!(comment = %comment_fullname, sticky = %sticky, "Reply distinguished");

        Ok(())
    }

    async fn remove(&self, fullname: &str, spam: bool) -> PlatformResult<()> {
        let spam = if spam { "true" } else { "false" };
        self.post_form("/api/remove", &[("id", fullname), ("spam", spam)], fullname)
            .await?;

        tracing::info!(fullname = %fullname, spam = %spam, "Content removed");

        Ok(())
    }
}
