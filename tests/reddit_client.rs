//! RedditClient tests against an in-process fake of the Reddit API

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Form, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use secrecy::SecretString;
use serde_json::json;
use tokio::net::TcpListener;

use removal_macros::config::RedditConfig;
use removal_macros::moderation::{ModerationPlatform, PlatformError, RedditClient};

const TOKEN: &str = "fake-bearer-token";

#[derive(Debug, Clone)]
struct Recorded {
    path: &'static str,
    authorization: Option<String>,
    user_agent: Option<String>,
    params: HashMap<String, String>,
}

#[derive(Clone, Default)]
struct FakeReddit {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeReddit {
    fn record(&self, path: &'static str, headers: &HeaderMap, params: HashMap<String, String>) {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        self.requests.lock().unwrap().push(Recorded {
            path,
            authorization: header("authorization"),
            user_agent: header("user-agent"),
            params,
        });
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

async fn me(State(fake): State<FakeReddit>, headers: HeaderMap) -> Response {
    fake.record("/api/v1/me", &headers, HashMap::new());
    let expected = format!("Bearer {}", TOKEN);
    if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some(expected.as_str()) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({"name": "AutoModBot", "id": "u1"})).into_response()
}

async fn info(
    State(fake): State<FakeReddit>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let id = params.get("id").cloned().unwrap_or_default();
    fake.record("/api/info", &headers, params);

    let children = match id.as_str() {
        "t3_abc123" => vec![json!({"kind": "t3", "data": {
            "id": "abc123",
            "title": "Spam post",
            "selftext": "Buy now!",
            "author": "spammer",
            "subreddit": "rust",
            "permalink": "/r/rust/comments/abc123/spam_post/",
            "url": "https://shop.example.com/deal"
        }})],
        "t1_c42" => vec![json!({"kind": "t1", "data": {
            "id": "c42",
            "body": "rude words",
            "author": "troll",
            "subreddit": "rust",
            "permalink": "/r/rust/comments/abc123/spam_post/c42/"
        }})],
        "t3_ratelimited" => return StatusCode::TOO_MANY_REQUESTS.into_response(),
        _ => vec![],
    };

    Json(json!({"kind": "Listing", "data": {"children": children}})).into_response()
}

async fn comment(
    State(fake): State<FakeReddit>,
    headers: HeaderMap,
    Form(params): Form<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    let locked = params.get("thing_id").map(String::as_str) == Some("t3_locked");
    fake.record("/api/comment", &headers, params);

    if locked {
        return Json(json!({"json": {"errors": [["THREAD_LOCKED", "that thread is locked", "parent"]]}}));
    }
    Json(json!({"json": {"errors": [], "data": {"things": [
        {"kind": "t1", "data": {"id": "reply1", "name": "t1_reply1"}}
    ]}}}))
}

async fn distinguish(
    State(fake): State<FakeReddit>,
    headers: HeaderMap,
    Form(params): Form<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    fake.record("/api/distinguish", &headers, params);
    Json(json!({"json": {"errors": [], "data": {"things": []}}}))
}

async fn remove(
    State(fake): State<FakeReddit>,
    headers: HeaderMap,
    Form(params): Form<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    fake.record("/api/remove", &headers, params);
    Json(json!({}))
}

/// Start the fake on an ephemeral port and return a client pointed at it
async fn start_fake(token: &str) -> (RedditClient, FakeReddit) {
    let fake = FakeReddit::default();
    let app = Router::new()
        .route("/api/v1/me", get(me))
        .route("/api/info", get(info))
        .route("/api/comment", post(comment))
        .route("/api/distinguish", post(distinguish))
        .route("/api/remove", post(remove))
        .with_state(fake.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = RedditConfig {
        base_url: format!("http://{}/", addr),
        access_token: SecretString::from(token),
        user_agent: "removal-macros-test/0.1".to_string(),
        timeout_seconds: 5,
    };
    (RedditClient::new(&config).unwrap(), fake)
}

#[tokio::test]
async fn test_current_user_sends_bearer_and_user_agent() {
    let (client, fake) = start_fake(TOKEN).await;

    let moderator = client.current_user().await.unwrap();
    assert_eq!(moderator.username, "AutoModBot");

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].authorization.as_deref(),
        Some("Bearer fake-bearer-token")
    );
    assert_eq!(
        requests[0].user_agent.as_deref(),
        Some("removal-macros-test/0.1")
    );
}

#[tokio::test]
async fn test_bad_token_is_unauthorized() {
    let (client, _fake) = start_fake("wrong-token").await;

    let result = client.current_user().await;
    assert!(matches!(result, Err(PlatformError::Unauthorized)));
}

#[tokio::test]
async fn test_get_post_by_fullname_lookup() {
    let (client, fake) = start_fake(TOKEN).await;

    let post = client.get_post("abc123").await.unwrap();
    assert_eq!(post.title.as_deref(), Some("Spam post"));
    assert_eq!(post.body.as_deref(), Some("Buy now!"));
    assert_eq!(post.fullname(), "t3_abc123");

    // Prefixed ids are not double-prefixed
    client.get_post("t3_abc123").await.unwrap();

    let requests = fake.requests();
    assert_eq!(requests[0].params.get("id").map(String::as_str), Some("t3_abc123"));
    assert_eq!(requests[1].params.get("id").map(String::as_str), Some("t3_abc123"));
    assert_eq!(requests[0].params.get("raw_json").map(String::as_str), Some("1"));
}

#[tokio::test]
async fn test_get_comment() {
    let (client, _fake) = start_fake(TOKEN).await;

    let comment = client.get_comment("c42").await.unwrap();
    assert_eq!(comment.author.as_deref(), Some("troll"));
    assert_eq!(comment.fullname(), "t1_c42");
}

#[tokio::test]
async fn test_missing_thing_is_not_found() {
    let (client, _fake) = start_fake(TOKEN).await;

    let result = client.get_post("gone").await;
    assert!(matches!(result, Err(PlatformError::NotFound(name)) if name == "t3_gone"));
}

#[tokio::test]
async fn test_rate_limit_status() {
    let (client, _fake) = start_fake(TOKEN).await;

    let result = client.get_post("ratelimited").await;
    assert!(matches!(result, Err(PlatformError::RateLimited)));
}

#[tokio::test]
async fn test_reply_distinguish_remove_form_fields() {
    let (client, fake) = start_fake(TOKEN).await;

    let reply = client.reply("t3_abc123", "Removed: Spam post").await.unwrap();
    assert_eq!(reply.fullname, "t1_reply1");

    client.distinguish(&reply.fullname, true).await.unwrap();
    client.remove("t3_abc123", false).await.unwrap();

    let requests = fake.requests();
    assert_eq!(requests.len(), 3);

    let reply_req = &requests[0];
    assert_eq!(reply_req.path, "/api/comment");
    assert_eq!(reply_req.params["thing_id"], "t3_abc123");
    assert_eq!(reply_req.params["text"], "Removed: Spam post");
    assert_eq!(reply_req.params["api_type"], "json");

    let distinguish_req = &requests[1];
    assert_eq!(distinguish_req.path, "/api/distinguish");
    assert_eq!(distinguish_req.params["id"], "t1_reply1");
    assert_eq!(distinguish_req.params["how"], "yes");
    assert_eq!(distinguish_req.params["sticky"], "true");

    let remove_req = &requests[2];
    assert_eq!(remove_req.path, "/api/remove");
    assert_eq!(remove_req.params["id"], "t3_abc123");
    assert_eq!(remove_req.params["spam"], "false");
    assert!(requests
        .iter()
        .all(|r| r.authorization.as_deref() == Some("Bearer fake-bearer-token")));
}

#[tokio::test]
async fn test_reply_api_errors_surface() {
    let (client, _fake) = start_fake(TOKEN).await;

    let result = client.reply("t3_locked", "text").await;
    match result {
        Err(PlatformError::Api { message, .. }) => {
            assert!(message.contains("THREAD_LOCKED"));
        }
        other => panic!("expected api error, got {:?}", other),
    }
}
