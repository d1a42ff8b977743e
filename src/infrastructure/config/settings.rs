use config::{Config, ConfigError, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub redis: RedisConfig,
    pub reddit: RedditConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// Shared secret expected in the X-API-Key header (disabled when unset)
    pub key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Binding store backend: "memory" or "redis"
    #[serde(default = "default_store_backend")]
    pub backend: String,
    /// Key prefix for the Redis backend
    #[serde(default = "default_redis_prefix")]
    pub redis_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    #[serde(default = "default_redis_url")]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedditConfig {
    #[serde(default = "default_reddit_base_url")]
    pub base_url: String,
    /// OAuth bearer token of the moderator account (redacted in Debug output)
    #[serde(default)]
    pub access_token: SecretString,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds
    #[serde(default = "default_reddit_timeout")]
    pub timeout_seconds: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_store_backend() -> String {
    "memory".to_string()
}

fn default_redis_prefix() -> String {
    "removal_macros".to_string()
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_reddit_base_url() -> String {
    "https://oauth.reddit.com".to_string()
}

fn default_user_agent() -> String {
    "removal-macros/1.0".to_string()
}

fn default_reddit_timeout() -> u64 {
    30
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port())?
            .set_default("store.backend", default_store_backend())?
            .set_default("store.redis_prefix", default_redis_prefix())?
            .set_default("redis.url", default_redis_url())?
            .set_default("reddit.base_url", default_reddit_base_url())?
            .set_default("reddit.user_agent", default_user_agent())?
            .set_default("reddit.timeout_seconds", default_reddit_timeout())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // SERVER__PORT, STORE__BACKEND, REDDIT__ACCESS_TOKEN, API__KEY, etc.
            .add_source(
                Environment::default()
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    // Only the CORS list is split; every other value stays a scalar
                    .with_list_parse_key("server.cors_origins"),
            );

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_store_backend(),
            redis_prefix: default_redis_prefix(),
        }
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
        }
    }
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            base_url: default_reddit_base_url(),
            access_token: SecretString::default(),
            user_agent: default_user_agent(),
            timeout_seconds: default_reddit_timeout(),
        }
    }
}
