use std::sync::Arc;
use std::time::Instant;

use secrecy::ExposeSecret;

use crate::actions::ModerationActions;
use crate::config::Settings;
use crate::error::AppError;
use crate::moderation::{ModerationPlatform, RedditClient};
use crate::redis::pool::RedisPool;
use crate::redis::RedisHealth;
use crate::store::{create_binding_store, BindingStore};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub store: Arc<dyn BindingStore>,
    pub actions: Arc<ModerationActions>,
    pub redis_health: Option<Arc<RedisHealth>>,
    pub started_at: Instant,
}

impl AppState {
    /// Build the store and Reddit client described by `settings`.
    pub fn new(settings: Settings) -> Result<Self, AppError> {
        if settings.reddit.access_token.expose_secret().is_empty() {
            return Err(AppError::Config(config::ConfigError::Message(
                "reddit.access_token must be set".to_string(),
            )));
        }

        let (redis_pool, redis_health) = if settings.store.backend == "redis" {
            let health = Arc::new(RedisHealth::new());
            let pool = RedisPool::new(settings.redis.clone(), health.clone())
                .map_err(|e| AppError::Internal(format!("Invalid Redis configuration: {}", e)))?;
            (Some(Arc::new(pool)), Some(health))
        } else {
            (None, None)
        };

        let store = create_binding_store(&settings.store, redis_pool);
        let platform: Arc<dyn ModerationPlatform> = Arc::new(RedditClient::new(&settings.reddit)?);

        let mut state = Self::with_components(settings, store, platform);
        state.redis_health = redis_health;
        Ok(state)
    }

    /// Assemble state from already-built components.
    pub fn with_components(
        settings: Settings,
        store: Arc<dyn BindingStore>,
        platform: Arc<dyn ModerationPlatform>,
    ) -> Self {
        let actions = Arc::new(ModerationActions::new(store.clone(), platform));

        Self {
            settings: Arc::new(settings),
            store,
            actions,
            redis_health: None,
            started_at: Instant::now(),
        }
    }
}
