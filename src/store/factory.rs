//! Binding store factory

use std::sync::Arc;

use crate::config::StoreConfig;
use crate::redis::pool::RedisPool;

use super::backend::BindingStore;
use super::memory_backend::MemoryBindingStore;
use super::redis_backend::RedisBindingStore;

/// Create a binding store based on configuration.
///
/// - `"redis"`: Returns a `RedisBindingStore` if a Redis pool is provided
/// - `"memory"` (default): Returns a `MemoryBindingStore`
///
/// # Example
///
/// ```rust,ignore
/// let store = create_binding_store(&settings.store, Some(redis_pool.clone()));
/// ```
pub fn create_binding_store(
    settings: &StoreConfig,
    redis_pool: Option<Arc<RedisPool>>,
) -> Arc<dyn BindingStore> {
    match settings.backend.as_str() {
        "redis" => {
            if let Some(pool) = redis_pool {
                tracing::info!(
                    backend = "redis",
                    prefix = %settings.redis_prefix,
                    "Creating Redis binding store"
                );
                Arc::new(RedisBindingStore::new(pool, settings.redis_prefix.clone()))
            } else {
                tracing::warn!(
                    "Redis backend requested but no pool provided, falling back to memory"
                );
                Arc::new(MemoryBindingStore::new())
            }
        }
        "memory" => {
            tracing::info!(backend = "memory", "Creating memory binding store");
            Arc::new(MemoryBindingStore::new())
        }
        other => {
            tracing::warn!(
                backend = %other,
                "Unknown binding store backend, falling back to memory"
            );
            Arc::new(MemoryBindingStore::new())
        }
    }
}
