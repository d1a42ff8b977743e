//! Redis-backed binding store.

use std::sync::Arc;

use async_trait::async_trait;

use crate::metrics::StoreMetrics;
use crate::redis::pool::{PoolError, RedisPool, RedisPoolExt};

use super::backend::{BindingStore, StoreBackend, StoreError};

/// Redis-backed binding store.
///
/// Each binding is a plain Redis string at `{prefix}:{key}`.
pub struct RedisBindingStore {
    /// Redis connection pool
    pool: Arc<RedisPool>,

    /// Key prefix for Redis keys
    prefix: String,
}

impl RedisBindingStore {
    pub fn new(pool: Arc<RedisPool>, prefix: String) -> Self {
        Self { pool, prefix }
    }

    /// Generate the Redis key for a binding.
    fn binding_key(&self, key: &str) -> String {
        format!("{}:{}", self.prefix, key)
    }

    /// Convert pool error to store error.
    fn map_error(err: PoolError) -> StoreError {
        match err {
            PoolError::Redis(e) => StoreError::Redis(e),
            PoolError::ConnectionUnavailable(msg) => StoreError::Unavailable(msg),
        }
    }
}

#[async_trait]
impl BindingStore for RedisBindingStore {
    fn backend_type(&self) -> StoreBackend {
        StoreBackend::Redis
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let redis_key = self.binding_key(key);

        let result = self.pool.get_string(&redis_key).await;
        StoreMetrics::record_get(StoreBackend::Redis.as_str(), result.is_ok());

        result.map_err(|e| {
            tracing::error!(error = %e, key = %redis_key, "Failed to read binding from Redis");
            Self::map_error(e)
        })
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let redis_key = self.binding_key(key);

        let result = self.pool.set_string(&redis_key, value).await;
        StoreMetrics::record_put(StoreBackend::Redis.as_str(), result.is_ok());

        result.map_err(|e| {
            tracing::error!(error = %e, key = %redis_key, "Failed to write binding to Redis");
            Self::map_error(e)
        })?;

        tracing::debug!(key = %redis_key, "Binding stored in Redis");

        Ok(())
    }

    async fn is_healthy(&self) -> bool {
        self.pool.ping().await.is_ok()
    }
}
