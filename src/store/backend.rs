//! Backend trait for binding storage.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during binding store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Redis operation failed
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Backend is temporarily unavailable
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Redis,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Memory => "memory",
            StoreBackend::Redis => "redis",
        }
    }
}

/// Persistent string-keyed storage for templates and macro values.
///
/// Writes overwrite (last write wins). Failures are reported once and are
/// never retried by callers.
#[async_trait]
pub trait BindingStore: Send + Sync {
    /// Get the backend type
    fn backend_type(&self) -> StoreBackend;

    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Whether the backend is currently reachable
    async fn is_healthy(&self) -> bool;
}
