//! Redis connection pool for the binding store.
//!
//! Holds one lazily established multiplexed connection shared by all
//! request handlers and reports connection health to `RedisHealth`.

use std::sync::Arc;

use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client, RedisError, RedisResult};
use tokio::sync::RwLock;

use crate::config::RedisConfig;

use super::RedisHealth;

/// Error type for Redis pool operations.
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    /// Redis operation failed
    #[error("Redis error: {0}")]
    Redis(#[from] RedisError),

    /// Connection not available
    #[error("Connection not available: {0}")]
    ConnectionUnavailable(String),
}

/// Redis connection pool for data operations.
///
/// Commands share a single multiplexed connection. A dropped connection is
/// discarded so the next command reconnects; the failed command itself is
/// not retried.
pub struct RedisPool {
    /// Redis client for creating connections
    client: Client,

    /// Multiplexed connection (shared across tasks)
    connection: RwLock<Option<MultiplexedConnection>>,

    /// Health tracker
    health: Arc<RedisHealth>,

    /// Configuration
    config: RedisConfig,
}

impl RedisPool {
    /// Create a new Redis pool. No connection is made until the first command.
    pub fn new(config: RedisConfig, health: Arc<RedisHealth>) -> Result<Self, PoolError> {
        let client = Client::open(config.url.as_str())?;

        Ok(Self {
            client,
            connection: RwLock::new(None),
            health,
            config,
        })
    }

    /// Get a connection from the pool, connecting if needed.
    pub async fn get_connection(&self) -> Result<MultiplexedConnection, PoolError> {
        {
            let conn = self.connection.read().await;
            if let Some(ref c) = *conn {
                return Ok(c.clone());
            }
        }

        self.connect().await
    }

    /// Establish a new connection.
    async fn connect(&self) -> Result<MultiplexedConnection, PoolError> {
        let mut conn_guard = self.connection.write().await;

        // Double-check in case another task connected while we waited
        if let Some(ref c) = *conn_guard {
            return Ok(c.clone());
        }

        self.health.set_connecting();

        match self.client.get_multiplexed_tokio_connection().await {
            Ok(conn) => {
                *conn_guard = Some(conn.clone());
                self.health.set_connected();
                tracing::info!(url = %self.config.url, "Redis pool connection established");
                Ok(conn)
            }
            Err(e) => {
                self.health.record_failure();
                tracing::error!(error = %e, "Failed to connect to Redis");
                Err(PoolError::ConnectionUnavailable(e.to_string()))
            }
        }
    }

    /// Execute a Redis command, recording health and discarding dropped connections.
    pub async fn execute<F, T, Fut>(&self, f: F) -> Result<T, PoolError>
    where
        F: FnOnce(MultiplexedConnection) -> Fut,
        Fut: std::future::Future<Output = RedisResult<T>>,
    {
        let conn = self.get_connection().await?;

        match f(conn).await {
            Ok(result) => {
                self.health.set_connected();
                Ok(result)
            }
            Err(e) => {
                if e.is_connection_dropped() || e.is_io_error() {
                    let mut conn_guard = self.connection.write().await;
                    *conn_guard = None;
                }
                self.health.record_failure();
                Err(PoolError::Redis(e))
            }
        }
    }

    /// Ping Redis to check connectivity.
    pub async fn ping(&self) -> Result<(), PoolError> {
        self.execute(|mut conn| async move {
            let _: String = redis::cmd("PING").query_async(&mut conn).await?;
            Ok(())
        })
        .await
    }
}

/// Extension trait for the string commands used by the binding store.
#[async_trait::async_trait]
pub trait RedisPoolExt {
    /// Get a string value.
    async fn get_string(&self, key: &str) -> Result<Option<String>, PoolError>;

    /// Set a string value, overwriting any previous one.
    async fn set_string(&self, key: &str, value: &str) -> Result<(), PoolError>;
}

#[async_trait::async_trait]
impl RedisPoolExt for RedisPool {
    async fn get_string(&self, key: &str) -> Result<Option<String>, PoolError> {
        let key = key.to_string();
        self.execute(|mut conn| async move { conn.get(key).await })
            .await
    }

    async fn set_string(&self, key: &str, value: &str) -> Result<(), PoolError> {
        let key = key.to_string();
        let value = value.to_string();
        self.execute(|mut conn| async move { conn.set::<_, _, ()>(key, value).await })
            .await
    }
}
