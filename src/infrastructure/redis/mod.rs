//! Redis connectivity for the binding store.
//!
//! - `RedisHealth`: tracks connection health for the health endpoint
//! - `pool`: shared multiplexed connection for key/value commands

mod health;
pub mod pool;

pub use health::{RedisHealth, RedisHealthStats, RedisHealthStatus};

/// Get current time in milliseconds since epoch
pub(crate) fn current_time_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
