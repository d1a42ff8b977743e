//! Redis connection health tracking

use std::sync::atomic::{AtomicI64, AtomicU32, AtomicU8, Ordering};

use super::current_time_ms;

/// Redis connection health status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RedisHealthStatus {
    /// Connected and the last command succeeded
    Healthy = 0,
    /// No connection established yet, or a connect attempt is in flight
    Connecting = 1,
    /// The last connect attempt or command failed
    Unhealthy = 2,
}

impl RedisHealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RedisHealthStatus::Healthy => "healthy",
            RedisHealthStatus::Connecting => "connecting",
            RedisHealthStatus::Unhealthy => "unhealthy",
        }
    }
}

/// Redis health tracker
pub struct RedisHealth {
    status: AtomicU8,
    last_connected: AtomicI64,
    consecutive_failures: AtomicU32,
    total_failures: AtomicU32,
}

impl RedisHealth {
    pub fn new() -> Self {
        Self {
            status: AtomicU8::new(RedisHealthStatus::Connecting as u8),
            last_connected: AtomicI64::new(0),
            consecutive_failures: AtomicU32::new(0),
            total_failures: AtomicU32::new(0),
        }
    }

    /// Mark Redis as connected
    pub fn set_connected(&self) {
        self.status
            .store(RedisHealthStatus::Healthy as u8, Ordering::Release);
        self.last_connected
            .store(current_time_ms(), Ordering::Release);
        self.consecutive_failures.store(0, Ordering::Release);
    }

    /// Mark a connect attempt as started
    pub fn set_connecting(&self) {
        self.status
            .store(RedisHealthStatus::Connecting as u8, Ordering::Release);
    }

    /// Record a failed connect attempt or command
    pub fn record_failure(&self) {
        self.status
            .store(RedisHealthStatus::Unhealthy as u8, Ordering::Release);
        self.consecutive_failures.fetch_add(1, Ordering::AcqRel);
        self.total_failures.fetch_add(1, Ordering::AcqRel);
    }

    /// Get current status
    pub fn status(&self) -> RedisHealthStatus {
        match self.status.load(Ordering::Acquire) {
            0 => RedisHealthStatus::Healthy,
            2 => RedisHealthStatus::Unhealthy,
            _ => RedisHealthStatus::Connecting,
        }
    }

    /// Check if Redis is healthy
    pub fn is_healthy(&self) -> bool {
        self.status() == RedisHealthStatus::Healthy
    }

    /// Get statistics snapshot
    pub fn stats(&self) -> RedisHealthStats {
        RedisHealthStats {
            status: self.status(),
            last_connected_ms: self.last_connected.load(Ordering::Acquire),
            consecutive_failures: self.consecutive_failures.load(Ordering::Acquire),
            total_failures: self.total_failures.load(Ordering::Acquire),
        }
    }
}

impl Default for RedisHealth {
    fn default() -> Self {
        Self::new()
    }
}

/// Redis health statistics
#[derive(Debug, Clone)]
pub struct RedisHealthStats {
    pub status: RedisHealthStatus,
    pub last_connected_ms: i64,
    pub consecutive_failures: u32,
    pub total_failures: u32,
}
