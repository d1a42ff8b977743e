//! In-memory binding store using DashMap.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::metrics::StoreMetrics;

use super::backend::{BindingStore, StoreBackend, StoreError};

/// In-memory binding store.
///
/// Values live for the lifetime of the process.
#[derive(Default)]
pub struct MemoryBindingStore {
    entries: DashMap<String, String>,
}

impl MemoryBindingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        for (key, value) in entries {
            store.entries.insert(key.into(), value.into());
        }
        store
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl BindingStore for MemoryBindingStore {
    fn backend_type(&self) -> StoreBackend {
        StoreBackend::Memory
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        StoreMetrics::record_get(StoreBackend::Memory.as_str(), true);
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        StoreMetrics::record_put(StoreBackend::Memory.as_str(), true);

        tracing::debug!(key = %key, "Binding stored in memory");

        Ok(())
    }

    async fn is_healthy(&self) -> bool {
        true
    }
}
