use std::collections::HashMap;
use std::sync::Mutex;
use shared::models::LikeCounts;
use tracing::{info, error};
use crate::config::StoreConfig;
use crate::kv::KvStore;

pub fn key_for(id: &str) -> String {
    format!("design:{}:likes", id)
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("KV transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("KV backend error: {0}")]
    Backend(String),
    #[error("Unexpected KV reply: {0}")]
    UnexpectedReply(String),
    #[error("Counter lock poisoned")]
    LockFailed,
}

#[rocket::async_trait]
pub trait CounterStore: Send + Sync {
    /// Current count for every requested id, 0 for ids never incremented.
    async fn get(&self, ids: &[String]) -> Result<LikeCounts, StoreError>;

    /// Adds one to `id` and returns the new total.
    async fn increment(&self, id: &str) -> Result<u64, StoreError>;

    fn backend_name(&self) -> &'static str;

    fn is_shared(&self) -> bool;
}

/// Process-local fallback. Lost on restart and not shared between instances.
#[derive(Debug, Default)]
pub struct MemoryStore {
    counts: Mutex<HashMap<String, u64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[rocket::async_trait]
impl CounterStore for MemoryStore {
    async fn get(&self, ids: &[String]) -> Result<LikeCounts, StoreError> {
        let counts = self.counts.lock().map_err(|e| {
            error!("Failed to acquire counter lock: {}", e);
            StoreError::LockFailed
        })?;

        Ok(ids
            .iter()
            .map(|id| (id.clone(), counts.get(&key_for(id)).copied().unwrap_or(0)))
            .collect())
    }

    async fn increment(&self, id: &str) -> Result<u64, StoreError> {
        let mut counts = self.counts.lock().map_err(|e| {
            error!("Failed to acquire counter lock: {}", e);
            StoreError::LockFailed
        })?;

        let count = counts.entry(key_for(id)).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn is_shared(&self) -> bool {
        false
    }
}

pub fn from_config(config: &StoreConfig) -> Box<dyn CounterStore> {
    match config {
        StoreConfig::Kv { url, token } => {
            info!("💾 Using shared KV backend at {}", url);
            Box::new(KvStore::new(url.clone(), token.clone()))
        }
        StoreConfig::Memory => {
            info!("💾 Using in-memory like counters");
            Box::new(MemoryStore::new())
        }
    }
}
