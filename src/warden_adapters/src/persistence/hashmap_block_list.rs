use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use warden_core::{BlockList, BlockListError};

/// In-memory block-list. Expired entries are ignored on read and pruned on
/// write.
#[derive(Default, Clone)]
pub struct HashMapBlockList {
    entries: Arc<RwLock<HashMap<String, Instant>>>,
}

impl HashMapBlockList {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl BlockList for HashMapBlockList {
    async fn add(&self, key: &str, ttl: Duration) -> Result<(), BlockListError> {
        let now = Instant::now();
        let expires_at = now
            .checked_add(ttl)
            .ok_or_else(|| BlockListError::DatabaseError("ttl out of range".to_owned()))?;

        let mut entries = self.entries.write().await;
        entries.retain(|_, expiry| *expiry > now);
        entries.insert(key.to_owned(), expires_at);
        Ok(())
    }

    async fn contains(&self, key: &str) -> Result<bool, BlockListError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .is_some_and(|expiry| *expiry > Instant::now()))
    }
}
