use std::sync::Arc;
use std::time::Duration;

use redis::{Commands, Connection};
use tokio::sync::RwLock;
use warden_core::{BlockList, BlockListError};

#[derive(Clone)]
pub struct RedisBlockList {
    conn: Arc<RwLock<Connection>>,
}

impl RedisBlockList {
    pub fn new(conn: Arc<RwLock<Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl BlockList for RedisBlockList {
    #[tracing::instrument(name = "Block-listing token in Redis", skip_all)]
    async fn add(&self, key: &str, ttl: Duration) -> Result<(), BlockListError> {
        let key = get_key(key);
        // SETEX rejects a zero expiry.
        let ttl_secs = ttl.as_secs().max(1);

        let mut conn = self.conn.write().await;
        conn.set_ex::<_, _, ()>(key, true, ttl_secs)
            .map_err(|e| BlockListError::DatabaseError(e.to_string()))
    }

    #[tracing::instrument(name = "Checking token in Redis", skip_all)]
    async fn contains(&self, key: &str) -> Result<bool, BlockListError> {
        let key = get_key(key);
        let mut conn = self.conn.write().await;
        conn.exists(&key)
            .map_err(|e| BlockListError::DatabaseError(e.to_string()))
    }
}

const BLOCKED_TOKEN_KEY_PREFIX: &str = "blocked_token:";

fn get_key(token_id: &str) -> String {
    format!("{}{}", BLOCKED_TOKEN_KEY_PREFIX, token_id)
}
