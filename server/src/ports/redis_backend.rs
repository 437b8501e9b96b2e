//! Redis-backed cache for multi-node deployments, feature-gated behind
//! `redis-backend`. Mirrors the original system's Redis collaborator.

use async_trait::async_trait;
use redis::AsyncCommands;

use super::CachePort;

pub struct RedisCache {
    client: redis::Client,
}

impl RedisCache {
    pub fn connect(url: &str) -> anyhow::Result<Self> {
        Ok(RedisCache {
            client: redis::Client::open(url)?,
        })
    }
}

#[async_trait]
impl CachePort for RedisCache {
    async fn hset(&self, key: &str, field: &str, value: String) -> anyhow::Result<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.hset(key, field, value).await?;
        Ok(())
    }

    async fn hget(&self, key: &str, field: &str) -> anyhow::Result<Option<String>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        Ok(conn.hget(key, field).await?)
    }
}
