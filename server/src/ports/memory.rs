//! Single-node default implementations of the collaborator ports.

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::broadcast;

use super::{BusPort, CachePort, SocketPort};

/// In-process hash-field cache, keyed by `(key, field)`.
#[derive(Default)]
pub struct InMemoryCache {
    data: DashMap<(String, String), String>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CachePort for InMemoryCache {
    async fn hset(&self, key: &str, field: &str, value: String) -> anyhow::Result<()> {
        self.data.insert((key.to_string(), field.to_string()), value);
        Ok(())
    }

    async fn hget(&self, key: &str, field: &str) -> anyhow::Result<Option<String>> {
        Ok(self
            .data
            .get(&(key.to_string(), field.to_string()))
            .map(|v| v.clone()))
    }
}

/// Best-effort in-process bus. There is no cross-node fan-out to perform in
/// a single-node deployment, so publishing just records the attempt.
#[derive(Default)]
pub struct InMemoryBus;

impl InMemoryBus {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BusPort for InMemoryBus {
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> anyhow::Result<()> {
        tracing::debug!(subject, bytes = payload.len(), "published to bus");
        Ok(())
    }
}

/// Per-table broadcast channels backing live WebSocket connections. Sockets
/// subscribe via [`InMemorySocketSet::subscribe`]; the returned receiver
/// snapshot tolerates concurrent subscribe/unsubscribe.
#[derive(Default)]
pub struct InMemorySocketSet {
    channels: DashMap<String, broadcast::Sender<String>>,
}

impl InMemorySocketSet {
    const CHANNEL_CAPACITY: usize = 256;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, table_id: &str) -> broadcast::Receiver<String> {
        self.channels
            .entry(table_id.to_string())
            .or_insert_with(|| broadcast::channel(Self::CHANNEL_CAPACITY).0)
            .subscribe()
    }
}

#[async_trait]
impl SocketPort for InMemorySocketSet {
    async fn broadcast(&self, table_id: &str, message: String) {
        if let Some(tx) = self.channels.get(table_id) {
            // Err here just means no subscribers are currently connected.
            let _ = tx.send(message);
        }
    }
}
