//! Collaborator ports: trait-defined boundaries the table engine calls
//! through without depending on a concrete backend. Default implementations
//! are in-process and suitable for a single-node deployment; `redis`/`nats`
//! cargo features swap in distributed-deployment adapters mirroring the
//! original system's Redis/NATS collaborators.

pub mod audit;
pub mod memory;

#[cfg(feature = "redis-backend")]
pub mod redis_backend;

#[cfg(feature = "nats-backend")]
pub mod nats_backend;

use async_trait::async_trait;

/// Hot-state snapshot cache. The engine writes key `table:{id}:state`,
/// field `data`, after every applied action.
#[async_trait]
pub trait CachePort: Send + Sync {
    async fn hset(&self, key: &str, field: &str, value: String) -> anyhow::Result<()>;
    async fn hget(&self, key: &str, field: &str) -> anyhow::Result<Option<String>>;
}

/// Best-effort pub/sub fan-out of the raw event stream, subject
/// `table.{id}.events`. Failure here must never block game progression.
#[async_trait]
pub trait BusPort: Send + Sync {
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> anyhow::Result<()>;
}

/// Durable, append-only record of completed hands, written once per hand at
/// the showdown-to-waiting transition regardless of bus/cache health.
#[async_trait]
pub trait AuditPort: Send + Sync {
    async fn log_hand(
        &self,
        table_id: &str,
        hand_id: &str,
        secret: &str,
        commitment: &str,
        events_json: &str,
    ) -> anyhow::Result<()>;
}

/// Live WebSocket connections for a table. `broadcast` sends to every
/// currently-subscribed socket and silently drops dead ones.
#[async_trait]
pub trait SocketPort: Send + Sync {
    async fn broadcast(&self, table_id: &str, message: String);
}
