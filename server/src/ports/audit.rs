//! Append-only JSONL audit log. A full relational store with migrations is
//! explicitly out of scope; a flat durable file satisfies the port contract
//! without introducing schema-migration machinery.

use async_trait::async_trait;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::AuditPort;

#[derive(Serialize)]
struct HandRecord<'a> {
    table_id: &'a str,
    hand_id: &'a str,
    secret: &'a str,
    commitment: &'a str,
    events: serde_json::Value,
}

pub struct JsonlAuditLog {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonlAuditLog {
    pub fn new(path: PathBuf) -> Self {
        JsonlAuditLog {
            path,
            lock: Arc::new(Mutex::new(())),
        }
    }
}

#[async_trait]
impl AuditPort for JsonlAuditLog {
    async fn log_hand(
        &self,
        table_id: &str,
        hand_id: &str,
        secret: &str,
        commitment: &str,
        events_json: &str,
    ) -> anyhow::Result<()> {
        let events: serde_json::Value = serde_json::from_str(events_json)?;
        let record = HandRecord {
            table_id,
            hand_id,
            secret,
            commitment,
            events,
        };
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let _guard = self.lock.lock().await;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.ok();
        }
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        Ok(())
    }
}
