//! NATS-backed bus for multi-node deployments, feature-gated behind
//! `nats-backend`. Mirrors the original system's message-bus collaborator.

use async_trait::async_trait;

use super::BusPort;

pub struct NatsBus {
    client: async_nats::Client,
}

impl NatsBus {
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let client = async_nats::connect(url).await?;
        Ok(NatsBus { client })
    }
}

#[async_trait]
impl BusPort for NatsBus {
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> anyhow::Result<()> {
        self.client
            .publish(subject.to_string(), payload.into())
            .await?;
        self.client.flush().await?;
        Ok(())
    }
}
