use super::{ApiClient, Envelope};
use crate::domain::AiHealth;
use tracing::debug;

impl ApiClient {
    /// Never fails: an unreachable endpoint reads as disconnected.
    pub async fn ai_health(&self) -> AiHealth {
        match self.get::<AiHealth>("/health/ai", &[], Envelope::Bare).await {
            Ok(health) => health,
            Err(e) => {
                debug!(error = %e, "ai health check failed");
                AiHealth::disconnected()
            }
        }
    }
}
