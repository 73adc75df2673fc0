use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConnectedAccount {
    pub id: i64,
    pub provider: String,
    #[serde(default)]
    pub provider_name: Option<String>,
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginUrl {
    pub url: String,
}

/// Reachability of the server's AI provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AiHealth {
    pub status: String,
    pub provider: String,
    #[serde(default)]
    pub is_real_ai: bool,
}

impl AiHealth {
    /// Value shown when the health endpoint itself cannot be reached.
    pub fn disconnected() -> Self {
        Self {
            status: "disconnected".into(),
            provider: "none".into(),
            is_real_ai: false,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.status == "connected"
    }
}
