use crate::error::SessionError;
use crate::guide::{GuideState, Message, ViewMode};
use serde::{Deserialize, Serialize};

/// Everything needed to resume a guide conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub session_id: String,
    pub messages: Vec<Message>,
    pub guide_state: GuideState,
    pub mode: ViewMode,
    /// Unix epoch milliseconds.
    #[serde(rename = "timestamp")]
    pub saved_at_ms: i64,
}

pub fn encode(record: &SessionRecord) -> Result<String, SessionError> {
    Ok(serde_json::to_string(record)?)
}

pub fn decode(raw: &str) -> Result<SessionRecord, SessionError> {
    Ok(serde_json::from_str(raw)?)
}

/// Strictly older than the TTL. A clock that moved backwards never expires
/// a record.
pub fn is_expired(saved_at_ms: i64, now_ms: i64, ttl_ms: i64) -> bool {
    now_ms.saturating_sub(saved_at_ms) > ttl_ms
}

/// Decode and check freshness in one go. `None` means "start fresh"; the
/// caller should clear whatever was stored.
pub fn restore(raw: &str, now_ms: i64, ttl_ms: i64) -> Option<SessionRecord> {
    let record = match decode(raw) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(error = %e, "discarding unreadable guide session");
            return None;
        }
    };
    if is_expired(record.saved_at_ms, now_ms, ttl_ms) {
        tracing::info!(session_id = %record.session_id, "guide session expired");
        return None;
    }
    Some(record)
}
