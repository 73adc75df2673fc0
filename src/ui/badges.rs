//! One-word colored labels for statuses.

use super::style;
use crate::domain::{AiHealth, AutonomyStatus, CampaignStatus, IdentityStatus, PostStatus};

pub fn campaign_status(status: CampaignStatus) -> String {
    let label = status.to_string();
    match status {
        CampaignStatus::Active => style::success(label),
        CampaignStatus::Paused => style::yellow(label),
        CampaignStatus::Draft | CampaignStatus::Completed => style::dim(label),
    }
}

pub fn post_status(status: &PostStatus) -> String {
    let label = status.to_string();
    match status {
        PostStatus::Published | PostStatus::PublishedAuto => style::success(label),
        PostStatus::Approved | PostStatus::Scheduled => style::value(label),
        PostStatus::ReadyManual | PostStatus::FailedAutoManualAvailable => style::yellow(label),
        PostStatus::Failed => style::danger(label),
        _ => style::dim(label),
    }
}

pub fn identity_status(status: IdentityStatus) -> String {
    let label = status.to_string().to_uppercase();
    match status {
        IdentityStatus::Active => style::success(label),
        IdentityStatus::Draft => style::yellow(label),
        IdentityStatus::Archived => style::dim(label),
    }
}

pub fn autonomy_status(status: AutonomyStatus) -> String {
    let label = status.to_string();
    match status {
        AutonomyStatus::AutonomousActive => style::success(label),
        AutonomyStatus::AutonomousPaused => style::yellow(label),
        AutonomyStatus::AutonomousBlocked => style::danger(label),
    }
}

/// `AI: openai (real)` in green, or a red disconnected marker.
pub fn ai_health(health: &AiHealth) -> String {
    if !health.is_connected() {
        return style::danger("AI: desconectado");
    }
    let kind = if health.is_real_ai { "real" } else { "simulado" };
    style::success(format!("AI: {} ({kind})", health.provider))
}
