use serde::{Deserialize, Serialize};
use std::fmt;

/// Publication state of a post. Transitions are decided by the server; the
/// client only requests them and re-fetches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PostStatus {
    Draft,
    Pending,
    Generated,
    Approved,
    Scheduled,
    Published,
    PublishedAuto,
    ReadyManual,
    FailedAutoManualAvailable,
    Failed,
    /// A status this client does not know yet.
    Other(String),
}

impl PostStatus {
    pub fn as_wire(&self) -> &str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Generated => "generated",
            Self::Approved => "approved",
            Self::Scheduled => "scheduled",
            Self::Published => "published",
            Self::PublishedAuto => "published_auto",
            Self::ReadyManual => "ready_manual",
            Self::FailedAutoManualAvailable => "failed_auto_manual_available",
            Self::Failed => "failed",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published | Self::PublishedAuto)
    }

    /// States from which a human can push the post out (or confirm it was).
    pub fn allows_manual_publish(&self) -> bool {
        matches!(
            self,
            Self::ReadyManual | Self::FailedAutoManualAvailable | Self::Generated | Self::Approved
        )
    }
}

impl From<String> for PostStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "draft" => Self::Draft,
            "pending" => Self::Pending,
            "generated" => Self::Generated,
            "approved" => Self::Approved,
            "scheduled" => Self::Scheduled,
            "published" => Self::Published,
            "published_auto" => Self::PublishedAuto,
            "ready_manual" => Self::ReadyManual,
            "failed_auto_manual_available" => Self::FailedAutoManualAvailable,
            "failed" | "failed_ai" => Self::Failed,
            _ => Self::Other(raw),
        }
    }
}

impl From<PostStatus> for String {
    fn from(status: PostStatus) -> Self {
        status.as_wire().to_string()
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_wire().to_ascii_uppercase())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub campaign_id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content_text: Option<String>,
    /// Legacy body field.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub scheduled_for: Option<String>,
    /// Legacy schedule field.
    #[serde(default)]
    pub scheduled_date: Option<String>,
    pub status: PostStatus,
    #[serde(default)]
    pub platform: Option<String>,
}

impl Post {
    /// Effective schedule: `scheduled_for`, else the legacy `scheduled_date`.
    pub fn schedule(&self) -> Option<&str> {
        self.scheduled_for
            .as_deref()
            .or(self.scheduled_date.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    /// Date part of the schedule (`YYYY-MM-DD`).
    pub fn schedule_day(&self) -> Option<&str> {
        self.schedule()
            .map(|s| s.split_once('T').map_or(s, |(day, _)| day))
    }

    pub fn body(&self) -> &str {
        self.content_text
            .as_deref()
            .or(self.content.as_deref())
            .unwrap_or_default()
    }
}

/// Body of `PUT /posts/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<String>,
    /// Legacy input; folded into `scheduled_for` by [`PostUpdate::normalized`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
}

impl PostUpdate {
    pub fn approve() -> Self {
        Self {
            status: Some(PostStatus::Approved),
            ..Self::default()
        }
    }

    /// True when the update touches title or body.
    pub fn edits_content(&self) -> bool {
        self.title.is_some() || self.content_text.is_some()
    }

    /// The server only understands `scheduled_for`.
    pub fn normalized(mut self) -> Self {
        if let Some(legacy) = self.scheduled_date.take()
            && self.scheduled_for.is_none()
        {
            self.scheduled_for = Some(legacy);
        }
        self
    }
}
