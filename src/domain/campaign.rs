use super::post::Post;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum CampaignStatus {
    #[default]
    #[serde(alias = "DRAFT")]
    Draft,
    #[serde(alias = "ACTIVE")]
    Active,
    #[serde(alias = "PAUSED")]
    Paused,
    #[serde(alias = "COMPLETED")]
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    pub project_id: i64,
    #[serde(default)]
    pub identity_id: Option<String>,
    #[serde(default)]
    pub objective: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    /// Comma-separated on the server side.
    #[serde(default)]
    pub topics: Option<String>,
    #[serde(default)]
    pub posts_per_day: Option<u32>,
    #[serde(default)]
    pub schedule_strategy: Option<String>,
    #[serde(default)]
    pub status: CampaignStatus,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl Campaign {
    pub fn topic_list(&self) -> Vec<&str> {
        self.topics
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    pub fn post(&self, post_id: i64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    /// All post bodies joined for clipboard export.
    pub fn export_posts(&self) -> String {
        self.posts
            .iter()
            .map(|p| format!("--- POST ---\n{}\n", p.body()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCampaignRequest {
    pub project_id: i64,
    pub name: String,
    pub objective: String,
    pub tone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts_per_day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_strategy: Option<String>,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
}

/// Partial update sent to `PUT /campaigns/{id}`. Unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts_per_day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl CampaignUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateResult {
    #[serde(default)]
    pub status: Option<String>,
    pub generated_count: u32,
    #[serde(default)]
    pub message: Option<String>,
}
