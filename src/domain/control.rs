use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Campaign-level automation flag. Owned by the server, displayed only.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AutonomyStatus {
    #[default]
    AutonomousActive,
    AutonomousPaused,
    AutonomousBlocked,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CampaignCounts {
    pub total: u64,
    pub active_status: u64,
    pub paused_status: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AutonomyCounts {
    pub active: u64,
    pub paused: u64,
    pub manually_overridden: u64,
    #[serde(default)]
    pub errors: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HumanAction {
    pub decision: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DashboardStats {
    pub global_autonomy_enabled: bool,
    pub campaigns: CampaignCounts,
    pub autonomy_states: AutonomyCounts,
    #[serde(default)]
    pub last_human_action: Option<HumanAction>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Recommendation {
    pub id: i64,
    pub automation_id: i64,
    #[serde(default)]
    pub automation_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub suggested_value: Value,
    #[serde(default)]
    pub reasoning: Option<String>,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum RecommendationAction {
    Approve,
    Reject,
    Archive,
}

/// Per-campaign manual override accepted by the control endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OverrideAction {
    ForceResume,
    ForcePause,
    LockStyle,
    UnlockStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationSetup {
    pub project_id: i64,
    pub name: String,
    pub status: String,
    pub autonomy_status: AutonomyStatus,
    pub style_locked: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LastDecision {
    #[serde(default)]
    pub decision: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AutomationStatus {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    pub status: String,
    pub autonomy_status: AutonomyStatus,
    #[serde(default)]
    pub is_manually_overridden: bool,
    #[serde(default)]
    pub override_reason: Option<String>,
    #[serde(default)]
    pub style_locked: bool,
    #[serde(default)]
    pub last_run_at: Option<String>,
    #[serde(default)]
    pub next_run_at: Option<String>,
    #[serde(default)]
    pub last_decision: Option<LastDecision>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DecisionLogEntry {
    pub id: i64,
    pub automation_id: i64,
    pub decision: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub metrics_snapshot: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DecisionHistory {
    pub total: u64,
    pub items: Vec<DecisionLogEntry>,
}
