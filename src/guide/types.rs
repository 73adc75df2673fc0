use super::state::GuideState;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Conversation style requested from the orchestrator.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GuideMode {
    Guided,
    #[default]
    Collaborator,
    Expert,
    IdentityCreation,
}

/// What the guide screen shows: a conversation in some mode, or the manual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ViewMode {
    Conversation(GuideMode),
    ManualForm,
}

impl ViewMode {
    pub const MANUAL_FORM: &'static str = "manual_form";

    pub fn guide_mode(self) -> Option<GuideMode> {
        match self {
            Self::Conversation(mode) => Some(mode),
            Self::ManualForm => None,
        }
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        Self::Conversation(GuideMode::default())
    }
}

impl From<GuideMode> for ViewMode {
    fn from(mode: GuideMode) -> Self {
        Self::Conversation(mode)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conversation(mode) => fmt::Display::fmt(mode, f),
            Self::ManualForm => f.write_str(Self::MANUAL_FORM),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case(Self::MANUAL_FORM) || raw.eq_ignore_ascii_case("manual") {
            return Ok(Self::ManualForm);
        }
        raw.parse::<GuideMode>()
            .map(Self::Conversation)
            .map_err(|_| format!("unknown mode: {raw}"))
    }
}

impl TryFrom<String> for ViewMode {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<ViewMode> for String {
    fn from(mode: ViewMode) -> Self {
        mode.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideOption {
    pub label: String,
    pub value: String,
}

impl GuideOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Ai,
    User,
}

/// One entry of the visible conversation log. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<GuideOption>>,
}

impl Message {
    pub fn ai(content: impl Into<String>, options: Vec<GuideOption>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::Ai,
            content: content.into(),
            options: (!options.is_empty()).then_some(options),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::User,
            content: content.into(),
            options: None,
        }
    }

    pub fn options(&self) -> &[GuideOption] {
        self.options.as_deref().unwrap_or_default()
    }
}

/// Body of `POST /guide/next`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideNextRequest {
    pub current_step: u32,
    pub mode: GuideMode,
    pub state: GuideState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_value: Option<String>,
    pub guide_session_id: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnStatus {
    #[default]
    Success,
    Blocked,
    Error,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideNextResponse {
    #[serde(default)]
    pub assistant_message: String,
    #[serde(default)]
    pub options: Vec<GuideOption>,
    pub next_step: u32,
    #[serde(default)]
    pub state_patch: Map<String, Value>,
    #[serde(default)]
    pub status: Option<TurnStatus>,
}

impl GuideNextResponse {
    pub fn is_blocked(&self) -> bool {
        self.status == Some(TurnStatus::Blocked)
    }

    pub fn offers(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}
