use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Topics arrive either as a list or as one free-text string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Topics {
    List(Vec<String>),
    Text(String),
}

impl Topics {
    pub fn items(&self) -> Vec<String> {
        match self {
            Self::List(list) => list
                .iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            Self::Text(text) => text
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostsPerDay {
    Count(u32),
    Text(String),
}

impl PostsPerDay {
    pub fn count(&self) -> Option<u32> {
        match self {
            Self::Count(n) => Some(*n),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_limits: Option<String>,
}

/// Local mirror of the orchestrator's conversation state.
///
/// Keys the client does not model (e.g. `user_profile`) are kept in `extra`
/// and sent back unchanged on the next turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideState {
    pub step: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Topics>,
    #[serde(
        default,
        rename = "postsPerDay",
        skip_serializing_if = "Option::is_none"
    )]
    pub posts_per_day: Option<PostsPerDay>,
    #[serde(
        default,
        rename = "scheduleStrategy",
        skip_serializing_if = "Option::is_none"
    )]
    pub schedule_strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_draft: Option<IdentityDraft>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for GuideState {
    fn default() -> Self {
        Self::initial()
    }
}

impl GuideState {
    /// Step 1 with an empty running summary.
    pub fn initial() -> Self {
        Self {
            step: 1,
            objective: None,
            audience: None,
            platform: None,
            tone: None,
            topics: None,
            posts_per_day: None,
            schedule_strategy: None,
            extra_context: None,
            conversation_summary: Some(String::new()),
            identity_draft: None,
            identity_id: None,
            extra: Map::new(),
        }
    }

    /// Shallow-merge a server patch, then move the cursor to `next_step`.
    ///
    /// A `null` in the patch clears the field. Keys whose value does not fit
    /// the typed shape are dropped; the rest of the patch still applies.
    pub fn apply_patch(&mut self, patch: &Map<String, Value>, next_step: u32) {
        let mut current = match serde_json::to_value(&*self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };

        for (key, value) in patch {
            if key == "step" {
                continue;
            }
            let mut candidate = current.clone();
            if value.is_null() {
                candidate.remove(key);
            } else {
                candidate.insert(key.clone(), value.clone());
            }
            if serde_json::from_value::<GuideState>(Value::Object(candidate.clone())).is_ok() {
                current = candidate;
            } else {
                tracing::warn!(key = %key, "dropping ill-typed state patch key");
            }
        }
        current.insert("step".into(), Value::from(next_step));

        match serde_json::from_value::<GuideState>(Value::Object(current)) {
            Ok(next) => *self = next,
            Err(_) => self.step = next_step,
        }
    }

    pub fn topic_items(&self) -> Vec<String> {
        self.topics.as_ref().map(Topics::items).unwrap_or_default()
    }
}
