use serde::{Deserialize, Deserializer, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IdentityStatus {
    #[default]
    Active,
    Draft,
    Archived,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    #[serde(default)]
    pub project_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default, deserialize_with = "platform_list")]
    pub preferred_platforms: Vec<String>,
    #[serde(default)]
    pub communication_style: Option<String>,
    #[serde(default)]
    pub content_limits: Option<String>,
    #[serde(default)]
    pub status: IdentityStatus,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The server stores platforms either as a JSON array, a JSON-encoded string,
/// or a comma-separated string.
fn platform_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Raw::List(list)) => list,
        Some(Raw::Text(text)) => split_platforms(&text),
    })
}

pub(crate) fn split_platforms(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.starts_with('[')
        && let Ok(list) = serde_json::from_str::<Vec<String>>(trimmed)
    {
        return list;
    }
    trimmed
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateIdentityRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub preferred_platforms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_limits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IdentityStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_platforms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_limits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IdentityStatus>,
}

impl IdentityUpdate {
    /// Archiving keeps the record; it is only hidden from active views.
    pub fn archive() -> Self {
        Self {
            status: Some(IdentityStatus::Archived),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IdentityFilter {
    All,
    #[default]
    Active,
    Draft,
    Archived,
}

impl IdentityFilter {
    pub fn matches(self, identity: &Identity) -> bool {
        match self {
            Self::All => true,
            Self::Active => identity.status == IdentityStatus::Active,
            Self::Draft => identity.status == IdentityStatus::Draft,
            Self::Archived => identity.status == IdentityStatus::Archived,
        }
    }

    pub fn apply(self, identities: &[Identity]) -> Vec<&Identity> {
        identities.iter().filter(|i| self.matches(i)).collect()
    }
}

/// Lookup by id over an unfiltered list; archived identities stay reachable.
pub fn find_by_id<'a>(identities: &'a [Identity], id: &str) -> Option<&'a Identity> {
    identities.iter().find(|i| i.id == id)
}
