use crate::error::ConfigError;
use crate::guide::GuideMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding config and session files - computed from home, not serialized
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Base URL of the dashboard API, including the version prefix.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_project_id")]
    pub project_id: i64,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub guide: GuideConfig,

    #[serde(default)]
    pub health: HealthConfig,
}

fn default_api_url() -> String {
    "http://localhost:8000/api/v1".into()
}

fn default_project_id() -> i64 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::new(),
            config_path: PathBuf::new(),
            api_url: default_api_url(),
            project_id: default_project_id(),
            http: HttpConfig::default(),
            guide: GuideConfig::default(),
            health: HealthConfig::default(),
        }
    }
}

// ── HTTP ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

// ── Guide ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideConfig {
    /// Mode used when no session is restored.
    #[serde(default)]
    pub default_mode: GuideMode,
    /// Pause before each orchestrator call.
    #[serde(default = "default_turn_delay_ms")]
    pub turn_delay_ms: u64,
    /// A persisted session older than this is discarded on load.
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
    /// Overrides `<data_dir>/guide_session.json`. `~` is expanded.
    #[serde(default)]
    pub session_file: Option<String>,
    #[serde(default = "default_max_attachment_bytes")]
    pub max_attachment_bytes: u64,
}

fn default_turn_delay_ms() -> u64 {
    600
}

fn default_session_ttl_secs() -> u64 {
    4 * 60 * 60
}

fn default_max_attachment_bytes() -> u64 {
    100_000
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            default_mode: GuideMode::default(),
            turn_delay_ms: default_turn_delay_ms(),
            session_ttl_secs: default_session_ttl_secs(),
            session_file: None,
            max_attachment_bytes: default_max_attachment_bytes(),
        }
    }
}

// ── Health ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthConfig {
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

fn default_poll_interval_secs() -> u64 {
    120
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.api_url)
            .map_err(|e| ConfigError::Validation(format!("api_url {:?}: {e}", self.api_url)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "api_url must be http or https, got {}",
                parsed.scheme()
            )));
        }
        if self.http.timeout_secs == 0 || self.http.connect_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "http timeouts must be >= 1 second".into(),
            ));
        }
        if self.guide.session_ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "guide.session_ttl_secs must be >= 1".into(),
            ));
        }
        if self.health.poll_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "health.poll_interval_secs must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Where the guide session record lives.
    pub fn session_path(&self) -> PathBuf {
        match &self.guide.session_file {
            Some(raw) if !raw.trim().is_empty() => {
                PathBuf::from(shellexpand::tilde(raw.trim()).into_owned())
            }
            _ => self.data_dir.join("guide_session.json"),
        }
    }
}
