use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `arapost`.
///
/// Each subsystem defines its own error variant. Command handlers match on
/// these to decide how to surface the failure; the binary continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum AraError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Remote API ──────────────────────────────────────────────────────
    #[error("api: {0}")]
    Api(#[from] ApiError),

    // ── Client-side preconditions ───────────────────────────────────────
    #[error("{0}")]
    Precondition(#[from] PreconditionError),

    // ── Guide session persistence ───────────────────────────────────────
    #[error("session: {0}")]
    Session(#[from] SessionError),

    // ── Guide turn handling ─────────────────────────────────────────────
    #[error("guide: {0}")]
    Turn(#[from] TurnError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Remote API errors ──────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{path} returned {status}: {detail}")]
    Server {
        path: String,
        status: u16,
        detail: String,
    },

    #[error("unexpected response from {path}: {message}")]
    Decode { path: String, message: String },

    #[error("invalid base url: {0}")]
    BaseUrl(String),
}

impl ApiError {
    /// Server-provided `detail`, if this error carries one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Server { detail, .. } => Some(detail),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ─── Precondition errors ────────────────────────────────────────────────────

/// Failures detected before a request is issued. No network traffic happens
/// when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("save the schedule date before approving post {post_id}")]
    UnsavedSchedule { post_id: i64 },

    #[error("post {post_id} needs a scheduled date before it can be approved")]
    MissingSchedule { post_id: i64 },

    #[error("post {post_id} cannot {action} while {status}")]
    InvalidTransition {
        post_id: i64,
        action: String,
        status: String,
    },

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("attachment {name} is too large ({size} bytes, limit {limit})")]
    AttachmentTooLarge { name: String, size: u64, limit: u64 },

    #[error("{0} is not available yet")]
    Unsupported(&'static str),
}

// ─── Session errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("store: {0}")]
    Store(String),

    #[error("corrupt session record: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Guide turn errors ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("a turn is already being processed")]
    Busy,

    #[error("input is blocked until the session is restarted")]
    Blocked,

    #[error("the manual form has no conversation")]
    NotConversational,

    #[error("empty input")]
    Empty,
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, AraError>;
