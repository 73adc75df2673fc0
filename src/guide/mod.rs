//! Conversational campaign creation backed by the server-side orchestrator.

pub mod controller;
pub mod draft;
pub mod orchestrator;
pub mod prompts;
pub mod state;
pub mod types;

pub use controller::{GuideController, GuideSettings, PendingTurn, TurnOutcome, TurnStart};
pub use draft::{ManualForm, campaign_request};
pub use orchestrator::Orchestrator;
pub use state::{GuideState, IdentityDraft, PostsPerDay, Topics};
pub use types::{
    GuideMode, GuideNextRequest, GuideNextResponse, GuideOption, Message, Role, TurnStatus,
    ViewMode,
};
