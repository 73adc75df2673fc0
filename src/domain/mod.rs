//! Wire types for the dashboard API.
//!
//! Field names follow the server's JSON. Where the server is loose about a
//! field's shape (status casing, list-or-string columns) the type normalizes it
//! on deserialization so callers never branch on payload shape.

pub mod account;
pub mod campaign;
pub mod control;
pub mod identity;
pub mod post;
pub mod tracking;

pub use account::{AiHealth, ConnectedAccount, LoginUrl};
pub use campaign::{
    Campaign, CampaignStatus, CampaignUpdate, CreateCampaignRequest, GenerateResult,
};
pub use control::{
    AutomationSetup, AutomationStatus, AutonomyStatus, DashboardStats, DecisionHistory,
    DecisionLogEntry, OverrideAction, Recommendation, RecommendationAction,
};
pub use identity::{CreateIdentityRequest, Identity, IdentityFilter, IdentityStatus, IdentityUpdate};
pub use post::{Post, PostStatus, PostUpdate};
pub use tracking::{ExportFormat, TrackingEntry, TrackingReport};
