//! Client-side checks that run before a state-changing request. The server
//! stays authoritative for the transitions themselves.

mod post;
mod wizard;

pub use post::{PostAction, check_post_action};
pub use wizard::{CampaignWizard, WizardStep};
