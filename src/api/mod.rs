//! Thin typed client over the dashboard's REST API.
//!
//! Every endpoint declares its response [`Envelope`] here; callers always get
//! the normalized payload type.

mod auth;
pub mod campaigns;
mod control;
mod envelope;
mod guide;
mod health;
mod http_client;
mod identities;
mod posts;
mod tracking;
mod utils;

pub use envelope::Envelope;
pub use http_client::{ApiClient, build_api_client};
pub use utils::ExtractedText;
