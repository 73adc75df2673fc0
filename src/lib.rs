#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod guide;
pub mod lifecycle;
pub mod session;

pub use api::ApiClient;
pub use config::Config;
pub use error::{AraError, Result};
