#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::too_many_lines,
    dead_code
)]

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod api;
mod app;
mod cli;
mod config;
mod domain;
mod error;
mod guide;
mod lifecycle;
mod session;
mod ui;

use cli::commands::Cli;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays pipeable.
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        std::env::var("ARAPOST_LOG")
            .ok()
            .and_then(|raw| raw.parse::<Level>().ok())
            .unwrap_or(Level::WARN)
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = Config::load_or_init()?;
    app::dispatch::dispatch(cli, Arc::new(config)).await
}
