use clap::{Parser, Subcommand};

pub mod parser;
mod subcommands;
pub mod types;

pub use parser::parse_repl_command;
pub use subcommands::{
    AuthCommands, CampaignCommands, ControlCommands, IdentityCommands, PostCommands,
    TrackingCommands,
};
pub use types::ReplCommand;

use crate::guide::ViewMode;

/// `arapost` - terminal dashboard for AraPost campaign automation.
#[derive(Parser, Debug)]
#[command(name = "arapost")]
#[command(version)]
#[command(about = "Create campaigns with the ARA guide, review posts and steer automation.", long_about = None)]
pub struct Cli {
    /// Log request-level detail to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip confirmation prompts for destructive actions
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Talk to the ARA guide to shape a new campaign
    Guide {
        /// Start in this mode (collaborator, guided, expert, identity_creation)
        #[arg(short, long)]
        mode: Option<ViewMode>,

        /// Discard any saved conversation first
        #[arg(long)]
        fresh: bool,
    },

    /// Create a campaign from a short form instead of a conversation
    Manual {
        #[arg(long)]
        topic: Option<String>,

        #[arg(long)]
        platform: Option<String>,

        #[arg(long)]
        tone: Option<String>,

        /// Identity that should voice the campaign
        #[arg(long)]
        identity: Option<String>,

        /// Free-form extra instructions
        #[arg(long)]
        extra: Option<String>,
    },

    /// List, inspect and edit campaigns
    Campaigns {
        #[command(subcommand)]
        campaign_command: CampaignCommands,
    },

    /// Edit, approve and publish posts
    Posts {
        #[command(subcommand)]
        post_command: PostCommands,
    },

    /// Manage functional identities
    Identities {
        #[command(subcommand)]
        identity_command: IdentityCommands,
    },

    /// Publication tracking report
    Tracking {
        #[command(subcommand)]
        tracking_command: TrackingCommands,
    },

    /// Automation control center: stats, recommendations, kill switch
    Control {
        #[command(subcommand)]
        control_command: ControlCommands,
    },

    /// Connected social accounts
    Auth {
        #[command(subcommand)]
        auth_command: AuthCommands,
    },

    /// Show whether the server's AI provider is reachable
    Health {
        /// Keep polling at the configured interval
        #[arg(long)]
        watch: bool,
    },

    /// Extract text from a local document via the server
    ExtractText {
        file: std::path::PathBuf,
    },
}
