use crate::domain::{
    AutonomyStatus, CampaignStatus, ExportFormat, IdentityFilter, OverrideAction,
    RecommendationAction,
};
use clap::Subcommand;
use std::path::PathBuf;

/// Campaign subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CampaignCommands {
    /// List campaigns of the configured project
    List,
    /// Show one campaign with its posts
    Show { id: i64 },
    /// Step-by-step campaign wizard
    Create,
    /// Edit campaign fields
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        objective: Option<String>,
        #[arg(long)]
        tone: Option<String>,
        #[arg(long)]
        topics: Option<String>,
        #[arg(long)]
        posts_per_day: Option<u32>,
        #[arg(long)]
        status: Option<CampaignStatus>,
    },
    /// Ask the AI to draft posts
    Generate {
        id: i64,
        #[arg(long, default_value_t = crate::api::campaigns::DEFAULT_GENERATE_COUNT)]
        count: u32,
        #[arg(long, default_value = crate::api::campaigns::DEFAULT_PLATFORM)]
        platform: String,
    },
    /// Copy every post body to stdout
    Export { id: i64 },
    /// Delete a campaign (not available)
    Delete { id: i64 },
}

/// Post subcommands. Posts are addressed through their campaign.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PostCommands {
    /// Change title, body or schedule
    Edit {
        #[arg(long)]
        campaign: i64,
        post: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        /// Schedule as `YYYY-MM-DDTHH:MM`
        #[arg(long)]
        date: Option<String>,
    },
    /// Approve for automatic publication (needs a schedule)
    Approve {
        #[arg(long)]
        campaign: i64,
        post: i64,
        /// Save this schedule before approving
        #[arg(long)]
        date: Option<String>,
    },
    /// Publish now through the connected account
    Publish {
        #[arg(long)]
        campaign: i64,
        post: i64,
    },
    /// Record that the post went out by hand
    MarkPublished {
        #[arg(long)]
        campaign: i64,
        post: i64,
    },
}

/// Identity subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum IdentityCommands {
    /// List identities (active only by default)
    List {
        #[arg(long, default_value_t = IdentityFilter::Active)]
        filter: IdentityFilter,
    },
    /// Show one identity, archived ones included
    Show { id: String },
    /// Create an identity
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        purpose: Option<String>,
        #[arg(long)]
        tone: Option<String>,
        /// Comma-separated
        #[arg(long)]
        platforms: Option<String>,
        #[arg(long)]
        style: Option<String>,
        #[arg(long)]
        limits: Option<String>,
        #[arg(long)]
        draft: bool,
    },
    /// Edit identity fields
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        purpose: Option<String>,
        #[arg(long)]
        tone: Option<String>,
        #[arg(long)]
        platforms: Option<String>,
        #[arg(long)]
        style: Option<String>,
        #[arg(long)]
        limits: Option<String>,
    },
    /// Hide an identity from active views without deleting it
    Archive { id: String },
}

/// Tracking subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TrackingCommands {
    /// Print the publication report
    Report,
    /// Download the report as a file
    Export {
        #[arg(long, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
        /// Output path (defaults to tracking_report.<format>)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Control center subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ControlCommands {
    /// Global automation statistics
    Stats,
    /// Pending AI recommendations
    Recommendations {
        #[arg(long, default_value = "PENDING")]
        status: String,
    },
    /// Approve, reject or archive a recommendation
    Act {
        id: i64,
        action: RecommendationAction,
    },
    /// Pause every automation at once
    EmergencyStop,
    /// Force a campaign automation state
    Override {
        automation: i64,
        action: OverrideAction,
        #[arg(long, default_value = "Manual override from CLI")]
        reason: String,
    },
    /// Create the automation record for an existing campaign
    Setup {
        campaign: i64,
        #[arg(long, default_value_t = AutonomyStatus::AutonomousActive)]
        autonomy: AutonomyStatus,
        #[arg(long)]
        lock_style: bool,
    },
    /// Automation state of one campaign
    Status { automation: i64 },
    /// Decision log
    History {
        #[arg(long)]
        automation: Option<i64>,
        #[arg(long, default_value_t = 20)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
}

/// Connected account subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum AuthCommands {
    /// List connected accounts
    Accounts,
    /// Disconnect an account
    Disconnect { id: i64 },
    /// Print the LinkedIn OAuth login link
    LinkedinUrl,
}
