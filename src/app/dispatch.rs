use crate::api::ApiClient;
use crate::cli::commands::{Cli, Commands};
use crate::config::Config;
use crate::guide::ManualForm;
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use super::campaigns::{handle_campaign, handle_post};
use super::control::{handle_auth, handle_control, handle_extract, handle_health, handle_tracking};
use super::guide::{run_guide, run_manual};
use super::identities::handle_identity;

pub async fn dispatch(cli: Cli, config: Arc<Config>) -> Result<()> {
    let api = Arc::new(ApiClient::from_config(&config)?);
    debug!(base_url = api.base_url(), project_id = config.project_id, "dispatching");
    let yes = cli.yes;

    match cli.command {
        Commands::Guide { mode, fresh } => run_guide(api, &config, mode, fresh).await,

        Commands::Manual {
            topic,
            platform,
            tone,
            identity,
            extra,
        } => {
            let defaults = ManualForm::default();
            let form = ManualForm {
                topic: topic.unwrap_or_default(),
                platform: platform.unwrap_or(defaults.platform),
                tone: tone.unwrap_or(defaults.tone),
                identity_id: identity,
                extra_info: extra.unwrap_or_default(),
            };
            run_manual(api, &config, form).await
        }

        Commands::Campaigns { campaign_command } => {
            handle_campaign(&api, &config, campaign_command).await
        }

        Commands::Posts { post_command } => handle_post(&api, yes, post_command).await,

        Commands::Identities { identity_command } => {
            handle_identity(&api, &config, identity_command).await
        }

        Commands::Tracking { tracking_command } => {
            handle_tracking(&api, &config, tracking_command).await
        }

        Commands::Control { control_command } => {
            handle_control(&api, yes, control_command).await
        }

        Commands::Auth { auth_command } => handle_auth(&api, &config, yes, auth_command).await,

        Commands::Health { watch } => handle_health(&api, &config, watch).await,

        Commands::ExtractText { file } => handle_extract(&api, &config, &file).await,
    }
}
