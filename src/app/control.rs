use super::confirm;
use crate::api::ApiClient;
use crate::cli::commands::{AuthCommands, ControlCommands, TrackingCommands};
use crate::config::Config;
use crate::domain::{AutomationSetup, DashboardStats};
use crate::ui::{badges, style as ui};
use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

pub async fn handle_control(
    api: &ApiClient,
    yes: bool,
    command: ControlCommands,
) -> Result<()> {
    match command {
        ControlCommands::Stats => {
            print_stats(&api.dashboard_stats().await?);
            Ok(())
        }
        ControlCommands::Recommendations { status } => {
            let recommendations = api.recommendations(&status).await?;
            if recommendations.is_empty() {
                println!("  {}", ui::dim("No recommendations."));
            }
            for rec in recommendations {
                println!(
                    "  {:>4}  {}  {}  {}",
                    ui::dim(rec.id),
                    ui::accent(&rec.kind),
                    ui::header(rec.automation_name.as_deref().unwrap_or("?")),
                    ui::value(&rec.suggested_value)
                );
                if let Some(reasoning) = rec.reasoning {
                    println!("        {}", ui::dim(reasoning));
                }
            }
            Ok(())
        }
        ControlCommands::Act { id, action } => {
            if !confirm(yes, &format!("{action} recommendation {id}?"))? {
                return Ok(());
            }
            api.act_on_recommendation(id, action).await?;
            println!("  {} Recommendation {id}: {action}", ui::success("✓"));
            Ok(())
        }
        ControlCommands::EmergencyStop => {
            if !confirm(yes, "Pause ALL automations now?")? {
                return Ok(());
            }
            warn!("emergency stop requested");
            api.emergency_stop().await?;
            println!("  {}", ui::danger("All automations paused."));
            Ok(())
        }
        ControlCommands::Override {
            automation,
            action,
            reason,
        } => {
            api.manual_override(automation, action, &reason).await?;
            println!("  {} {action} applied to automation {automation}", ui::success("✓"));
            Ok(())
        }
        ControlCommands::Setup {
            campaign,
            autonomy,
            lock_style,
        } => {
            let campaign = api.get_campaign(campaign).await?;
            let setup = AutomationSetup {
                project_id: campaign.project_id,
                name: campaign.name.clone(),
                status: "active".into(),
                autonomy_status: autonomy,
                style_locked: lock_style,
            };
            api.setup_automation(&setup).await?;
            println!(
                "  {} Automation ready for {} ({})",
                ui::success("✓"),
                ui::header(&campaign.name),
                badges::autonomy_status(autonomy)
            );
            Ok(())
        }
        ControlCommands::Status { automation } => {
            let status = api.automation_status(automation).await?;
            println!(
                "  {}  {}  {}",
                ui::header(status.name.as_deref().unwrap_or("?")),
                badges::autonomy_status(status.autonomy_status),
                ui::dim(&status.status)
            );
            if status.is_manually_overridden {
                println!(
                    "  {} {}",
                    ui::yellow("override:"),
                    status.override_reason.as_deref().unwrap_or("-")
                );
            }
            println!("  {} {}", ui::cyan("style locked"), status.style_locked);
            if let Some(next) = status.next_run_at {
                println!("  {} {next}", ui::cyan("next run"));
            }
            if let Some(decision) = status.last_decision {
                println!(
                    "  {} {} {}",
                    ui::cyan("last decision"),
                    decision.decision.as_deref().unwrap_or("-"),
                    ui::dim(decision.reason.as_deref().unwrap_or_default())
                );
            }
            Ok(())
        }
        ControlCommands::History {
            automation,
            limit,
            offset,
        } => {
            let history = api.decision_history(automation, limit, offset).await?;
            println!("  {}", ui::dim(format!("{} decisions", history.total)));
            for entry in history.items {
                println!(
                    "  {}  {:>4}  {}  {}",
                    ui::dim(entry.created_at.as_deref().unwrap_or_default()),
                    entry.automation_id,
                    ui::accent(&entry.decision),
                    entry.reason.as_deref().unwrap_or_default()
                );
            }
            Ok(())
        }
    }
}

pub async fn handle_tracking(
    api: &ApiClient,
    config: &Config,
    command: TrackingCommands,
) -> Result<()> {
    let project = Some(config.project_id);
    match command {
        TrackingCommands::Report => {
            let report = api.tracking_report(project).await?;
            println!("  {}", ui::dim(format!("{} entries", report.count)));
            for entry in report.data {
                println!(
                    "  {:>4}  {}  {}  {}  {}",
                    ui::dim(entry.id),
                    entry.platform.as_deref().unwrap_or("-"),
                    entry.status.as_deref().unwrap_or("-"),
                    ui::dim(entry.created_at.as_deref().unwrap_or_default()),
                    entry.objective.as_deref().unwrap_or_default()
                );
            }
            Ok(())
        }
        TrackingCommands::Export { format, out } => {
            let bytes = api.export_tracking(format, project).await?;
            let path = out.unwrap_or_else(|| format.file_name().into());
            write_export(&path, &bytes).await?;
            println!(
                "  {} Wrote {} ({} bytes)",
                ui::success("✓"),
                ui::value(path.display()),
                bytes.len()
            );
            Ok(())
        }
    }
}

async fn write_export(path: &Path, bytes: &[u8]) -> Result<()> {
    tokio::fs::write(path, bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

pub async fn handle_auth(
    api: &ApiClient,
    config: &Config,
    yes: bool,
    command: AuthCommands,
) -> Result<()> {
    match command {
        AuthCommands::Accounts => {
            let accounts = api.connected_accounts().await?;
            if accounts.is_empty() {
                println!("  {}", ui::dim("No connected accounts. Try `arapost auth linkedin-url`."));
            }
            for account in accounts {
                let state = if account.active {
                    ui::success("active")
                } else {
                    ui::dim("inactive")
                };
                println!(
                    "  {:>4}  {}  {}  {state}",
                    ui::dim(account.id),
                    ui::header(&account.provider),
                    account.provider_name.as_deref().unwrap_or_default()
                );
            }
            Ok(())
        }
        AuthCommands::Disconnect { id } => {
            if !confirm(yes, &format!("Disconnect account {id}?"))? {
                return Ok(());
            }
            let done = api.disconnect_account(id).await?;
            if done {
                println!("  {} Account {id} disconnected", ui::success("✓"));
            } else {
                println!("  {}", ui::yellow(format!("Account {id} was not disconnected")));
            }
            Ok(())
        }
        AuthCommands::LinkedinUrl => {
            let url = api.linkedin_login_url(config.project_id).await?;
            println!("  Open this link to connect LinkedIn:");
            println!("  {}", ui::url(url));
            Ok(())
        }
    }
}

pub async fn handle_health(api: &ApiClient, config: &Config, watch: bool) -> Result<()> {
    if !watch {
        println!("  {}", badges::ai_health(&api.ai_health().await));
        return Ok(());
    }

    let period = Duration::from_secs(config.health.poll_interval_secs);
    let mut interval = tokio::time::interval(period);
    info!(every_secs = period.as_secs(), "watching AI health");
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let health = api.ai_health().await;
                println!(
                    "  {}  {}",
                    ui::dim(chrono::Local::now().format("%H:%M:%S")),
                    badges::ai_health(&health)
                );
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                return Ok(());
            }
        }
    }
}

pub async fn handle_extract(api: &ApiClient, config: &Config, file: &Path) -> Result<()> {
    use crate::ui::attachment::{Attachment, load_attachment};

    let text = match load_attachment(file, config.guide.max_attachment_bytes).await? {
        Attachment::Inline { text, .. } => text,
        Attachment::NeedsExtraction { name, mime, bytes } => {
            api.extract_text(&name, &mime, bytes).await?.text
        }
    };
    println!("{text}");
    Ok(())
}

fn print_stats(stats: &DashboardStats) {
    let global = if stats.global_autonomy_enabled {
        ui::success("ON")
    } else {
        ui::danger("OFF")
    };
    println!();
    println!("  {}  {global}", ui::header("Global autonomy"));
    println!(
        "  {}  total {}  active {}  paused {}",
        ui::cyan("Campaigns"),
        ui::value(stats.campaigns.total),
        ui::value(stats.campaigns.active_status),
        ui::value(stats.campaigns.paused_status)
    );
    println!(
        "  {}  active {}  paused {}  overridden {}  errors {}",
        ui::cyan("Automations"),
        ui::value(stats.autonomy_states.active),
        ui::value(stats.autonomy_states.paused),
        ui::value(stats.autonomy_states.manually_overridden),
        ui::danger(stats.autonomy_states.errors)
    );
    if let Some(action) = &stats.last_human_action {
        println!(
            "  {}  {} {}",
            ui::cyan("Last human action"),
            action.decision,
            ui::dim(action.created_at.as_deref().unwrap_or_default())
        );
    }
    println!();
}
