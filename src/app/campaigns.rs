use super::confirm;
use crate::api::ApiClient;
use crate::cli::commands::{CampaignCommands, PostCommands};
use crate::config::Config;
use crate::domain::{Campaign, CampaignUpdate, Post, PostUpdate};
use crate::error::PreconditionError;
use crate::lifecycle::{CampaignWizard, PostAction, WizardStep, check_post_action};
use crate::ui::{badges, style as ui};
use anyhow::{Context, Result, bail};
use chrono::Utc;
use dialoguer::{Confirm, Input, Select};
use tracing::info;

pub async fn handle_campaign(
    api: &ApiClient,
    config: &Config,
    command: CampaignCommands,
) -> Result<()> {
    match command {
        CampaignCommands::List => {
            let campaigns = api.list_campaigns(config.project_id).await?;
            if campaigns.is_empty() {
                println!("  {}", ui::dim("No campaigns yet. Try `arapost guide`."));
            }
            for campaign in &campaigns {
                println!(
                    "  {:>4}  {}  {}  {}",
                    ui::dim(campaign.id),
                    badges::campaign_status(campaign.status),
                    ui::header(&campaign.name),
                    ui::dim(format!("{} posts", campaign.posts.len()))
                );
            }
            Ok(())
        }
        CampaignCommands::Show { id } => {
            let campaign = api.get_campaign(id).await?;
            print_campaign(&campaign);
            Ok(())
        }
        CampaignCommands::Create => run_wizard(api, config).await,
        CampaignCommands::Update {
            id,
            name,
            objective,
            tone,
            topics,
            posts_per_day,
            status,
        } => {
            let update = CampaignUpdate {
                name,
                objective,
                tone,
                topics,
                posts_per_day,
                status,
                ..CampaignUpdate::default()
            };
            if update.is_empty() {
                bail!("nothing to update: pass at least one field flag");
            }
            let campaign = api.update_campaign(id, &update).await?;
            println!("  {} Updated {}", ui::success("✓"), ui::header(&campaign.name));
            Ok(())
        }
        CampaignCommands::Generate {
            id,
            count,
            platform,
        } => {
            println!("  {} Generating {count} posts for {platform}…", ui::dim("→"));
            let result = api.generate_posts(id, count, &platform).await?;
            println!(
                "  {} {} posts generated",
                ui::success("✓"),
                ui::value(result.generated_count)
            );
            if let Some(message) = result.message {
                println!("  {}", ui::dim(message));
            }
            let campaign = api.get_campaign(id).await?;
            print_posts(&campaign.posts);
            Ok(())
        }
        CampaignCommands::Export { id } => {
            let campaign = api.get_campaign(id).await?;
            println!("{}", campaign.export_posts());
            Ok(())
        }
        CampaignCommands::Delete { id } => {
            info!(campaign_id = id, "campaign delete requested");
            Err(PreconditionError::Unsupported("deleting campaigns").into())
        }
    }
}

pub async fn handle_post(api: &ApiClient, yes: bool, command: PostCommands) -> Result<()> {
    match command {
        PostCommands::Edit {
            campaign,
            post,
            title,
            content,
            date,
        } => {
            let current = find_post(api, campaign, post).await?;
            let update = PostUpdate {
                title,
                content_text: content,
                scheduled_for: date,
                ..PostUpdate::default()
            };
            if update.edits_content() {
                check_post_action(&current, PostAction::Edit, Some(&update))?;
            }
            if update == PostUpdate::default() {
                bail!("nothing to update: pass --title, --content or --date");
            }
            api.update_post(post, update).await?;
            report_post(api, campaign, post, "Saved").await
        }
        PostCommands::Approve {
            campaign,
            post,
            date,
        } => {
            let mut current = find_post(api, campaign, post).await?;
            if let Some(date) = date {
                // Saving the date is an edit; a post past review keeps its schedule.
                check_post_action(&current, PostAction::Edit, None)?;
                let edit = PostUpdate {
                    scheduled_for: Some(date),
                    ..PostUpdate::default()
                };
                api.update_post(post, edit).await?;
                current = find_post(api, campaign, post).await?;
            }
            check_post_action(&current, PostAction::Approve, None)?;
            api.update_post(post, PostUpdate::approve()).await?;
            report_post(api, campaign, post, "Approved").await
        }
        PostCommands::Publish { campaign, post } => {
            let current = find_post(api, campaign, post).await?;
            check_post_action(&current, PostAction::Publish, None)?;
            if !confirm(yes, &format!("Publish post {post} now?"))? {
                return Ok(());
            }
            api.publish_post(post).await?;
            report_post(api, campaign, post, "Published").await
        }
        PostCommands::MarkPublished { campaign, post } => {
            let current = find_post(api, campaign, post).await?;
            check_post_action(&current, PostAction::MarkPublished, None)?;
            if !confirm(yes, &format!("Mark post {post} as published by hand?"))? {
                return Ok(());
            }
            api.mark_post_published(post).await?;
            report_post(api, campaign, post, "Marked as published").await
        }
    }
}

async fn find_post(api: &ApiClient, campaign_id: i64, post_id: i64) -> Result<Post> {
    let campaign = api.get_campaign(campaign_id).await?;
    campaign
        .post(post_id)
        .cloned()
        .with_context(|| format!("campaign {campaign_id} has no post {post_id}"))
}

/// Re-read after a change: the server decides the resulting status.
async fn report_post(api: &ApiClient, campaign_id: i64, post_id: i64, verb: &str) -> Result<()> {
    let post = find_post(api, campaign_id, post_id).await?;
    println!(
        "  {} {verb} post {} → {}",
        ui::success("✓"),
        ui::value(post.id),
        badges::post_status(&post.status)
    );
    Ok(())
}

fn print_campaign(campaign: &Campaign) {
    println!();
    println!(
        "  {}  {}  {}",
        ui::header(&campaign.name),
        badges::campaign_status(campaign.status),
        ui::dim(format!("#{}", campaign.id))
    );
    if let Some(objective) = &campaign.objective {
        println!("  {}  {}", ui::cyan("Objetivo"), objective);
    }
    if let Some(tone) = &campaign.tone {
        println!("  {}      {}", ui::cyan("Tono"), tone);
    }
    let topics = campaign.topic_list();
    if !topics.is_empty() {
        println!("  {}     {}", ui::cyan("Temas"), topics.join(", "));
    }
    if let Some(start) = &campaign.start_date {
        println!("  {}    {}", ui::cyan("Inicio"), start);
    }
    println!();
    print_posts(&campaign.posts);
}

fn print_posts(posts: &[Post]) {
    if posts.is_empty() {
        println!("  {}", ui::dim("No posts yet. Try `arapost campaigns generate <id>`."));
        return;
    }
    for post in posts {
        let schedule = post.schedule_day().unwrap_or("sin fecha");
        println!(
            "  {:>4}  {}  {}  {}",
            ui::dim(post.id),
            badges::post_status(&post.status),
            ui::dim(schedule),
            post.title.as_deref().unwrap_or_default()
        );
        let preview: String = post.body().chars().take(120).collect();
        if !preview.is_empty() {
            println!("        {}", ui::dim(preview.replace('\n', " ")));
        }
    }
}

async fn run_wizard(api: &ApiClient, config: &Config) -> Result<()> {
    let mut wizard = CampaignWizard::new(config.project_id, Utc::now().date_naive());
    loop {
        let step = wizard.step();
        println!();
        println!(
            "  {} {}",
            ui::accent(format!("[{}/4]", step.number())),
            ui::header(step)
        );
        match step {
            WizardStep::Details => {
                wizard.request.name = Input::new()
                    .with_prompt("  Nombre de la campaña")
                    .with_initial_text(wizard.request.name.clone())
                    .allow_empty(true)
                    .interact_text()?;
                wizard.request.objective = Input::new()
                    .with_prompt("  Objetivo")
                    .with_initial_text(wizard.request.objective.clone())
                    .allow_empty(true)
                    .interact_text()?;
                wizard.request.tone = Input::new()
                    .with_prompt("  Tono")
                    .default(wizard.request.tone.clone())
                    .interact_text()?;
            }
            WizardStep::Strategy => {
                let topics: String = Input::new()
                    .with_prompt("  Temas (separados por coma)")
                    .allow_empty(true)
                    .interact_text()?;
                wizard.request.topics = Some(topics);
                let per_day: u32 = Input::new()
                    .with_prompt("  Posts por día")
                    .default(wizard.request.posts_per_day.unwrap_or(1))
                    .interact_text()?;
                wizard.request.posts_per_day = Some(per_day);
            }
            WizardStep::Automation => {
                let choices = ["Autónoma (activa)", "Pausada"];
                let idx = Select::new()
                    .with_prompt("  Automatización")
                    .items(&choices)
                    .default(0)
                    .interact()?;
                wizard.autonomy_status = if idx == 0 {
                    crate::domain::AutonomyStatus::AutonomousActive
                } else {
                    crate::domain::AutonomyStatus::AutonomousPaused
                };
                wizard.style_locked = Confirm::new()
                    .with_prompt("  ¿Bloquear estilo?")
                    .default(false)
                    .interact()?;
            }
            WizardStep::Review => {
                let request = wizard.submission()?;
                println!("  {}  {}", ui::cyan("Nombre"), request.name);
                println!("  {}  {}", ui::cyan("Objetivo"), request.objective);
                println!("  {}  {}", ui::cyan("Temas"), request.topics.as_deref().unwrap_or_default());
                println!("  {}  {}", ui::cyan("Autonomía"), badges::autonomy_status(wizard.autonomy_status));
                let go = Confirm::new()
                    .with_prompt("  ¿Crear campaña?")
                    .default(true)
                    .interact()?;
                if !go {
                    wizard.back();
                    continue;
                }
                let campaign = api.create_campaign(request).await?;
                api.setup_automation(&wizard.automation_for(&campaign)).await?;
                println!(
                    "  {} {} {}",
                    ui::success("✓"),
                    ui::header(&campaign.name),
                    ui::dim(format!("#{}", campaign.id))
                );
                return Ok(());
            }
        }
        if let Err(e) = wizard.advance() {
            println!("  {}", ui::yellow(e));
        }
    }
}
