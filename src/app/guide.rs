//! Interactive guide conversation and the manual campaign form.

use crate::api::ApiClient;
use crate::cli::commands::parser::repl_help;
use crate::cli::commands::{ReplCommand, parse_repl_command};
use crate::config::Config;
use crate::domain::{Identity, IdentityFilter};
use crate::error::TurnError;
use crate::guide::{GuideController, GuideOption, GuideSettings, ManualForm, TurnOutcome, ViewMode};
use crate::session::{FileSessionStore, SessionStore};
use crate::ui::attachment::{Attachment, load_attachment, wrap_attachment};
use crate::ui::{chat, style as ui};
use anyhow::Result;
use dialoguer::{Input, Select};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

const PLATFORMS: [(&str, &str); 4] = [
    ("LinkedIn", "linkedin"),
    ("Twitter / X", "twitter"),
    ("Instagram", "instagram"),
    ("Facebook", "facebook"),
];

const TONES: [(&str, &str); 5] = [
    ("Profesional / Corporativo", "professional"),
    ("Casual / Amigable", "casual"),
    ("Entusiasta / Enérgico", "enthusiastic"),
    ("Informativo / Educativo", "informative"),
    ("Disruptivo / Polémico", "controversial"),
];

pub async fn run_guide(
    api: Arc<ApiClient>,
    config: &Config,
    mode: Option<ViewMode>,
    fresh: bool,
) -> Result<()> {
    let store = FileSessionStore::new(config.session_path());
    let settings = GuideSettings::from_config(config);
    let mut controller = if fresh {
        GuideController::fresh(Arc::clone(&api), store, settings)
    } else {
        GuideController::open(Arc::clone(&api), store, settings)
    };
    if let Some(mode) = mode
        && (mode != controller.mode() || !controller.was_restored())
    {
        controller.switch_mode(mode);
    }

    if controller.mode() == ViewMode::ManualForm {
        return run_manual_form(&api, config, &mut controller, ManualForm::default()).await;
    }

    print_banner(&controller, &api).await;
    println!("{}", chat::render_transcript(controller.messages()));

    let ctl = Mutex::new(controller);
    let mut attachment: Option<String> = None;

    loop {
        let line: String = Input::new()
            .with_prompt(ui::cyan("Tú"))
            .allow_empty(true)
            .interact_text()?;
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = parse_repl_command(&line) {
            match command {
                ReplCommand::Quit => break,
                ReplCommand::Help => println!("{}", ui::dim(repl_help())),
                ReplCommand::Invalid { reason } => println!("  {}", ui::yellow(reason)),
                ReplCommand::Restart => {
                    let mut c = ctl.lock().await;
                    c.reset();
                    println!("{}", chat::render_transcript(c.messages()));
                }
                ReplCommand::Mode { mode } => {
                    let mut c = ctl.lock().await;
                    c.switch_mode(mode);
                    if mode == ViewMode::ManualForm {
                        return run_manual_form(&api, config, &mut *c, ManualForm::default()).await;
                    }
                    println!("  {} {}", ui::accent("●"), ui::header(chat::mode_label(mode)));
                    println!("{}", chat::render_transcript(c.messages()));
                }
                ReplCommand::Identity { id } => {
                    let label = id.clone().unwrap_or_else(|| "Ara (Default)".into());
                    ctl.lock().await.select_identity(id);
                    println!("  {} Identidad: {}", ui::success("✓"), ui::value(label));
                }
                ReplCommand::Identities => {
                    match api.list_identities(config.project_id).await {
                        Ok(list) => print_identity_list(&IdentityFilter::Active.apply(&list)),
                        Err(e) => println!("  {}", ui::danger(e)),
                    }
                }
                ReplCommand::Attach { path } => match attach(&api, config, &path).await {
                    Ok((name, block)) => {
                        println!("  {} Adjunto listo: {}", ui::success("✓"), ui::value(name));
                        attachment.get_or_insert_with(String::new).push_str(&block);
                    }
                    Err(e) => println!("  {}", ui::danger(e)),
                },
            }
            continue;
        }
        if line.starts_with('/') {
            println!("  {}", ui::yellow("Comando desconocido. Escribe /help."));
            continue;
        }

        let (text, value) = {
            let c = ctl.lock().await;
            resolve_choice(&line, c.current_options())
        };

        let outcome = send_turn(&ctl, text, value.as_deref(), &mut attachment).await;
        match outcome {
            Err(TurnError::Blocked) => {
                println!(
                    "  {}",
                    ui::yellow("La conversación está bloqueada. Elige una opción o usa /restart.")
                );
            }
            Err(e) => println!("  {}", ui::yellow(e)),
            Ok(TurnOutcome::CreateCampaign(draft)) => {
                println!("  {} {}", ui::dim("→"), ui::dim("Creando campaña…"));
                let result = api.create_campaign(&draft).await;
                let created = result.is_ok();
                let mut c = ctl.lock().await;
                c.campaign_created(&result);
                print_last(&*c);
                if let Ok(campaign) = result {
                    println!(
                        "  {} {} {}",
                        ui::success("✓"),
                        ui::header(&campaign.name),
                        ui::dim(format!("#{}", campaign.id))
                    );
                    println!(
                        "  {} arapost campaigns generate {}",
                        ui::dim("Siguiente paso:"),
                        campaign.id
                    );
                }
                if created {
                    break;
                }
            }
            Ok(TurnOutcome::Completed) => {
                let mut c = ctl.lock().await;
                print_last(&*c);
                let default_mode = c.settings().default_mode;
                c.switch_mode(default_mode.into());
                println!("{}", chat::render_transcript(c.messages()));
            }
            Ok(TurnOutcome::Restarted | TurnOutcome::ModeSwitched(_)) => {
                let c = ctl.lock().await;
                println!("  {} {}", ui::accent("●"), ui::header(chat::mode_label(c.mode())));
                println!("{}", chat::render_transcript(c.messages()));
            }
            Ok(TurnOutcome::Discarded) => debug!("turn superseded"),
            Ok(TurnOutcome::Replied | TurnOutcome::Blocked | TurnOutcome::Failed) => {
                print_last(&*ctl.lock().await);
            }
        }
    }
    Ok(())
}

/// Fill the manual form (prompting for what the flags left out) and create
/// the campaign through the controller.
pub async fn run_manual_form<S: SessionStore>(
    api: &ApiClient,
    config: &Config,
    controller: &mut GuideController<ApiClient, S>,
    mut form: ManualForm,
) -> Result<()> {
    if controller.mode() != ViewMode::ManualForm {
        controller.switch_mode(ViewMode::ManualForm);
    }
    println!("  {} {}", ui::accent("●"), ui::header(chat::mode_label(ViewMode::ManualForm)));

    if form.topic.trim().is_empty() {
        form.topic = Input::new()
            .with_prompt("  Tema principal")
            .interact_text()?;
    }
    if form.platform.trim().is_empty() || !PLATFORMS.iter().any(|(_, v)| *v == form.platform) {
        form.platform = pick("  Plataforma", &PLATFORMS)?;
    }
    if !TONES.iter().any(|(_, v)| *v == form.tone) {
        form.tone = pick("  Tono", &TONES)?;
    }
    if form.identity_id.is_none() {
        let identities = load_identities(api, config.project_id).await;
        form.identity_id = pick_identity(&IdentityFilter::Active.apply(&identities))?;
    }
    if form.extra_info.is_empty() {
        form.extra_info = Input::new()
            .with_prompt("  Información adicional (opcional)")
            .allow_empty(true)
            .interact_text()?;
    }

    let draft = controller.submit_manual_form(form)?;
    let result = api.create_campaign(&draft).await;
    controller.campaign_created(&result);
    print_last(controller);
    let campaign = result?;
    println!(
        "  {} {} {}",
        ui::success("✓"),
        ui::header(&campaign.name),
        ui::dim(format!("#{}", campaign.id))
    );
    Ok(())
}

/// Entry point for `arapost manual`.
pub async fn run_manual(api: Arc<ApiClient>, config: &Config, form: ManualForm) -> Result<()> {
    let store = FileSessionStore::new(config.session_path());
    let mut controller =
        GuideController::open(Arc::clone(&api), store, GuideSettings::from_config(config));
    run_manual_form(&api, config, &mut controller, form).await
}

/// Dispatch one turn with the pending attachment appended. A refused turn
/// leaves the attachment queued for the next message.
async fn send_turn<S: SessionStore>(
    ctl: &Mutex<GuideController<ApiClient, S>>,
    mut text: String,
    value: Option<&str>,
    attachment: &mut Option<String>,
) -> Result<TurnOutcome, TurnError> {
    let pending = attachment.take();
    if let Some(block) = &pending {
        text.push_str(block);
    }
    let outcome = GuideController::dispatch_turn(ctl, &text, value).await;
    if outcome.is_err() {
        *attachment = pending;
    }
    outcome
}

async fn load_identities(api: &ApiClient, project_id: i64) -> Vec<Identity> {
    match api.list_identities(project_id).await {
        Ok(identities) => identities,
        Err(e) => {
            warn!(error = %e, project_id, "could not load identities");
            println!(
                "  {} {}",
                ui::danger(e),
                ui::dim("Se usará la identidad de marca.")
            );
            Vec::new()
        }
    }
}

/// A bare number picks that option from the last answer; anything else is
/// free text.
fn resolve_choice(line: &str, options: &[GuideOption]) -> (String, Option<String>) {
    if let Ok(n) = line.parse::<usize>()
        && let Some(option) = n.checked_sub(1).and_then(|i| options.get(i))
    {
        return (option.label.clone(), Some(option.value.clone()));
    }
    (line.to_string(), None)
}

async fn attach(api: &ApiClient, config: &Config, path: &Path) -> Result<(String, String)> {
    let attachment = load_attachment(path, config.guide.max_attachment_bytes).await?;
    let name = attachment.name().to_string();
    let text = match attachment {
        Attachment::Inline { text, .. } => text,
        Attachment::NeedsExtraction { name, mime, bytes } => {
            api.extract_text(&name, &mime, bytes).await?.text
        }
    };
    let block = wrap_attachment(&name, &text);
    Ok((name, block))
}

async fn print_banner<S: SessionStore>(controller: &GuideController<ApiClient, S>, api: &ApiClient) {
    let health = api.ai_health().await;
    println!();
    println!(
        "  {} {}  {}",
        ui::header("AraPost Manager"),
        ui::dim(chat::mode_label(controller.mode())),
        crate::ui::badges::ai_health(&health)
    );
    if controller.was_restored() {
        println!("  {}", ui::dim("Retomando tu conversación anterior."));
    }
    println!("  {}", ui::dim("Escribe /help para ver los comandos."));
    println!();
}

fn print_last<S: SessionStore>(controller: &GuideController<ApiClient, S>) {
    if let Some(message) = controller.messages().last() {
        println!("{}", chat::render_message(message));
    }
}

fn print_identity_list(identities: &[&Identity]) {
    if identities.is_empty() {
        println!("  {}", ui::dim("No hay identidades activas."));
        return;
    }
    for identity in identities {
        println!("  {}  {}", ui::dim(&identity.id), ui::value(&identity.name));
    }
}

fn pick(prompt: &str, choices: &[(&str, &str)]) -> Result<String> {
    let labels: Vec<&str> = choices.iter().map(|(label, _)| *label).collect();
    let idx = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(choices[idx].1.to_string())
}

fn pick_identity(identities: &[&Identity]) -> Result<Option<String>> {
    if identities.is_empty() {
        return Ok(None);
    }
    let mut labels = vec!["-- Usar Identidad de Marca (Default) --".to_string()];
    labels.extend(identities.iter().map(|i| i.name.clone()));
    let idx = Select::new()
        .with_prompt("  Identidad")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(idx.checked_sub(1).map(|i| identities[i].id.clone()))
}
