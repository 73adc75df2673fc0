use crate::api::ApiClient;
use crate::cli::commands::IdentityCommands;
use crate::config::Config;
use crate::domain::identity::{find_by_id, split_platforms};
use crate::domain::{CreateIdentityRequest, Identity, IdentityStatus, IdentityUpdate};
use crate::ui::{badges, style as ui};
use anyhow::{Context, Result, bail};

pub async fn handle_identity(
    api: &ApiClient,
    config: &Config,
    command: IdentityCommands,
) -> Result<()> {
    match command {
        IdentityCommands::List { filter } => {
            let all = api.list_identities(config.project_id).await?;
            let shown = filter.apply(&all);
            if shown.is_empty() {
                println!("  {}", ui::dim(format!("No {filter} identities.")));
            }
            for identity in shown {
                println!(
                    "  {}  {}  {}  {}",
                    ui::dim(&identity.id),
                    badges::identity_status(identity.status),
                    ui::header(&identity.name),
                    ui::dim(identity.preferred_platforms.join(", "))
                );
            }
            Ok(())
        }
        IdentityCommands::Show { id } => {
            let all = api.list_identities(config.project_id).await?;
            let identity =
                find_by_id(&all, &id).with_context(|| format!("no identity with id {id}"))?;
            print_identity(identity);
            Ok(())
        }
        IdentityCommands::Create {
            name,
            purpose,
            tone,
            platforms,
            style,
            limits,
            draft,
        } => {
            let request = CreateIdentityRequest {
                name,
                purpose,
                tone,
                preferred_platforms: platforms.as_deref().map(split_platforms).unwrap_or_default(),
                communication_style: style,
                content_limits: limits,
                role: None,
                status: Some(if draft {
                    IdentityStatus::Draft
                } else {
                    IdentityStatus::Active
                }),
            };
            let identity = api.create_identity(&request).await?;
            println!(
                "  {} Created {} {}",
                ui::success("✓"),
                ui::header(&identity.name),
                ui::dim(&identity.id)
            );
            Ok(())
        }
        IdentityCommands::Update {
            id,
            name,
            purpose,
            tone,
            platforms,
            style,
            limits,
        } => {
            let update = IdentityUpdate {
                name,
                purpose,
                tone,
                preferred_platforms: platforms.as_deref().map(split_platforms),
                communication_style: style,
                content_limits: limits,
                ..IdentityUpdate::default()
            };
            if update == IdentityUpdate::default() {
                bail!("nothing to update: pass at least one field flag");
            }
            let identity = api.update_identity(&id, &update).await?;
            println!("  {} Updated {}", ui::success("✓"), ui::header(&identity.name));
            Ok(())
        }
        IdentityCommands::Archive { id } => {
            let identity = api.archive_identity(&id).await?;
            println!(
                "  {} Archived {} {}",
                ui::success("✓"),
                ui::header(&identity.name),
                ui::dim("(still available with `identities show`)")
            );
            Ok(())
        }
    }
}

fn print_identity(identity: &Identity) {
    println!();
    println!(
        "  {}  {}  {}",
        ui::header(&identity.name),
        badges::identity_status(identity.status),
        ui::dim(&identity.id)
    );
    let fields = [
        ("Propósito", identity.purpose.as_deref()),
        ("Tono", identity.tone.as_deref()),
        ("Estilo", identity.communication_style.as_deref()),
        ("Límites", identity.content_limits.as_deref()),
        ("Rol", identity.role.as_deref()),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            println!("  {:<10} {}", ui::cyan(label), value);
        }
    }
    if !identity.preferred_platforms.is_empty() {
        println!(
            "  {:<10} {}",
            ui::cyan("Redes"),
            identity.preferred_platforms.join(", ")
        );
    }
}
