pub mod campaigns;
pub mod control;
pub mod dispatch;
pub mod guide;
pub mod identities;

use anyhow::Result;
use dialoguer::Confirm;

/// Ask before a destructive action unless `--yes` was given.
pub(crate) fn confirm(yes: bool, prompt: &str) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    Ok(Confirm::new()
        .with_prompt(format!("  {prompt}"))
        .default(false)
        .interact()?)
}
