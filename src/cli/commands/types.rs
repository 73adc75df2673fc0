use crate::guide::ViewMode;
use std::path::PathBuf;

/// Slash commands understood inside the guide conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Mode { mode: ViewMode },
    Restart,
    /// `None` goes back to the default voice.
    Identity { id: Option<String> },
    Identities,
    Attach { path: PathBuf },
    Help,
    Quit,
    /// A slash command with bad or missing arguments.
    Invalid { reason: String },
}
