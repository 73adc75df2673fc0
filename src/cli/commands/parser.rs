use super::types::ReplCommand;
use crate::guide::ViewMode;

pub fn parse_repl_command(input: &str) -> Option<ReplCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next()?.to_lowercase();
    let args = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "/mode" => Some(match args.parse::<ViewMode>() {
            Ok(mode) => ReplCommand::Mode { mode },
            Err(e) => ReplCommand::Invalid { reason: e },
        }),
        "/restart" | "/reset" => Some(ReplCommand::Restart),
        "/identity" => Some(ReplCommand::Identity {
            id: match args {
                "" | "none" | "ara" => None,
                id => Some(id.to_string()),
            },
        }),
        "/identities" => Some(ReplCommand::Identities),
        "/attach" => Some(if args.is_empty() {
            ReplCommand::Invalid {
                reason: "usage: /attach <path>".into(),
            }
        } else {
            ReplCommand::Attach { path: args.into() }
        }),
        "/help" | "/?" => Some(ReplCommand::Help),
        "/quit" | "/exit" | "/q" => Some(ReplCommand::Quit),
        _ => None,
    }
}

pub fn repl_help() -> &'static str {
    "/mode <collaborator|guided|expert|identity_creation|manual>  -- switch mode (starts over)\n\
     /restart          -- back to the first question\n\
     /identity <id>    -- voice the campaign with an identity (/identity none to clear)\n\
     /identities       -- list active identities\n\
     /attach <path>    -- add a text file or PDF to your next message\n\
     /quit             -- leave (the conversation is kept for 4 hours)\n\
     <number>          -- pick an option from the last answer"
}
