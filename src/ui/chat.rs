//! Plain-terminal rendering of the guide conversation.

use super::style;
use crate::guide::{GuideMode, Message, Role, ViewMode};
use std::fmt::Write;

pub fn mode_label(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Conversation(GuideMode::Collaborator) => "✨ Colaborador",
        ViewMode::Conversation(GuideMode::Guided) => "🤖 Guía",
        ViewMode::Conversation(GuideMode::Expert) => "⚡ Experto",
        ViewMode::Conversation(GuideMode::IdentityCreation) => "👤 Creando ID",
        ViewMode::ManualForm => "📝 Manual",
    }
}

/// One message with its options numbered from 1.
pub fn render_message(message: &Message) -> String {
    let mut out = String::new();
    let speaker = match message.role {
        Role::Ai => style::assistant("ARA ›"),
        Role::User => style::cyan("Tú  ›"),
    };
    let mut lines = message.content.lines();
    let first = lines.next().unwrap_or_default();
    let _ = writeln!(out, "{speaker} {first}");
    for line in lines {
        let _ = writeln!(out, "      {line}");
    }
    for (n, option) in message.options().iter().enumerate() {
        let _ = writeln!(out, "      {} {}", style::accent(format!("[{}]", n + 1)), option.label);
    }
    out
}

pub fn render_transcript(messages: &[Message]) -> String {
    messages.iter().map(render_message).collect::<Vec<_>>().join("\n")
}
