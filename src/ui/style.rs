use console::style;
use std::fmt::Display;

/// Green bold: confirmations, created/published results
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// White bold: section headers, campaign names
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: ids, timestamps, secondary lines
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow: warnings, pending states
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Red bold: failures, the kill switch
pub fn danger<D: Display>(text: D) -> String {
    style(text).red().bold().to_string()
}

/// Green: field values
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan bold: option numbers, step counters
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Cyan: field labels
pub fn cyan<D: Display>(text: D) -> String {
    style(text).cyan().to_string()
}

/// Magenta: the assistant's voice in the guide
pub fn assistant<D: Display>(text: D) -> String {
    style(text).magenta().bold().to_string()
}

/// Cyan underlined: login links
pub fn url<D: Display>(text: D) -> String {
    style(text).cyan().underlined().to_string()
}
