//! Shared output components (status lines, banner, command list).
//!
use crossterm::style::Stylize;

use crate::app::{Action, Theme};
use crate::message::{Message, MessageVariant};

/// Format a status message as a single line, colored by severity when `color` is set.
pub fn render_message(message: &Message, theme: &Theme, color: bool) -> String {
    if !color {
        return message.to_string();
    }
    let fg = match message.variant {
        MessageVariant::Success => theme.success,
        MessageVariant::Error => theme.error,
        MessageVariant::Info => theme.info,
    };
    format!(
        "{} {}",
        message.variant.symbol().with(fg).bold(),
        message.content().with(fg)
    )
}

/// Lines listing every recognized command with its description.
pub fn command_lines() -> Vec<String> {
    Action::KNOWN
        .iter()
        .filter_map(|a| a.keyword().map(|kw| format!("{} – {}", kw, a.description())))
        .collect()
}

pub fn render_title(text: &str, theme: &Theme, color: bool) -> String {
    if color {
        text.with(theme.title).bold().to_string()
    } else {
        text.to_string()
    }
}
