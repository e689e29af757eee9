//! Severity-tagged status messages.
//!
//! Every outcome the operator sees (store results, goodbye, unknown commands)
//! is a [`Message`]. Rendering with colors lives in `ui::components`.

use std::fmt::{Display, Formatter};

/// Severity of a status message.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MessageVariant {
    Success,
    Error,
    Info,
}

impl MessageVariant {
    /// Leading symbol printed before the message text.
    pub fn symbol(self) -> &'static str {
        match self {
            MessageVariant::Success => "✔",
            MessageVariant::Error => "✖",
            MessageVariant::Info => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub variant: MessageVariant,
    content: String,
}

impl Message {
    pub fn new(variant: MessageVariant, content: impl Into<String>) -> Self {
        Self {
            variant,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageVariant::Success, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageVariant::Error, content)
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageVariant::Info, content)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_error(&self) -> bool {
        self.variant == MessageVariant::Error
    }

    /// Write the bare text, without symbol or color.
    pub fn show<W: std::io::Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.content)
    }

    /// Uppercase the first character and lowercase the rest.
    pub fn capitalize(&mut self) {
        let mut chars = self.content.chars();
        let capitalized = match chars.next() {
            Some(first) => {
                let mut s: String = first.to_uppercase().collect();
                s.push_str(&chars.as_str().to_lowercase());
                s
            }
            None => String::new(),
        };
        self.content = capitalized;
    }

    pub fn to_upper_case(&mut self) {
        self.content = self.content.to_uppercase();
    }

    pub fn to_lower_case(&mut self) {
        self.content = self.content.to_lowercase();
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.variant.symbol(), self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_lowercases_tail() {
        let mut m = Message::info("bYE BYE");
        m.capitalize();
        assert_eq!(m.content(), "Bye bye");

        let mut empty = Message::info("");
        empty.capitalize();
        assert_eq!(empty.content(), "");
    }

    #[test]
    fn case_helpers_rewrite_content() {
        let mut m = Message::error("User Not Found");
        m.to_upper_case();
        assert_eq!(m.content(), "USER NOT FOUND");
        m.to_lower_case();
        assert_eq!(m.content(), "user not found");
    }

    #[test]
    fn display_prefixes_symbol() {
        assert_eq!(Message::success("ok").to_string(), "✔ ok");
        assert_eq!(Message::error("no").to_string(), "✖ no");
        assert_eq!(Message::info("hi").to_string(), "ℹ hi");
    }

    #[test]
    fn show_writes_plain_line() {
        let mut out = Vec::new();
        Message::error("Wrong data!").show(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Wrong data!\n");
    }
}
