//! Application state types and entry glue.
//!
//! Defines the closed set of operator actions, the color theme, and the state
//! threaded through the prompt loop (re-exported as `run`).
//!
pub mod prompt;
pub mod update;

use crossterm::style::Color;
use std::path::Path;
use std::time::Instant;

use crate::error::{Context, Result};
use crate::store::UserStore;

/// One of the six recognized commands, or the fallback for anything else.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    List,
    Add,
    Edit,
    Remove,
    Help,
    Quit,
    Unrecognized,
}

impl Action {
    /// Recognized commands in the order they are listed to the operator.
    pub const KNOWN: [Action; 6] = [
        Action::List,
        Action::Add,
        Action::Edit,
        Action::Remove,
        Action::Help,
        Action::Quit,
    ];

    /// Map a typed command to an action. Surrounding whitespace is ignored,
    /// matching is exact and case-sensitive.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "list" => Action::List,
            "add" => Action::Add,
            "edit" => Action::Edit,
            "remove" => Action::Remove,
            "help" => Action::Help,
            "quit" => Action::Quit,
            _ => Action::Unrecognized,
        }
    }

    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Action::List => Some("list"),
            Action::Add => Some("add"),
            Action::Edit => Some("edit"),
            Action::Remove => Some("remove"),
            Action::Help => Some("help"),
            Action::Quit => Some("quit"),
            Action::Unrecognized => None,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Action::List => "show all users",
            Action::Add => "add a new user to the list",
            Action::Edit => "edit an existing user",
            Action::Remove => "remove a user from the list",
            Action::Help => "display available commands",
            Action::Quit => "quit the app",
            Action::Unrecognized => "",
        }
    }
}

/// Colors for status messages and headings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub success: Color,
    pub error: Color,
    pub info: Color,
    pub title: Color,
    pub header: Color,
}

impl Theme {
    /// Basic ANSI palette for terminals without truecolor.
    pub fn dark() -> Self {
        Self {
            success: Color::Green,
            error: Color::Red,
            info: Color::Cyan,
            title: Color::Magenta,
            header: Color::Blue,
        }
    }

    /// Catppuccin Mocha theme defaults.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            success: Color::Rgb { r: 0xa6, g: 0xe3, b: 0xa1 }, // green
            error: Color::Rgb { r: 0xf3, g: 0x8b, b: 0xa8 },   // red
            info: Color::Rgb { r: 0x89, g: 0xb4, b: 0xfa },    // blue
            title: Color::Rgb { r: 0xcb, g: 0xa6, b: 0xf7 },   // mauve
            header: Color::Rgb { r: 0xb4, g: 0xbe, b: 0xfe },  // lavender
        }
    }

    /// Load theme from a simple key=value file. Unknown or missing keys fall back to `mocha`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).with_ctx(|| format!("read theme {}", path.display()))?;
        Ok(Self::parse(&contents))
    }

    /// Parse key=value lines on top of `mocha`.
    pub fn parse(contents: &str) -> Self {
        let mut theme = Self::mocha();
        for raw_line in contents.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.splitn(2, '=');
            let key = parts.next().map(|s| s.trim()).unwrap_or("");
            let val = parts.next().map(|s| s.trim()).unwrap_or("");
            if key.is_empty() || val.is_empty() {
                continue;
            }
            let Some(color) = Self::parse_color(val) else {
                tracing::warn!(key, value = val, "ignoring unparsable theme color");
                continue;
            };
            match key {
                "success" => theme.success = color,
                "error" => theme.error = color,
                "info" => theme.info = color,
                "title" => theme.title = color,
                "header" => theme.header = color,
                _ => tracing::debug!(key, "ignoring unknown theme key"),
            }
        }
        theme
    }

    /// Parse a color from hex ("#RRGGBB" or "RRGGBB"), "reset", "ansi:N",
    /// or a crossterm color name such as "dark_green".
    fn parse_color(s: &str) -> Option<Color> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "reset" {
            return Some(Color::Reset);
        }
        if let Some(n) = lower.strip_prefix("ansi:") {
            return n.parse().ok().map(Color::AnsiValue);
        }
        let hex = lower.strip_prefix('#').unwrap_or(lower.as_str());
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Some(Color::Rgb { r, g, b });
            }
        }
        Color::try_from(lower.as_str()).ok()
    }

    /// Persist the theme to a config file in key=value format.
    pub fn write_file(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        std::fs::write(path, self.to_config())
    }

    pub fn to_config(&self) -> String {
        use std::fmt::Write as _;
        let mut buf = String::new();
        buf.push_str("# users-app theme configuration\n");
        buf.push_str("# Colors: hex as #RRGGBB or RRGGBB, 'reset', ansi:N, or a name like dark_green\n\n");

        fn color_to_str(c: Color) -> String {
            match c {
                Color::Rgb { r, g, b } => format!("#{:02X}{:02X}{:02X}", r, g, b),
                Color::AnsiValue(i) => format!("ansi:{}", i),
                Color::Reset => "reset".to_string(),
                Color::Black => "black".to_string(),
                Color::DarkGrey => "dark_grey".to_string(),
                Color::Red => "red".to_string(),
                Color::DarkRed => "dark_red".to_string(),
                Color::Green => "green".to_string(),
                Color::DarkGreen => "dark_green".to_string(),
                Color::Yellow => "yellow".to_string(),
                Color::DarkYellow => "dark_yellow".to_string(),
                Color::Blue => "blue".to_string(),
                Color::DarkBlue => "dark_blue".to_string(),
                Color::Magenta => "magenta".to_string(),
                Color::DarkMagenta => "dark_magenta".to_string(),
                Color::Cyan => "cyan".to_string(),
                Color::DarkCyan => "dark_cyan".to_string(),
                Color::White => "white".to_string(),
                Color::Grey => "grey".to_string(),
            }
        }

        let mut kv = |k: &str, v: Color| {
            let _ = writeln!(&mut buf, "{} = {}", k, color_to_str(v));
        };

        kv("success", self.success);
        kv("error", self.error);
        kv("info", self.info);
        kv("title", self.title);
        kv("header", self.header);
        buf
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

pub struct AppState {
    pub started_at: Instant,
    pub store: UserStore,
    pub theme: Theme,
    /// Emit ANSI colors in status messages.
    pub color: bool,
}

impl AppState {
    /// Create state with an empty store.
    pub fn new(theme: Theme, color: bool) -> Self {
        Self {
            started_at: Instant::now(),
            store: UserStore::new(),
            theme,
            color,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::mocha(), true)
    }
}

/// Re-export the prompt loop entry function.
pub use update::run_app as run;
