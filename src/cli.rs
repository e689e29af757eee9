//! Command-line flags and logging setup for the binary.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::app::prompt::ConsolePrompter;
use crate::app::{self, AppState, Theme};
use crate::error::{Context, Result};

#[derive(Parser, Debug)]
#[command(version, about = "Manage an in-memory list of users from an interactive prompt")]
pub struct Cli {
    /// Log verbosity on stderr: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Theme file with `key = color` lines
    #[arg(long, value_name = "PATH")]
    pub theme: Option<PathBuf>,

    /// Print status messages without colors
    #[arg(long, env = "NO_COLOR", action = clap::ArgAction::SetTrue, value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    /// Write the active theme to PATH and exit
    #[arg(long, value_name = "PATH")]
    pub write_theme: Option<PathBuf>,
}

impl Cli {
    /// Theme from `--theme`, or the default palette.
    pub fn load_theme(&self) -> Result<Theme> {
        match &self.theme {
            Some(path) => Theme::load(path),
            None => Ok(Theme::default()),
        }
    }
}

/// Run what the flags ask for: dump the theme with `--write-theme`, otherwise
/// the prompt loop reading from `reader`, echoing prompts to `prompt_out` and
/// printing results to `out`.
pub fn execute<R, P, W>(cli: &Cli, reader: R, prompt_out: P, out: &mut W) -> Result<()>
where
    R: BufRead,
    P: Write,
    W: Write,
{
    let theme = cli.load_theme()?;

    if let Some(path) = &cli.write_theme {
        theme
            .write_file(path)
            .with_ctx(|| format!("write theme {}", path.display()))?;
        tracing::info!(path = %path.display(), "theme written");
        return Ok(());
    }

    let mut state = AppState::new(theme, !cli.no_color);
    let mut prompter = ConsolePrompter::new(reader, prompt_out);
    app::run(&mut state, &mut prompter, out)
}

pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Send log events to stderr. `RUST_LOG` wins over `-d` when set.
pub fn setup_logging(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(filter)
        .init();

    tracing::debug!(verbosity, "logging initialized");
}
