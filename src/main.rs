//! users-app binary entry point.
//!
//! Parses flags, sets up logging, and runs the prompt loop on stdin/stdout.
//!
use anyhow::anyhow;
use clap::Parser;

use users_app::cli::{self, Cli};

/// Program entry point: run the prompt loop and report any top-level error.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::setup_logging(cli.debug);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    cli::execute(&cli, stdin.lock(), std::io::stdout(), &mut stdout)
        .map_err(|e| anyhow!("application error: {e}"))
}
