use std::io::Write;

use crate::app::prompt::{PromptError, PromptResult, Prompter};
use crate::app::{Action, AppState};
use crate::error::{Context, Result};
use crate::message::Message;
use crate::store::User;
use crate::ui;

/// Whether the loop should ask for another command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Print the banner, then read and dispatch commands until `quit` or end of input.
pub fn run_app<P: Prompter, W: Write>(app: &mut AppState, prompter: &mut P, out: &mut W) -> Result<()> {
    ui::render_banner(out, app).with_ctx(|| "write banner".to_string())?;

    loop {
        let line = match prompter.input("How can I help you?") {
            Ok(line) => line,
            Err(PromptError::Closed) => {
                tracing::info!("input closed, leaving prompt loop");
                return Ok(());
            }
            Err(e) => return Err(e).with_ctx(|| "read command".to_string()),
        };
        let action = Action::parse(&line);
        tracing::debug!(input = %line, ?action, "dispatching command");

        match handle_action(app, action, prompter, out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(PromptError::Closed) => {
                tracing::info!(?action, "input closed mid-command, leaving prompt loop");
                return Ok(());
            }
            Err(e) => return Err(e).with_ctx(|| format!("handle {:?}", action)),
        }
    }

    tracing::info!(
        users = app.store.len(),
        elapsed_ms = u64::try_from(app.started_at.elapsed().as_millis()).unwrap_or(u64::MAX),
        "session finished"
    );
    Ok(())
}

/// Carry out one action: collect its fields, update the store, print the outcome.
pub fn handle_action<P: Prompter, W: Write>(
    app: &mut AppState,
    action: Action,
    prompter: &mut P,
    out: &mut W,
) -> PromptResult<Flow> {
    match action {
        Action::List => ui::render_listing(out, app)?,
        Action::Help => ui::render_help(out)?,
        Action::Add => {
            let name = prompter.input("Enter name : ")?;
            let age = prompter.number("Enter age : ")?;
            let outcome = app.store.add(User::new(name, age));
            ui::show_message(out, app, &outcome)?;
        }
        Action::Edit => {
            let index = prompter.number("Enter the index of the user to edit (0, 1, 2, ...) : ")?;
            let name = prompter.input("Enter new name : ")?;
            let age = prompter.number("Enter new age : ")?;
            let outcome = app.store.edit(index, User::new(name, age));
            ui::show_message(out, app, &outcome)?;
        }
        Action::Remove => {
            let name = prompter.input("Enter name : ")?;
            let outcome = app.store.remove(&name);
            ui::show_message(out, app, &outcome)?;
        }
        Action::Quit => {
            ui::show_message(out, app, &Message::info("Bye bye !"))?;
            return Ok(Flow::Quit);
        }
        Action::Unrecognized => {
            ui::show_message(
                out,
                app,
                &Message::error(r#"Command not found. Use command "help" to see all available commands."#),
            )?;
        }
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Theme;
    use crate::app::prompt::ConsolePrompter;
    use std::io::Cursor;

    fn plain_app() -> AppState {
        AppState::new(Theme::mocha(), false)
    }

    #[test]
    fn quit_stops_and_says_goodbye() {
        let mut app = plain_app();
        let mut prompter = ConsolePrompter::new(Cursor::new(""), Vec::new());
        let mut out = Vec::new();
        let flow = handle_action(&mut app, Action::Quit, &mut prompter, &mut out).unwrap();
        assert_eq!(flow, Flow::Quit);
        assert_eq!(String::from_utf8(out).unwrap(), "ℹ Bye bye !\n");
    }

    #[test]
    fn add_prompts_name_then_age() {
        let mut app = plain_app();
        let mut prompter = ConsolePrompter::new(Cursor::new("Anna\n21\n"), Vec::new());
        let mut out = Vec::new();
        let flow = handle_action(&mut app, Action::Add, &mut prompter, &mut out).unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_eq!(app.store.users(), &[User::new("Anna", 21)]);
        let echoed = String::from_utf8(prompter.into_writer()).unwrap();
        assert_eq!(echoed, "? Enter name :  ? Enter age :  ");
    }

    #[test]
    fn closed_input_mid_add_leaves_store_untouched() {
        let mut app = plain_app();
        let mut prompter = ConsolePrompter::new(Cursor::new("Anna\n"), Vec::new());
        let mut out = Vec::new();
        let res = handle_action(&mut app, Action::Add, &mut prompter, &mut out);
        assert!(matches!(res, Err(PromptError::Closed)));
        assert!(app.store.is_empty());
    }
}
