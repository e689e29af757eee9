pub mod components;
pub mod users;

use crossterm::style::Stylize;
use std::io::{self, Write};

use crate::app::AppState;
use crate::message::Message;
use crate::store::Listing;

/// Print one status line using the app's theme.
pub fn show_message<W: Write>(out: &mut W, app: &AppState, message: &Message) -> io::Result<()> {
    writeln!(out, "{}", components::render_message(message, &app.theme, app.color))
}

/// Startup banner followed by the command list.
pub fn render_banner<W: Write>(out: &mut W, app: &AppState) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        components::render_title("----- Welcome to the UsersApp! -----", &app.theme, app.color)
    )?;
    writeln!(out, "====================================")?;
    show_message(out, app, &Message::info("Available actions"))?;
    writeln!(out)?;
    for line in components::command_lines() {
        writeln!(out, "{line}")?;
    }
    writeln!(out)
}

pub fn render_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Available commands:")?;
    for line in components::command_lines() {
        writeln!(out, "{line}")?;
    }
    writeln!(out)
}

/// Print the users heading and either the table or the no-data line.
pub fn render_listing<W: Write>(out: &mut W, app: &AppState) -> io::Result<()> {
    show_message(out, app, &Message::info("Users data"))?;
    match app.store.list_all() {
        Listing::Users(users) => {
            for (row, line) in users::render_users_table(users).into_iter().enumerate() {
                // row 1 is the column header, inside the top border
                if row == 1 && app.color {
                    writeln!(out, "{}", line.with(app.theme.header))?;
                } else {
                    writeln!(out, "{line}")?;
                }
            }
            Ok(())
        }
        Listing::NoData => show_message(out, app, &Message::info("No data...")),
    }
}
