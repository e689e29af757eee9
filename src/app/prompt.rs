//! Blocking console prompts.
//!
//! The loop asks for one value at a time through [`Prompter`]. The console
//! implementation reads lines from any `BufRead` so sessions can be scripted.

use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};

#[derive(Debug)]
pub enum PromptError {
    /// Input reached end of file before a value was confirmed.
    Closed,
    Io(std::io::Error),
}

impl Display for PromptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Closed => write!(f, "input closed"),
            PromptError::Io(e) => write!(f, "console error: {}", e),
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PromptError::Closed => None,
            PromptError::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for PromptError {
    fn from(e: std::io::Error) -> Self {
        PromptError::Io(e)
    }
}

pub type PromptResult<T> = std::result::Result<T, PromptError>;

pub trait Prompter {
    /// Ask for free text. The returned line has its line ending stripped.
    fn input(&mut self, message: &str) -> PromptResult<String>;

    /// Ask for a whole number, re-asking until one is entered. Fractions like
    /// `21.5` are asked again.
    fn number(&mut self, message: &str) -> PromptResult<i64>;
}

pub struct ConsolePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect what was echoed in tests.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self, message: &str) -> PromptResult<String> {
        write!(self.writer, "? {} ", message)?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn input(&mut self, message: &str) -> PromptResult<String> {
        self.read_line(message)
    }

    fn number(&mut self, message: &str) -> PromptResult<i64> {
        loop {
            let line = self.read_line(message)?;
            match line.trim().parse::<i64>() {
                Ok(n) => return Ok(n),
                Err(_) => {
                    tracing::debug!(input = %line, "not a number");
                    writeln!(self.writer, ">> Please enter a valid number")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn input_strips_line_ending_only() {
        let mut p = ConsolePrompter::new(Cursor::new(" Anna \r\n"), Vec::new());
        assert_eq!(p.input("Enter name : ").unwrap(), " Anna ");
        let echoed = String::from_utf8(p.into_writer()).unwrap();
        assert_eq!(echoed, "? Enter name :  ");
    }

    #[test]
    fn number_reasks_until_valid() {
        let mut p = ConsolePrompter::new(Cursor::new("abc\n\n -7 \n"), Vec::new());
        assert_eq!(p.number("Enter age : ").unwrap(), -7);
        let echoed = String::from_utf8(p.into_writer()).unwrap();
        assert_eq!(echoed.matches(">> Please enter a valid number").count(), 2);
    }

    #[test]
    fn fractions_are_not_whole_numbers() {
        let mut p = ConsolePrompter::new(Cursor::new("21.5\n21\n"), Vec::new());
        assert_eq!(p.number("Enter age : ").unwrap(), 21);
        let echoed = String::from_utf8(p.into_writer()).unwrap();
        assert_eq!(echoed.matches(">> Please enter a valid number").count(), 1);
    }

    #[test]
    fn end_of_input_is_closed() {
        let mut p = ConsolePrompter::new(Cursor::new(""), Vec::new());
        assert!(matches!(p.input("x"), Err(PromptError::Closed)));
        let mut p = ConsolePrompter::new(Cursor::new("twelve\n"), Vec::new());
        assert!(matches!(p.number("x"), Err(PromptError::Closed)));
    }
}
