//! Interactive prompt commands

use chrono::NaiveDate;
use std::fmt;

use crate::session::Intent;

pub const HELP: &str = "\
Commands:
  fetch <start> <end>   show images between two dates (YYYY-MM-DD)
  show <date>           open the detail view for a gallery entry
  close                 close the detail view (also: esc)
  help                  show this message
  quit                  exit (also: exit)
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    UnknownCommand(String),
    InvalidDate(String),
    MissingArgument(&'static str),
}

impl std::error::Error for CommandError {}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CommandError::UnknownCommand(cmd) => {
                write!(f, "Unknown command '{}', type 'help' for a list", cmd)
            }
            CommandError::InvalidDate(value) => {
                write!(f, "Invalid date '{}', expected YYYY-MM-DD", value)
            }
            CommandError::MissingArgument(name) => write!(f, "Missing argument: {}", name),
        }
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| CommandError::InvalidDate(value.to_string()))
}

/// Parse one prompt line; blank lines yield `None`
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };

    let command = match name.to_lowercase().as_str() {
        // Dates left out are passed on as unset so the session reports them
        "fetch" => {
            let start = words.next().map(parse_date).transpose()?;
            let end = words.next().map(parse_date).transpose()?;
            Command::Intent(Intent::FetchRequested { start, end })
        }
        "show" | "open" => {
            let value = words.next().ok_or(CommandError::MissingArgument("date"))?;
            Command::Intent(Intent::ItemSelected {
                date: parse_date(value)?,
            })
        }
        "close" | "esc" => Command::Intent(Intent::CloseRequested),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}
