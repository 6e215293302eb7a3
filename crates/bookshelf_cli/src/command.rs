//! Line commands accepted by the interactive shell.

use bookshelf_core::{BookField, UnknownFieldError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const HELP: &str = "\
commands:
  open <path>            follow a link or typed path (/, /books/<category>, /book/<id>, /add-book)
  back                   return to the previous page
  search <text>          set the browse search text (empty clears)
  set <field> <value>    fill a form field (title|author|category|description|rating)
  submit                 submit the add-book form
  show                   render the current page again
  dump                   print the catalog as JSON
  help                   print this help
  quit                   exit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(String),
    Back,
    Search(String),
    Set(BookField, String),
    Submit,
    Show,
    Dump,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    Field(UnknownFieldError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::Unknown(word) => write!(f, "unknown command `{word}`; type `help`"),
            Self::MissingArgument(usage) => write!(f, "usage: {usage}"),
            Self::Field(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl From<UnknownFieldError> for CommandError {
    fn from(value: UnknownFieldError) -> Self {
        Self::Field(value)
    }
}

/// Parses one input line.
///
/// Arguments after the command word keep their inner spacing so typed text
/// reaches the shell unchanged.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    match word {
        "" => Err(CommandError::Empty),
        "open" | "go" => {
            let path = rest.trim();
            if path.is_empty() {
                return Err(CommandError::MissingArgument("open <path>"));
            }
            Ok(Command::Open(path.to_string()))
        }
        "back" => Ok(Command::Back),
        "search" => Ok(Command::Search(rest.to_string())),
        "set" => {
            let (field, value) = rest
                .trim_start()
                .split_once(' ')
                .unwrap_or((rest.trim(), ""));
            if field.is_empty() {
                return Err(CommandError::MissingArgument("set <field> <value>"));
            }
            Ok(Command::Set(field.parse()?, value.to_string()))
        }
        "submit" => Ok(Command::Submit),
        "show" => Ok(Command::Show),
        "dump" => Ok(Command::Dump),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}
