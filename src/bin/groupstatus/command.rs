//! Console command parsing and rendering.

use groupstatus::partition::{
    domain::{GroupField, GroupSequence, ParseGroupFieldError, ResultSet},
    error::PartitionError,
};
use thiserror::Error;

/// Help text listing every console command.
pub const HELP: &str = "\
commands:
  list                      show the groups
  add [FROM [TO]]           append a group once the groups are valid
  delete N                  delete group N
  set N from|to [VALUE]     set a group end; blank or non-numeric clears it
  show                      validate and load task status
  results                   show the last loaded status
  status                    report whether status is loading
  help                      show this help
  quit                      leave";

/// A parsed console command. Group numbers are converted to 0-based
/// indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add { from: String, to: String },
    Delete { index: usize },
    Set { index: usize, field: GroupField, raw: String },
    Show,
    Results,
    Status,
    Help,
    Quit,
}

/// Errors for unparseable console input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("'{0}' is not a group number")]
    InvalidGroupNumber(String),

    #[error(transparent)]
    Field(#[from] ParseGroupFieldError),
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let mut rest = || words.next().unwrap_or_default().to_owned();

        let command = match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => Self::List,
            "add" => {
                let from = rest();
                let to = rest();
                Self::Add { from, to }
            }
            "delete" | "del" | "rm" => Self::Delete {
                index: group_index(&rest())?,
            },
            "set" => {
                let index = group_index(&rest())?;
                let field_name = rest();
                if field_name.is_empty() {
                    return Err(CommandError::MissingArgument("field name"));
                }
                Self::Set {
                    index,
                    field: field_name.parse()?,
                    raw: rest(),
                }
            }
            "show" => Self::Show,
            "results" => Self::Results,
            "status" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_owned())),
        };
        Ok(Some(command))
    }
}

fn group_index(raw: &str) -> Result<usize, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::MissingArgument("group number"));
    }
    raw.parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .ok_or_else(|| CommandError::InvalidGroupNumber(raw.to_owned()))
}

/// Renders the groups as `Group N: FROM -> TO` lines.
pub fn render_groups(groups: &GroupSequence) -> Vec<String> {
    groups
        .iter()
        .enumerate()
        .map(|(index, range)| format!("Group {}: {range}", index + 1))
        .collect()
}

/// Renders each group result as `Group N: STATUS; STATUS; ...`.
pub fn render_results(results: &ResultSet) -> Vec<String> {
    results
        .groups()
        .iter()
        .enumerate()
        .map(|(index, group)| format!("Group {}: {group}", index + 1))
        .collect()
}

/// Renders a validation error, naming the offending group when there is one.
pub fn render_partition_error(err: &PartitionError) -> String {
    match err.group() {
        Some(group) => format!("Group {group}: {err}"),
        None => err.to_string(),
    }
}
