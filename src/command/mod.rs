//! Word motion commands
//! Stable command ids and name resolution for hosts that dispatch by string

pub mod registry;

use crate::constants::{commands as ids, errors};
use crate::error::{ErrorType, JawordError};
use registry::{CommandDef, CommandRegistry, MatchResult};
use std::fmt;

/// Commands the editor adapter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Collapse every selection onto the next word end
    CursorNextWordEnd,
    /// Extend every selection to the next word end
    CursorNextWordEndSelect,
    /// Collapse every selection onto the previous word start
    CursorPrevWordStart,
    /// Extend every selection to the previous word start
    CursorPrevWordStartSelect,
    /// Delete up to the next word end (or the selected text)
    DeleteWordRight,
    /// Delete back to the previous word start (or the selected text)
    DeleteWordLeft,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::CursorNextWordEnd,
        Command::CursorNextWordEndSelect,
        Command::CursorPrevWordStart,
        Command::CursorPrevWordStartSelect,
        Command::DeleteWordRight,
        Command::DeleteWordLeft,
    ];

    /// Host-facing command id
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Command::CursorNextWordEnd => ids::CURSOR_NEXT_WORD_END,
            Command::CursorNextWordEndSelect => ids::CURSOR_NEXT_WORD_END_SELECT,
            Command::CursorPrevWordStart => ids::CURSOR_PREV_WORD_START,
            Command::CursorPrevWordStartSelect => ids::CURSOR_PREV_WORD_START_SELECT,
            Command::DeleteWordRight => ids::DELETE_WORD_RIGHT,
            Command::DeleteWordLeft => ids::DELETE_WORD_LEFT,
        }
    }

    const fn alias(self) -> &'static str {
        match self {
            Command::CursorNextWordEnd => "wordend",
            Command::CursorNextWordEndSelect => "selectwordend",
            Command::CursorPrevWordStart => "wordstart",
            Command::CursorPrevWordStartSelect => "selectwordstart",
            Command::DeleteWordRight => "killword",
            Command::DeleteWordLeft => "backkillword",
        }
    }

    /// Look up a command by its exact id
    #[must_use]
    pub fn from_id(id: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|cmd| cmd.id() == id)
    }

    /// Whether the command edits the buffer
    #[must_use]
    pub const fn is_edit(self) -> bool {
        matches!(self, Command::DeleteWordRight | Command::DeleteWordLeft)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Registry of every [`Command`] id with its short alias
#[must_use]
pub fn create_command_registry() -> CommandRegistry {
    Command::ALL
        .into_iter()
        .fold(CommandRegistry::new(), |registry, cmd| {
            registry.register(CommandDef::new(cmd.id()).with_alias(cmd.alias()))
        })
}

/// Resolve user input (id, alias, or unique prefix) to a command
pub fn resolve(input: &str) -> Result<Command, JawordError> {
    let name = match create_command_registry().match_command(input) {
        MatchResult::Exact(name) | MatchResult::Prefix(name) => name,
        MatchResult::Ambiguous { prefix, matches } => {
            return Err(JawordError::new(
                ErrorType::Parse,
                errors::AMBIGUOUS_COMMAND,
                format!("Ambiguous command '{prefix}': matches {}", matches.join(", ")),
            ));
        }
        MatchResult::Unknown(name) => {
            return Err(JawordError::new(
                ErrorType::Parse,
                errors::UNKNOWN_COMMAND,
                format!("Unknown command: {name}"),
            ));
        }
    };
    Command::from_id(&name).ok_or_else(|| {
        JawordError::critical(
            ErrorType::Internal,
            errors::UNKNOWN_COMMAND,
            format!("Registered command has no handler: {name}"),
        )
    })
}
