//! Editor adapter
//! Applies word motions and word deletions to a buffer and its selections

use crate::buffer::api::TextSource;
use crate::buffer::TextBuffer;
use crate::command::{self, Command};
use crate::constants::errors;
use crate::error::{ErrorType, JawordError};
use crate::movement::{next_word_end, prev_word_start, WordSeparators};
use crate::position::Position;
use crate::selection::Selection;
use crate::settings::{create_settings_registry, EditorSettings, SettingsRegistry};
use std::collections::HashSet;

/// Which way a word motion or deletion scans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn scan(self, buffer: &TextBuffer, pos: Position, separators: &WordSeparators) -> Position {
        match self {
            Direction::Forward => next_word_end(buffer, pos, separators),
            Direction::Backward => prev_word_start(buffer, pos, separators),
        }
    }
}

/// A document with one or more selections
///
/// The first selection is the primary one. There is always at least one.
#[derive(Debug, Clone)]
pub struct Editor {
    buffer: TextBuffer,
    selections: Vec<Selection>,
    settings: EditorSettings,
    settings_registry: SettingsRegistry,
}

impl Editor {
    /// Create an editor with a single cursor at the document start
    #[must_use]
    pub fn new(buffer: TextBuffer) -> Self {
        Self::with_settings(buffer, EditorSettings::default())
    }

    #[must_use]
    pub fn with_settings(buffer: TextBuffer, settings: EditorSettings) -> Self {
        Editor {
            buffer,
            selections: vec![Selection::cursor(Position::origin())],
            settings,
            settings_registry: create_settings_registry(),
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    #[must_use]
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    #[must_use]
    pub fn primary(&self) -> Selection {
        self.selections[0]
    }

    #[must_use]
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Apply a `name=value` option assignment
    pub fn set_option(&mut self, assignment: &str) -> Result<(), JawordError> {
        self.settings_registry
            .apply_assignment(assignment, &mut self.settings)
            .map_err(JawordError::from)
    }

    /// Replace all selections. The first one becomes primary.
    pub fn set_selections(&mut self, selections: Vec<Selection>) -> Result<(), JawordError> {
        if selections.is_empty() {
            return Err(JawordError::new(
                ErrorType::Execution,
                errors::NO_SELECTION,
                "At least one selection is required",
            ));
        }
        for sel in &selections {
            self.check_position(sel.anchor)?;
            self.check_position(sel.active)?;
        }
        self.selections = dedup(selections);
        Ok(())
    }

    /// Collapse to a single cursor at `pos`
    pub fn set_cursor(&mut self, pos: Position) -> Result<(), JawordError> {
        self.set_selections(vec![Selection::cursor(pos)])
    }

    /// Add a secondary cursor at `pos`
    pub fn add_cursor(&mut self, pos: Position) -> Result<(), JawordError> {
        self.check_position(pos)?;
        let mut selections = self.selections.clone();
        selections.push(Selection::cursor(pos));
        self.selections = dedup(selections);
        Ok(())
    }

    /// Collapse every selection onto the next word end
    pub fn cursor_next_word_end(&mut self) {
        self.apply_motion(Direction::Forward, false);
    }

    /// Move the active end of every selection to the next word end
    pub fn cursor_next_word_end_select(&mut self) {
        self.apply_motion(Direction::Forward, true);
    }

    /// Collapse every selection onto the previous word start
    pub fn cursor_prev_word_start(&mut self) {
        self.apply_motion(Direction::Backward, false);
    }

    /// Move the active end of every selection to the previous word start
    pub fn cursor_prev_word_start_select(&mut self) {
        self.apply_motion(Direction::Backward, true);
    }

    /// Delete from each cursor to the next word end, or the selected text
    pub fn delete_word_right(&mut self) -> Result<(), JawordError> {
        self.apply_deletion(Direction::Forward)
    }

    /// Delete from each cursor back to the previous word start, or the selected text
    pub fn delete_word_left(&mut self) -> Result<(), JawordError> {
        self.apply_deletion(Direction::Backward)
    }

    /// Run a command
    pub fn execute(&mut self, cmd: Command) -> Result<(), JawordError> {
        log::debug!("execute {cmd} on {} selections", self.targets().len());
        match cmd {
            Command::CursorNextWordEnd => self.cursor_next_word_end(),
            Command::CursorNextWordEndSelect => self.cursor_next_word_end_select(),
            Command::CursorPrevWordStart => self.cursor_prev_word_start(),
            Command::CursorPrevWordStartSelect => self.cursor_prev_word_start_select(),
            Command::DeleteWordRight => return self.delete_word_right(),
            Command::DeleteWordLeft => return self.delete_word_left(),
        }
        Ok(())
    }

    /// Resolve a command id, alias or prefix and run it
    pub fn execute_named(&mut self, name: &str) -> Result<Command, JawordError> {
        let cmd = command::resolve(name)?;
        self.execute(cmd)?;
        Ok(cmd)
    }

    /// Selections a command acts on
    fn targets(&self) -> Vec<Selection> {
        if self.settings.multi_cursor {
            self.selections.clone()
        } else {
            vec![self.primary()]
        }
    }

    fn apply_motion(&mut self, direction: Direction, extend: bool) {
        let separators = self.settings.separators();
        let moved = self
            .targets()
            .into_iter()
            .map(|sel| {
                let target = direction.scan(&self.buffer, sel.active, &separators);
                if extend {
                    sel.extend_to(target)
                } else {
                    Selection::cursor(target)
                }
            })
            .collect();
        self.selections = dedup(moved);
    }

    fn apply_deletion(&mut self, direction: Direction) -> Result<(), JawordError> {
        let separators = self.settings.separators();
        let spans: Vec<(Position, Position)> = self
            .targets()
            .into_iter()
            .map(|sel| {
                if !sel.is_empty() {
                    return sel.range();
                }
                let cursor = sel.active;
                let target = direction.scan(&self.buffer, cursor, &separators);
                match direction {
                    Direction::Forward => (cursor, target),
                    Direction::Backward => (target, cursor),
                }
            })
            .collect();

        log::debug!("word deletion over {} spans", spans.len());
        let starts = self.buffer.delete_ranges(&spans)?;
        self.selections = dedup(starts.into_iter().map(Selection::cursor).collect());
        Ok(())
    }

    fn check_position(&self, pos: Position) -> Result<(), JawordError> {
        if self.buffer.is_valid(pos) {
            Ok(())
        } else {
            Err(JawordError::new(
                ErrorType::Execution,
                errors::INVALID_POSITION,
                format!(
                    "Position {pos} out of bounds (lines: {})",
                    self.buffer.line_count()
                ),
            ))
        }
    }
}

/// Drop repeated selections, keeping the first occurrence
fn dedup(mut selections: Vec<Selection>) -> Vec<Selection> {
    let mut seen = HashSet::new();
    selections.retain(|sel| seen.insert(*sel));
    selections
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
