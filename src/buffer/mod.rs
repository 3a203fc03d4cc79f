//! Text buffer backed by a char vector and a line index
//!
//! `TextBuffer` is the document the editor adapter, the command line tool and
//! the tests run scans against. It implements [`TextSource`] and supports the
//! edits word deletion needs.

use crate::buffer::api::TextSource;
use crate::constants::errors;
use crate::error::{ErrorType, JawordError};
use crate::position::Position;
use std::fmt::{self, Display};

pub mod api;
pub mod line_index;
use line_index::LineIndex;

/// Line-structured text buffer.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    chars: Vec<char>,
    /// Line index over `chars`
    pub line_index: LineIndex,
    /// Monotonic revision counter, incremented once per edit
    pub revision: u64,
}

impl TextBuffer {
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total length in chars, line breaks included
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Char at a linear offset
    #[must_use]
    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }

    /// Contents of `line` without its line break
    #[must_use]
    pub fn line_text(&self, line: usize) -> String {
        let Some(start) = self.line_index.get_start(line) else {
            return String::new();
        };
        self.chars[start..start + self.line_length(line)]
            .iter()
            .collect()
    }

    /// Insert `text` at `pos`. Returns the position right after the insertion.
    pub fn insert_str(&mut self, pos: Position, text: &str) -> Result<Position, JawordError> {
        let offset = self.checked_offset(pos)?;
        let inserted: Vec<char> = text.chars().collect();
        self.line_index.insert(offset, &inserted);
        self.chars.splice(offset..offset, inserted.iter().copied());
        self.revision += 1;
        Ok(self.position_at(offset + inserted.len()))
    }

    /// Delete the text between two positions as a single edit.
    /// Returns the removed text.
    pub fn delete_range(&mut self, start: Position, end: Position) -> Result<String, JawordError> {
        let (from, to) = self.checked_range(start, end)?;
        let removed: String = self.chars.drain(from..to).collect();
        self.line_index.delete(from, to - from);
        self.revision += 1;
        log::debug!("deleted {start}..{end} ({} chars)", to - from);
        Ok(removed)
    }

    /// Delete several ranges as one edit (one revision increment).
    ///
    /// Ranges may come in any order. Overlapping or touching ranges are
    /// merged first. Returns, for each merged range in document order, the
    /// position its start occupies after the edit.
    pub fn delete_ranges(
        &mut self,
        ranges: &[(Position, Position)],
    ) -> Result<Vec<Position>, JawordError> {
        let mut spans = ranges
            .iter()
            .map(|&(start, end)| self.checked_range(start, end))
            .collect::<Result<Vec<_>, _>>()?;
        spans.sort_unstable();

        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
        for (from, to) in spans {
            match merged.last_mut() {
                Some(last) if from <= last.1 => last.1 = last.1.max(to),
                _ => merged.push((from, to)),
            }
        }

        let removed: usize = merged.iter().map(|&(from, to)| to - from).sum();
        for &(from, to) in merged.iter().rev() {
            if to > from {
                self.chars.drain(from..to);
                self.line_index.delete(from, to - from);
            }
        }
        if removed > 0 {
            self.revision += 1;
            log::debug!("deleted {removed} chars in {} ranges", merged.len());
        }

        let mut shift = 0;
        let starts = merged
            .iter()
            .map(|&(from, to)| {
                let start = self.position_at(from - shift);
                shift += to - from;
                start
            })
            .collect();
        Ok(starts)
    }

    /// Whether `pos` addresses a real place in the document
    #[must_use]
    pub fn is_valid(&self, pos: Position) -> bool {
        pos.line < self.line_count() && pos.column <= self.line_length(pos.line)
    }

    fn checked_offset(&self, pos: Position) -> Result<usize, JawordError> {
        if self.is_valid(pos) {
            Ok(self.offset_of(pos))
        } else {
            Err(JawordError::new(
                ErrorType::Execution,
                errors::INVALID_POSITION,
                format!(
                    "Position {pos} out of bounds (lines: {})",
                    self.line_count()
                ),
            ))
        }
    }

    fn checked_range(&self, start: Position, end: Position) -> Result<(usize, usize), JawordError> {
        let from = self.checked_offset(start)?;
        let to = self.checked_offset(end)?;
        if from > to {
            return Err(JawordError::new(
                ErrorType::Execution,
                errors::INVALID_RANGE,
                format!("Range start {start} is after its end {end}"),
            ));
        }
        Ok((from, to))
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let line_index = LineIndex::from_chars(&chars);
        Self {
            chars,
            line_index,
            revision: 0,
        }
    }
}

impl Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|ch| write!(f, "{ch}"))
    }
}

impl TextSource for TextBuffer {
    fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    fn line_length(&self, line: usize) -> usize {
        let Some(start) = self.line_index.get_start(line) else {
            return 0;
        };
        let end = match self.line_index.get_newline(line) {
            Some(newline) if newline > start && self.chars[newline - 1] == '\r' => newline - 1,
            Some(newline) => newline,
            None => self.chars.len(),
        };
        end - start
    }

    fn unit_at(&self, pos: Position) -> Option<char> {
        if pos.column >= self.line_length(pos.line) {
            return None;
        }
        let start = self.line_index.get_start(pos.line)?;
        self.char_at(start + pos.column)
    }

    fn offset_of(&self, pos: Position) -> usize {
        let line = pos.line.min(self.line_count() - 1);
        let start = self.line_index.get_start(line).unwrap_or(0);
        let column = if line == pos.line {
            pos.column.min(self.line_length(line))
        } else {
            self.line_length(line)
        };
        start + column
    }

    fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.chars.len());
        let line = self.line_index.get_line_at(offset);
        let start = self.line_index.get_start(line).unwrap_or(0);
        Position::new(line, (offset - start).min(self.line_length(line)))
    }
}
