//! jaword – Text source abstraction layer
//!
//! This module defines the read-only capability the word scanners need from a
//! document, decoupling them from any storage representation. The crate's own
//! [`TextBuffer`](crate::buffer::TextBuffer) implements it, and so can any
//! host document.
//!
//! ## Indexing model
//!
//! Columns and offsets are **code-point based** (Unicode scalar values).
//! This is not grapheme clusters; combining marks and emoji sequences count
//! as multiple units.
//!
//! ## Line breaks
//!
//! An end-of-line sequence belongs to no line: [`TextSource::unit_at`]
//! returns `None` at `column >= line_length(line)`. Offsets, on the other
//! hand, count EOL chars, so stepping by offset is how a scan crosses from
//! one line to the next.
//!
//! ## Snapshot contract
//!
//! A scan reads the source many times and assumes it does not change while
//! the call runs. Implementations do not need interior locking.

use crate::position::Position;

/// Read-only, line-structured view of a document.
pub trait TextSource {
    /// Number of lines. An empty document has exactly one (empty) line.
    fn line_count(&self) -> usize;

    /// Length of `line` in chars, excluding its line break.
    /// Lines past the end have length 0.
    fn line_length(&self, line: usize) -> usize;

    /// The char at `pos`, or `None` at/after end-of-line or end-of-document.
    fn unit_at(&self, pos: Position) -> Option<char>;

    /// Linear offset of `pos`, counting EOL chars.
    ///
    /// The line is clamped to the last line and the column to the line
    /// length.
    fn offset_of(&self, pos: Position) -> usize;

    /// Position of a linear offset.
    ///
    /// Offsets past the end map to end-of-document. An offset inside a
    /// multi-char line break maps to the end of that line.
    fn position_at(&self, offset: usize) -> Position;

    /// Position just past the last char of the document.
    fn end_position(&self) -> Position {
        let last = self.line_count().saturating_sub(1);
        Position::new(last, self.line_length(last))
    }
}
