//! Single-unit stepping over a text source
//!
//! Two kinds of step exist and the scanners rely on the difference:
//!
//! - **Column steps** stay on the current line. They are used while skipping
//!   whitespace so that the skip halts at the end (or start) of a line.
//! - **Offset steps** go through the linear offset and can move from one
//!   line's end to the next line's start, or back.

use crate::buffer::api::TextSource;
use crate::position::Position;

/// One column to the right on the same line. Never leaves the line, never
/// goes past its end.
#[must_use]
pub fn step_column_clamped<S>(source: &S, pos: Position) -> Position
where
    S: TextSource + ?Sized,
{
    let len = source.line_length(pos.line);
    pos.with_column((pos.column + 1).min(len))
}

/// One column to the left on the same line, stopping at column 0.
#[must_use]
pub fn step_column_clamped_back(pos: Position) -> Position {
    pos.with_column(pos.column.saturating_sub(1))
}

/// One unit forward by offset. At end-of-line this lands on the next line's
/// start. At end-of-document it returns `pos` unchanged.
#[must_use]
pub fn step_offset_unclamped<S>(source: &S, pos: Position) -> Position
where
    S: TextSource + ?Sized,
{
    let end = source.offset_of(source.end_position());
    let mut offset = source.offset_of(pos);
    // A multi-char line break maps several offsets onto the same position.
    while offset < end {
        offset += 1;
        let next = source.position_at(offset);
        if next != pos {
            return next;
        }
    }
    pos
}

/// One unit backward by offset. At column 0 this lands on the previous
/// line's end. At the start of the document it returns `pos` unchanged.
#[must_use]
pub fn step_offset_unclamped_back<S>(source: &S, pos: Position) -> Position
where
    S: TextSource + ?Sized,
{
    match source.offset_of(pos).checked_sub(1) {
        Some(offset) => source.position_at(offset),
        None => pos,
    }
}
