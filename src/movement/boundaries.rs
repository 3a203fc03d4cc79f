//! Word boundary scanning over a text source
//!
//! Both scans are total: every position yields a position, and repeating a
//! scan at the start or end of the document returns the same position.

use super::classify::{classify, CharClass};
use super::separators::WordSeparators;
use super::step::{
    step_column_clamped, step_column_clamped_back, step_offset_unclamped,
    step_offset_unclamped_back,
};
use crate::buffer::api::TextSource;
use crate::position::Position;

/// Find where a "next word end" motion lands
///
/// # Arguments
/// * `source` - The document to scan
/// * `start` - Caret position
/// * `separators` - Chars to treat as [`CharClass::Separator`]
///
/// # Returns
/// The first position after the class run that starts at `start` (after
/// skipping leading whitespace on the same line). At an end-of-line this is
/// the start of the next line; at end-of-document it is `start` itself.
/// Whitespace running into an end-of-line carries on over the following
/// blank lines to the first line with content.
///
/// # Examples
/// ```rust
/// use jaword::buffer::TextBuffer;
/// use jaword::movement::{next_word_end, WordSeparators};
/// use jaword::position::Position;
///
/// let doc = TextBuffer::from("かなカナ漢字");
/// let none = WordSeparators::none();
/// assert_eq!(next_word_end(&doc, Position::new(0, 0), &none), Position::new(0, 2));
/// assert_eq!(next_word_end(&doc, Position::new(0, 2), &none), Position::new(0, 4));
/// ```
pub fn next_word_end<S>(source: &S, start: Position, separators: &WordSeparators) -> Position
where
    S: TextSource + ?Sized,
{
    let mut pos = start;

    match classify(source, pos, separators) {
        CharClass::Invalid => {
            return if pos.line + 1 < source.line_count() {
                Position::new(pos.line + 1, 0)
            } else {
                pos
            };
        }
        CharClass::Whitespace => {
            // Column steps: the skip must halt at the end of this line.
            while classify(source, pos, separators) == CharClass::Whitespace {
                pos = step_column_clamped(source, pos);
            }
        }
        _ => {}
    }

    let init_class = classify(source, pos, separators);
    loop {
        let next = step_offset_unclamped(source, pos);
        if !next.is_after(&pos) || classify(source, pos, separators) != init_class {
            break;
        }
        pos = next;
    }

    log::trace!("next_word_end: {start} -> {pos} over {init_class} run");
    pos
}

/// Find where a "previous word start" motion lands
///
/// # Arguments
/// * `source` - The document to scan
/// * `start` - Caret position
/// * `separators` - Chars to treat as [`CharClass::Separator`]
///
/// # Returns
/// The first position of the class run that ends right before `start`
/// (after skipping trailing whitespace on the same line). From the start of
/// a line this is the previous line's end; at the start of the document it
/// is `start` itself.
///
/// # Examples
/// ```
/// use jaword::buffer::TextBuffer;
/// use jaword::movement::{prev_word_start, WordSeparators};
/// use jaword::position::Position;
///
/// let doc = TextBuffer::from("Foo  ばー");
/// let none = WordSeparators::none();
/// assert_eq!(prev_word_start(&doc, Position::new(0, 5), &none), Position::new(0, 0));
/// ```
pub fn prev_word_start<S>(source: &S, start: Position, separators: &WordSeparators) -> Position
where
    S: TextSource + ?Sized,
{
    let mut pos = start;

    // Column steps: the skip must halt at the start of this line.
    let mut skipped = false;
    while pos.column > 0
        && classify(source, step_column_clamped_back(pos), separators) == CharClass::Whitespace
    {
        pos = step_column_clamped_back(pos);
        skipped = true;
    }
    if skipped && pos.column == 0 {
        log::trace!("prev_word_start: whitespace ran into start of line {}", pos.line);
        return pos;
    }

    let stepped = step_offset_unclamped_back(source, pos);
    if !stepped.is_before(&pos) {
        return pos;
    }
    pos = stepped;

    let init_class = classify(source, pos, separators);
    if init_class == CharClass::Invalid {
        // Only a line break was stepped over; line ends never chain.
        log::trace!("prev_word_start: {start} -> {pos} over a line break");
        return pos;
    }

    loop {
        let prev = step_offset_unclamped_back(source, pos);
        if !prev.is_before(&pos) || classify(source, prev, separators) != init_class {
            break;
        }
        pos = prev;
    }

    log::trace!("prev_word_start: {start} -> {pos} over {init_class} run");
    pos
}
