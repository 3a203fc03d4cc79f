//! Character classification for word movement
//!
//! A word boundary is any place where the class changes, so Hiragana,
//! Katakana and ideographs written back to back each form a word of their own.

use super::separators::WordSeparators;
use crate::buffer::api::TextSource;
use crate::position::Position;

/// Character categories for word movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII and fullwidth letters/digits, underscores, Latin-1 letters
    Alnum,
    /// Tab, line feed, vertical tab, form feed, carriage return, space, U+3000
    Whitespace,
    /// ASCII punctuation, CJK symbols, fullwidth punctuation
    Punctuation,
    Hiragana,
    /// Fullwidth and halfwidth Katakana
    Katakana,
    /// Everything else, ideographs included
    Other,
    /// Configured word separator
    Separator,
    /// No char here (end of line or end of document)
    Invalid,
}

impl CharClass {
    /// Lowercase display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alnum => "alnum",
            Self::Whitespace => "whitespace",
            Self::Punctuation => "punctuation",
            Self::Hiragana => "hiragana",
            Self::Katakana => "katakana",
            Self::Other => "other",
            Self::Separator => "separator",
            Self::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a char. Separators take precedence over every code point range.
#[must_use]
pub fn classify_char(ch: char, separators: &WordSeparators) -> CharClass {
    if separators.contains(ch) {
        return CharClass::Separator;
    }

    match ch {
        '\u{09}'..='\u{0D}' | ' ' | '\u{3000}' => CharClass::Whitespace,

        '0'..='9'
        | '\u{FF10}'..='\u{FF19}' // fullwidth digit
        | 'A'..='Z'
        | '_'
        | 'a'..='z'
        | '\u{C0}'..='\u{D6}' // Latin-1 letters, minus U+00D7 and U+00F7
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{FF}'
        | '\u{FF21}'..='\u{FF3A}' // fullwidth upper case
        | '\u{FF3F}' // fullwidth underscore
        | '\u{FF41}'..='\u{FF5A}' => CharClass::Alnum,

        '\u{21}'..='\u{2F}'
        | '\u{3A}'..='\u{40}'
        | '\u{5B}'..='\u{60}'
        | '\u{7B}'..='\u{7F}'
        | '\u{3001}'..='\u{3004}' // CJK symbols, minus the iteration mark U+3005
        | '\u{3006}'..='\u{303F}'
        | '\u{30FB}' // katakana middle dot
        | '\u{FF01}'..='\u{FF0F}'
        | '\u{FF1A}'..='\u{FF20}'
        | '\u{FF3B}'..='\u{FF40}'
        | '\u{FF5B}'..='\u{FF65}'
        | '\u{FFE0}'..='\u{FFEE}' => CharClass::Punctuation,

        '\u{30A0}'..='\u{30FF}' | '\u{FF66}'..='\u{FF9D}' => CharClass::Katakana,

        '\u{3041}'..='\u{309F}' => CharClass::Hiragana,

        _ => CharClass::Other,
    }
}

/// Classify the char at `pos` in `source`, or [`CharClass::Invalid`] if there
/// is none.
#[must_use]
pub fn classify<S>(source: &S, pos: Position, separators: &WordSeparators) -> CharClass
where
    S: TextSource + ?Sized,
{
    source
        .unit_at(pos)
        .map_or(CharClass::Invalid, |ch| classify_char(ch, separators))
}

/// A maximal span of same-class chars on one line, as columns `start..end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassRun {
    pub start: usize,
    pub end: usize,
    pub class: CharClass,
}

/// Split `line` into class runs. A blank or missing line has none.
#[must_use]
pub fn class_runs<S>(source: &S, line: usize, separators: &WordSeparators) -> Vec<ClassRun>
where
    S: TextSource + ?Sized,
{
    let mut runs: Vec<ClassRun> = Vec::new();
    if line >= source.line_count() {
        return runs;
    }
    for column in 0..source.line_length(line) {
        let class = classify(source, Position::new(line, column), separators);
        match runs.last_mut() {
            Some(run) if run.class == class => run.end = column + 1,
            _ => runs.push(ClassRun {
                start: column,
                end: column + 1,
                class,
            }),
        }
    }
    runs
}
