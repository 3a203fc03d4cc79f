//! Line/column coordinates into a text source

use std::fmt;

/// A zero-based (line, column) coordinate. Columns count chars, not bytes.
///
/// Positions are plain values. Whether one is valid depends on the
/// [`TextSource`](crate::buffer::api::TextSource) it is used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Start of the document
    #[must_use]
    pub const fn origin() -> Self {
        Self { line: 0, column: 0 }
    }

    /// Same line, column replaced
    #[must_use]
    pub const fn with_column(self, column: usize) -> Self {
        Self {
            line: self.line,
            column,
        }
    }

    /// Strictly after `other` in document order
    #[must_use]
    pub fn is_after(&self, other: &Position) -> bool {
        self > other
    }

    /// Strictly before `other` in document order
    #[must_use]
    pub fn is_before(&self, other: &Position) -> bool {
        self < other
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl From<(usize, usize)> for Position {
    fn from((line, column): (usize, usize)) -> Self {
        Self { line, column }
    }
}
