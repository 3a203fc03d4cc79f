//! Word separator sets
//!
//! The host editor's "word separators" string, turned into a lookup set.
//! A fresh set is passed into every classification call; nothing here is
//! global.

use std::collections::BTreeSet;

/// Chars that always classify as [`CharClass::Separator`](super::CharClass::Separator)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSeparators {
    chars: BTreeSet<char>,
}

impl WordSeparators {
    /// Empty set: every char keeps its code point class
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Build from a configuration string, one separator per char
    #[must_use]
    pub fn new(separators: &str) -> Self {
        Self {
            chars: separators.chars().collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl From<&str> for WordSeparators {
    fn from(separators: &str) -> Self {
        Self::new(separators)
    }
}

impl FromIterator<char> for WordSeparators {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}
