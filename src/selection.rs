//! Cursor selections
//!
//! A selection has a fixed `anchor` and a moving `active` end. A collapsed
//! selection (both ends equal) is a plain cursor.

use crate::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
}

impl Selection {
    #[must_use]
    pub const fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// Zero-width selection at `pos`
    #[must_use]
    pub const fn cursor(pos: Position) -> Self {
        Self {
            anchor: pos,
            active: pos,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Both ends in document order
    #[must_use]
    pub fn range(&self) -> (Position, Position) {
        if self.anchor <= self.active {
            (self.anchor, self.active)
        } else {
            (self.active, self.anchor)
        }
    }

    /// Keep the anchor, move the active end
    #[must_use]
    pub fn extend_to(self, active: Position) -> Self {
        Self {
            anchor: self.anchor,
            active,
        }
    }
}
