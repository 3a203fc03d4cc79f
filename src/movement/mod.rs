//! Word movement semantics
//!
//! This module decides where word-wise motions and deletions land in text
//! that mixes Latin script, Hiragana, Katakana and ideographs.
//!
//! ## Design
//!
//! Movement is based on character classes (see [`CharClass`]):
//! - **Alnum**: ASCII/fullwidth letters and digits, underscores, Latin-1 letters
//! - **Whitespace**: tab, CR, LF, VT, FF, space, ideographic space
//! - **Punctuation**: ASCII, CJK and fullwidth punctuation
//! - **Hiragana** / **Katakana**: each script on its own
//! - **Other**: ideographs and everything not listed above
//! - **Separator**: chars the host configured as word separators
//!
//! This means:
//! - `aB_` is ONE word
//! - `あいアイ相愛` is THREE words: `あい`, `アイ`, `相愛`
//! - with `.` configured as a separator, `foo.bar` is THREE words
//!
//! ## Modules
//!
//! - [`classify`] - Character classification
//! - [`separators`] - Per-call word separator sets
//! - [`step`] - Line-bound and line-crossing single steps
//! - [`boundaries`] - Next word end / previous word start scans

pub mod boundaries;
pub mod classify;
pub mod separators;
pub mod step;

pub use boundaries::{next_word_end, prev_word_start};
pub use classify::{class_runs, classify, classify_char, CharClass, ClassRun};
pub use separators::WordSeparators;
