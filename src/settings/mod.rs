//! Settings registry
//! Configuration-driven registry for editor options

pub mod definitions;
pub mod descriptor;
pub mod registry;

#[cfg(test)]
#[path = "tests.rs"]
mod tests;

pub use definitions::create_settings_registry;
pub use descriptor::{SettingDescriptor, SettingError, SettingSetter, SettingType, SettingValue};
pub use registry::SettingsRegistry;

use crate::constants::separators::DEFAULT_WORD_SEPARATORS;
use crate::movement::WordSeparators;

/// Options the editor adapter reads on every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSettings {
    /// Host "word separators" string
    pub word_separators: String,
    /// Move every selection (true) or only the primary one (false)
    pub multi_cursor: bool,
}

impl EditorSettings {
    #[must_use]
    pub fn new() -> Self {
        EditorSettings {
            word_separators: DEFAULT_WORD_SEPARATORS.to_string(),
            multi_cursor: true,
        }
    }

    /// Fresh separator set for one command
    #[must_use]
    pub fn separators(&self) -> WordSeparators {
        WordSeparators::new(&self.word_separators)
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self::new()
    }
}
