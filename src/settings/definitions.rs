//! Settings definitions
//! Declarative registry of all editor options

use super::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};
use super::registry::SettingsRegistry;
use super::EditorSettings;

fn set_word_separators(
    settings: &mut EditorSettings,
    value: SettingValue,
) -> Result<(), SettingError> {
    match value {
        SettingValue::Text(text) => {
            if text.chars().any(char::is_whitespace) {
                log::warn!("wordseparators contains whitespace; it will no longer be skipped");
            }
            settings.word_separators = text;
            Ok(())
        }
        SettingValue::Bool(_) => Err(SettingError::ValidationError("Expected text".to_string())),
    }
}

fn set_multi_cursor(settings: &mut EditorSettings, value: SettingValue) -> Result<(), SettingError> {
    match value {
        SettingValue::Bool(b) => {
            settings.multi_cursor = b;
            Ok(())
        }
        SettingValue::Text(_) => Err(SettingError::ValidationError(
            "Expected boolean".to_string(),
        )),
    }
}

static SETTINGS: &[SettingDescriptor<EditorSettings>] = &[
    SettingDescriptor {
        name: "wordseparators",
        aliases: &["wsep"],
        description: "Chars that always end a word",
        ty: SettingType::Text,
        set: set_word_separators,
    },
    SettingDescriptor {
        name: "multicursor",
        aliases: &["mc"],
        description: "Apply word motions to every selection, not just the primary",
        ty: SettingType::Boolean,
        set: set_multi_cursor,
    },
];

/// Create the settings registry
#[must_use]
pub fn create_settings_registry() -> SettingsRegistry {
    SettingsRegistry::new(SETTINGS)
}
