//! Settings registry
//! Registry that holds setting descriptors and applies `name=value` assignments

use super::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};
use super::EditorSettings;
use crate::command::registry::{CommandDef, CommandRegistry, MatchResult};

/// Settings registry
///
/// Holds static setting descriptors and provides:
/// - Option name resolution (exact, alias, unique prefix)
/// - Value parsing by [`SettingType`]
/// - Setter dispatch
#[derive(Debug, Clone, Copy)]
pub struct SettingsRegistry {
    /// Static array of setting descriptors
    settings: &'static [SettingDescriptor<EditorSettings>],
}

impl SettingsRegistry {
    /// Create a new registry from static descriptors
    #[must_use]
    pub const fn new(descriptors: &'static [SettingDescriptor<EditorSettings>]) -> Self {
        SettingsRegistry {
            settings: descriptors,
        }
    }

    #[must_use]
    pub fn descriptors(&self) -> &'static [SettingDescriptor<EditorSettings>] {
        self.settings
    }

    /// Build `CommandRegistry` for option name matching
    #[must_use]
    pub fn build_option_registry(&self) -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        for desc in self.settings {
            let mut cmd_def = CommandDef::new(desc.name);
            for alias in desc.aliases {
                cmd_def = cmd_def.with_alias(*alias);
            }
            registry = registry.register(cmd_def);
        }
        registry
    }

    /// Parse string value to `SettingValue` using `SettingType`
    pub(crate) fn parse_value(ty: SettingType, value: &str) -> Result<SettingValue, SettingError> {
        match ty {
            SettingType::Boolean => match value.trim().to_lowercase().as_str() {
                "true" | "1" | "on" | "yes" => Ok(SettingValue::Bool(true)),
                "false" | "0" | "off" | "no" => Ok(SettingValue::Bool(false)),
                _ => Err(SettingError::ParseError(format!(
                    "Invalid boolean value: {value}"
                ))),
            },
            SettingType::Text => Ok(SettingValue::Text(value.to_string())),
        }
    }

    /// Find the descriptor an option name refers to
    pub fn resolve(&self, name: &str) -> Result<&'static SettingDescriptor<EditorSettings>, SettingError> {
        let matched = match self.build_option_registry().match_command(name) {
            MatchResult::Exact(n) | MatchResult::Prefix(n) => n,
            MatchResult::Ambiguous { prefix, matches } => {
                return Err(SettingError::UnknownOption(format!(
                    "{prefix} (ambiguous: matches {})",
                    matches.join(", ")
                )));
            }
            MatchResult::Unknown(_) => return Err(SettingError::UnknownOption(name.to_string())),
        };

        self.settings
            .iter()
            .find(|d| d.name == matched)
            .ok_or_else(|| SettingError::UnknownOption(name.to_string()))
    }

    /// Execute a setting by name with string value
    ///
    /// Flow:
    /// 1. Resolve option name (aliases, prefixes)
    /// 2. Parse string value using the descriptor's `SettingType`
    /// 3. Call setter function with typed value
    ///
    /// A boolean option given without a value is switched on.
    pub fn execute_setting(
        &self,
        name: &str,
        value: Option<&str>,
        settings: &mut EditorSettings,
    ) -> Result<(), SettingError> {
        let desc = self.resolve(name)?;

        let typed_value = match (desc.ty, value) {
            (_, Some(v)) => Self::parse_value(desc.ty, v)?,
            (SettingType::Boolean, None) => SettingValue::Bool(true),
            (SettingType::Text, None) => {
                return Err(SettingError::ParseError(format!(
                    "Missing value for {}",
                    desc.name
                )));
            }
        };

        log::debug!("setting {} = {:?}", desc.name, typed_value);
        (desc.set)(settings, typed_value)
    }

    /// Apply a `name=value` (or bare `name`) assignment
    pub fn apply_assignment(&self, assignment: &str, settings: &mut EditorSettings) -> Result<(), SettingError> {
        match assignment.split_once('=') {
            Some((name, value)) => self.execute_setting(name, Some(value), settings),
            None => self.execute_setting(assignment, None, settings),
        }
    }
}
