use super::*;
use crate::command::registry::MatchResult;
use crate::constants::errors;
use crate::error::JawordError;

#[test]
fn test_defaults() {
    let settings = EditorSettings::default();
    assert_eq!(settings.word_separators, DEFAULT_WORD_SEPARATORS);
    assert!(settings.multi_cursor);
    assert!(settings.separators().contains('('));
    assert!(!settings.separators().contains('_'));
}

#[test]
fn test_parse_boolean_values() {
    for input in ["true", "1", "on", "YES"] {
        assert_eq!(
            SettingsRegistry::parse_value(SettingType::Boolean, input),
            Ok(SettingValue::Bool(true))
        );
    }
    for input in ["false", "0", "Off", "no"] {
        assert_eq!(
            SettingsRegistry::parse_value(SettingType::Boolean, input),
            Ok(SettingValue::Bool(false))
        );
    }
    assert!(matches!(
        SettingsRegistry::parse_value(SettingType::Boolean, "maybe"),
        Err(SettingError::ParseError(_))
    ));
}

#[test]
fn test_parse_text_keeps_whitespace() {
    assert_eq!(
        SettingsRegistry::parse_value(SettingType::Text, " ,. "),
        Ok(SettingValue::Text(" ,. ".to_string()))
    );
}

#[test]
fn test_option_registry_aliases_and_prefixes() {
    let registry = create_settings_registry().build_option_registry();
    assert_eq!(
        registry.match_command("wsep"),
        MatchResult::Exact("wordseparators".to_string())
    );
    assert_eq!(
        registry.match_command("mc"),
        MatchResult::Exact("multicursor".to_string())
    );
    assert_eq!(
        registry.match_command("multi"),
        MatchResult::Prefix("multicursor".to_string())
    );
}

#[test]
fn test_execute_setting() {
    let registry = create_settings_registry();
    let mut settings = EditorSettings::default();

    registry
        .execute_setting("multicursor", Some("off"), &mut settings)
        .unwrap();
    assert!(!settings.multi_cursor);

    registry.execute_setting("mc", None, &mut settings).unwrap();
    assert!(settings.multi_cursor);

    registry
        .execute_setting("wordseparators", Some(",."), &mut settings)
        .unwrap();
    assert_eq!(settings.word_separators, ",.");
    assert!(!settings.separators().contains('('));
}

#[test]
fn test_text_setting_requires_value() {
    let registry = create_settings_registry();
    let mut settings = EditorSettings::default();
    let result = registry.execute_setting("wsep", None, &mut settings);
    assert!(matches!(result, Err(SettingError::ParseError(_))));
    assert_eq!(settings, EditorSettings::default());
}

#[test]
fn test_apply_assignment() {
    let registry = create_settings_registry();
    let mut settings = EditorSettings::default();

    registry.apply_assignment("mc=false", &mut settings).unwrap();
    assert!(!settings.multi_cursor);

    // Only the first '=' splits; the rest belongs to the value
    registry.apply_assignment("wsep==+", &mut settings).unwrap();
    assert_eq!(settings.word_separators, "=+");

    registry.apply_assignment("wsep=", &mut settings).unwrap();
    assert!(settings.separators().is_empty());
}

#[test]
fn test_unknown_option() {
    let registry = create_settings_registry();
    let mut settings = EditorSettings::default();
    let err = registry
        .apply_assignment("tabstop=4", &mut settings)
        .unwrap_err();
    assert_eq!(err, SettingError::UnknownOption("tabstop".to_string()));
    assert_eq!(err.to_string(), "Unknown option: tabstop");
}

#[test]
fn test_setting_error_into_crate_error() {
    let err: JawordError = SettingError::UnknownOption("x".to_string()).into();
    assert_eq!(err.code, errors::UNKNOWN_SETTING);

    let err: JawordError = SettingError::ParseError("bad".to_string()).into();
    assert_eq!(err.code, errors::SETTING_PARSE_ERROR);

    let err: JawordError = SettingError::ValidationError("bad".to_string()).into();
    assert_eq!(err.code, errors::SETTING_VALIDATION_ERROR);
}

#[test]
fn test_descriptor_listing() {
    let names: Vec<&str> = create_settings_registry()
        .descriptors()
        .iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["wordseparators", "multicursor"]);
}
