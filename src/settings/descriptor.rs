//! Setting descriptor types
//! Type definitions for declarative setting configuration

use crate::constants::errors;
use crate::error::{ErrorSeverity, ErrorType, JawordError};

/// Typed value after parsing and validation
/// Setters receive this, never raw strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// Boolean value
    Bool(bool),
    /// Free-form text, taken verbatim
    Text(String),
}

/// Setting type definition for parsing and validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingType {
    /// Boolean setting (true/false, on/off, yes/no, 1/0)
    Boolean,
    /// Text setting; surrounding whitespace is significant
    Text,
}

/// Structured error for setting operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingError {
    /// Failed to parse string value
    ParseError(String),
    /// Value failed validation
    ValidationError(String),
    /// Unknown option name
    UnknownOption(String),
}

impl std::fmt::Display for SettingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            SettingError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            SettingError::UnknownOption(name) => write!(f, "Unknown option: {name}"),
        }
    }
}

impl From<SettingError> for JawordError {
    fn from(err: SettingError) -> Self {
        match err {
            SettingError::ParseError(msg) => JawordError {
                severity: ErrorSeverity::Error,
                kind: ErrorType::Parse,
                code: errors::SETTING_PARSE_ERROR.to_string(),
                message: msg,
            },
            SettingError::ValidationError(msg) => JawordError {
                severity: ErrorSeverity::Error,
                kind: ErrorType::Settings,
                code: errors::SETTING_VALIDATION_ERROR.to_string(),
                message: msg,
            },
            SettingError::UnknownOption(name) => JawordError {
                severity: ErrorSeverity::Error,
                kind: ErrorType::Settings,
                code: errors::UNKNOWN_SETTING.to_string(),
                message: format!("Unknown option: {name}"),
            },
        }
    }
}

/// Setter function signature
///
/// Function pointers (not trait objects) for static dispatch.
/// Receives parsed and validated `SettingValue`, never raw strings.
pub type SettingSetter<T> = fn(&mut T, SettingValue) -> Result<(), SettingError>;

/// Setting descriptor
///
/// Minimal configuration: name, aliases, type, and setter function.
#[derive(Debug, Clone)]
pub struct SettingDescriptor<T> {
    /// Canonical setting name (e.g., "wordseparators")
    pub name: &'static str,
    /// Short aliases (e.g., &["wsep"])
    pub aliases: &'static [&'static str],
    /// One-line description for listings
    pub description: &'static str,
    /// Setting type for parsing and validation
    pub ty: SettingType,
    /// Setter function pointer
    pub set: SettingSetter<T>,
}
