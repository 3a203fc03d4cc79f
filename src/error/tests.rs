//! Tests for jaword error handling

use super::*;
use std::io;

#[test]
fn test_error_severity_display() {
    assert_eq!(format!("{}", ErrorSeverity::Info), "INFO");
    assert_eq!(format!("{}", ErrorSeverity::Warning), "WARN");
    assert_eq!(format!("{}", ErrorSeverity::Error), "ERROR");
    assert_eq!(format!("{}", ErrorSeverity::Critical), "CRITICAL");
}

#[test]
fn test_error_severity_ordering() {
    assert!(ErrorSeverity::Info < ErrorSeverity::Warning);
    assert!(ErrorSeverity::Warning < ErrorSeverity::Error);
    assert!(ErrorSeverity::Error < ErrorSeverity::Critical);
}

#[test]
fn test_error_type_display() {
    assert_eq!(format!("{}", ErrorType::Io), "IO");
    assert_eq!(format!("{}", ErrorType::Parse), "Parse");
    assert_eq!(format!("{}", ErrorType::Settings), "Settings");
    assert_eq!(format!("{}", ErrorType::Execution), "Execution");
    assert_eq!(format!("{}", ErrorType::Internal), "Internal");
    assert_eq!(format!("{}", ErrorType::Other), "Other");
}

#[test]
fn test_constructors_set_severity() {
    let err = JawordError::new(ErrorType::Execution, "E001", "bad range");
    assert_eq!(err.severity, ErrorSeverity::Error);
    assert_eq!(err.code, "E001");

    let err = JawordError::critical(ErrorType::Internal, "BROKEN", "line index desync");
    assert_eq!(err.severity, ErrorSeverity::Critical);

    let err = JawordError::warning(ErrorType::Settings, "W001", "ignored");
    assert_eq!(err.severity, ErrorSeverity::Warning);
    assert_eq!(err.kind, ErrorType::Settings);
}

#[test]
fn test_display_format() {
    let err = JawordError::new(ErrorType::Parse, "BAD_VALUE", "not a number");
    assert_eq!(err.to_string(), "[ERROR] Parse(BAD_VALUE): not a number");
}

#[test]
fn test_conversions() {
    let err: JawordError = "plain".into();
    assert_eq!(err.kind, ErrorType::Other);
    assert_eq!(err.code, "GENERIC_ERROR");

    let err: JawordError = String::from("owned").into();
    assert!(err.contains_msg("owned"));

    let io_err = io::Error::new(io::ErrorKind::NotFound, "missing file");
    let err: JawordError = io_err.into();
    assert_eq!(err.kind, ErrorType::Io);
    assert_eq!(err.code, "IO_ERROR");
    assert!(err.contains_msg("missing file"));
}
