//! Global constants for jaword

pub mod separators {
    /// Word separators shipped by common editors as their stock configuration
    pub const DEFAULT_WORD_SEPARATORS: &str = "`~!@#$%^&*()-=+[{]}\\|;:'\",.<>/?";
}

pub mod commands {
    pub const CURSOR_NEXT_WORD_END: &str = "cursorNextWordEndJa";
    pub const CURSOR_NEXT_WORD_END_SELECT: &str = "cursorNextWordEndSelectJa";
    pub const CURSOR_PREV_WORD_START: &str = "cursorPrevWordStartJa";
    pub const CURSOR_PREV_WORD_START_SELECT: &str = "cursorPrevWordStartSelectJa";
    pub const DELETE_WORD_RIGHT: &str = "deleteWordRightJa";
    pub const DELETE_WORD_LEFT: &str = "deleteWordLeftJa";
}

pub mod errors {
    // Error Codes
    pub const INVALID_POSITION: &str = "INVALID_POSITION";
    pub const INVALID_RANGE: &str = "INVALID_RANGE";
    pub const UNKNOWN_COMMAND: &str = "UNKNOWN_COMMAND";
    pub const AMBIGUOUS_COMMAND: &str = "AMBIGUOUS_COMMAND";
    pub const SETTING_PARSE_ERROR: &str = "SETTING_PARSE_ERROR";
    pub const SETTING_VALIDATION_ERROR: &str = "SETTING_VALIDATION_ERROR";
    pub const UNKNOWN_SETTING: &str = "UNKNOWN_SETTING";
    pub const NO_SELECTION: &str = "NO_SELECTION";
}
