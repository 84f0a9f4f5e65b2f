//! Constants used throughout cliask

/// Answer given on the command line to simulate Ctrl+C in non-interactive mode
pub const INTERRUPT_ANSWER: &str = "^C";

/// Validation messages
pub mod validation {
    pub const INVALID_ANSWER: &str = "Invalid answer";
    pub const REQUIRED: &str = "Value is required";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
    /// 128 + SIGINT, what shells report for a Ctrl+C'd process.
    pub const CANCELED: i32 = 130;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
