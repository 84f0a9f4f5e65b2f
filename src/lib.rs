/// Handles argument parsing for the demo binary.
pub mod cli;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Interactive prompts and the providers that render them.
pub mod prompt;

/// Answer validators
pub mod validation;

pub use error::{Error, Result};
pub use prompt::{input, select, select_string, yes_no, Prompts};
