//! Pure interfaces for prompting without external dependencies
//!
//! This module defines abstract interfaces for the three kinds of user prompts.
//! These interfaces are independent of any specific UI library implementation.

use crate::{error::Result, validation::ValidatorChain};

/// Configuration for text input prompts
pub struct TextPromptConfig<'a> {
    pub prompt: &'a str,
    pub validators: &'a ValidatorChain<'a>,
}

/// Configuration for boolean confirmation
#[derive(Debug, Clone)]
pub struct ConfirmationConfig {
    pub prompt: String,
    pub default: bool,
}

/// Configuration for single choice selection
#[derive(Debug, Clone)]
pub struct SingleChoiceConfig {
    pub prompt: String,
    pub choices: Vec<String>,
}

/// Abstract interface for text input prompts
///
/// Returns one submitted answer. Implementations may use `config.validators`
/// to re-ask on their own and then report so through [`validates_text`],
/// otherwise the caller checks the answer and asks again.
///
/// [`validates_text`]: TextPrompter::validates_text
pub trait TextPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String>;

    /// Whether answers from `prompt_text` already passed `config.validators`.
    fn validates_text(&self) -> bool {
        false
    }
}

/// Abstract interface for boolean confirmation
pub trait ConfirmationPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool>;
}

/// Abstract interface for single choice selection
pub trait SingleChoicePrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize>;
}

/// Combined interface that provides all prompt types
pub trait PromptProvider: TextPrompter + ConfirmationPrompter + SingleChoicePrompter {}

// Blanket implementation for any type that implements all prompt interfaces
impl<T> PromptProvider for T where T: TextPrompter + ConfirmationPrompter + SingleChoicePrompter {}
