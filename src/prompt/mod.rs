//! Interactive prompts for free text, yes/no questions and single choices
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `scripted`: Implementation replaying predefined replies
//!
//! [`Prompts`] sits on top of a provider and gives every prompt the same
//! contract: the answer is required, and a user abort is reported as
//! [`Error::Canceled`](crate::error::Error::Canceled) while any other provider
//! error is returned unchanged.

use crate::{
    error::Result,
    validation::{Validator, ValidatorChain},
};
use std::io;

pub mod dialoguer;
pub mod interface;
pub mod scripted;

// Re-export interfaces for easy access
pub use interface::*;

use self::dialoguer::DialoguerPrompter;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> DialoguerPrompter {
    DialoguerPrompter::default()
}

/// Prompt operations backed by a [`PromptProvider`]
pub struct Prompts<P: PromptProvider> {
    provider: P,
}

impl Default for Prompts<DialoguerPrompter> {
    fn default() -> Self {
        Self::new(get_prompt_provider())
    }
}

impl<P: PromptProvider> Prompts<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Ask the user to input a line of text.
    ///
    /// The empty answer is always rejected, then `validators` run in the
    /// given order. The user is asked again until every validator accepts.
    /// Providers that validate on their own are trusted with everything but
    /// the empty answer, so each validator sees an answer once.
    pub fn input(&self, prompt: &str, validators: &[&dyn Validator]) -> Result<String> {
        let chain = ValidatorChain::new(validators);
        let config = TextPromptConfig { prompt, validators: &chain };

        loop {
            log::debug!("Asking for text: '{prompt}'");
            let answer = self.provider.prompt_text(&config).inspect_err(log_canceled)?;
            if self.provider.validates_text() && !answer.is_empty() {
                return Ok(answer);
            }
            match chain.check(&answer) {
                Ok(()) => return Ok(answer),
                Err(reason) => log::debug!("Rejected answer: {reason}"),
            }
        }
    }

    /// Ask the user a yes/no question. `default` is pre-selected.
    pub fn yes_no(&self, question: &str, default: bool) -> Result<bool> {
        log::debug!("Asking yes/no question: '{question}' (default: {default})");
        let config = ConfirmationConfig { prompt: question.to_string(), default };
        self.provider.prompt_confirmation(&config).inspect_err(log_canceled)
    }

    /// Ask the user to select one of many options. Returns the index of the
    /// chosen option.
    pub fn select<S: AsRef<str>>(&self, msg: &str, options: &[S]) -> Result<usize> {
        log::debug!("Asking to select one of {} options: '{msg}'", options.len());
        let config = SingleChoiceConfig {
            prompt: msg.to_string(),
            choices: options.iter().map(|o| o.as_ref().to_string()).collect(),
        };
        let index = self.provider.prompt_single_choice(&config).inspect_err(log_canceled)?;

        if index >= options.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("selected index {index} is out of range for {} options", options.len()),
            )
            .into());
        }
        Ok(index)
    }

    /// Ask the user to select one of many options. Shows `display_options`
    /// and returns the entry of `options` at the chosen index.
    ///
    /// # Panics
    ///
    /// Panics if `display_options` and `options` differ in length.
    pub fn select_string<D, S>(
        &self,
        msg: &str,
        display_options: &[D],
        options: &[S],
    ) -> Result<String>
    where
        D: AsRef<str>,
        S: AsRef<str>,
    {
        assert_eq!(
            display_options.len(),
            options.len(),
            "Lengths of display options and options don't match"
        );
        let index = self.select(msg, display_options)?;
        Ok(options[index].as_ref().to_string())
    }
}

fn log_canceled(err: &crate::error::Error) {
    if err.is_canceled() {
        log::info!("Prompt canceled by the user");
    }
}

/// Ask the user to input a line of text on the terminal.
pub fn input(prompt: &str, validators: &[&dyn Validator]) -> Result<String> {
    Prompts::default().input(prompt, validators)
}

/// Ask the user a yes/no question on the terminal.
pub fn yes_no(question: &str, default: bool) -> Result<bool> {
    Prompts::default().yes_no(question, default)
}

/// Ask the user to select one of many options on the terminal. Returns the
/// index of the chosen option.
pub fn select<S: AsRef<str>>(msg: &str, options: &[S]) -> Result<usize> {
    Prompts::default().select(msg, options)
}

/// Ask the user to select one of many options on the terminal. Returns the
/// entry of `options` matching the chosen display option.
///
/// # Panics
///
/// Panics if `display_options` and `options` differ in length.
pub fn select_string<D, S>(msg: &str, display_options: &[D], options: &[S]) -> Result<String>
where
    D: AsRef<str>,
    S: AsRef<str>,
{
    Prompts::default().select_string(msg, display_options, options)
}
