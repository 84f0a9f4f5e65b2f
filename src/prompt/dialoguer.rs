//! Dialoguer-based implementations of prompt interfaces
//!
//! This module provides concrete implementations of the prompt interfaces
//! using the dialoguer library for terminal user interaction.
//!
//! Ctrl+C surfaces as [`Error::Canceled`] through the `From<dialoguer::Error>`
//! conversion. Note that `console` also raises SIGINT after reading Ctrl+C, so
//! a host only observes the error if it handles that signal itself. Escape on
//! a confirmation or selection is reported as cancellation as well.

use super::interface::{
    ConfirmationConfig, ConfirmationPrompter, SingleChoiceConfig, SingleChoicePrompter,
    TextPromptConfig, TextPrompter,
};
use crate::error::{Error, Result};
use clap::ValueEnum;
use dialoguer::{
    theme::{ColorfulTheme, SimpleTheme, Theme},
    Confirm, Input, Select,
};
use std::fmt::Display;

/// Visual style of the rendered prompts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ThemeKind {
    /// Colors and unicode markers.
    #[default]
    Colorful,
    /// Plain text only.
    Plain,
}

impl Display for ThemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ThemeKind::Colorful => "colorful",
            ThemeKind::Plain => "plain",
        };
        write!(f, "{s}")
    }
}

/// Dialoguer-based implementation of all prompt interfaces
#[derive(Debug, Default, Clone)]
pub struct DialoguerPrompter {
    theme: ThemeKind,
}

impl DialoguerPrompter {
    pub fn new(theme: ThemeKind) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> ThemeKind {
        self.theme
    }

    fn with_theme<R>(&self, f: impl FnOnce(&dyn Theme) -> R) -> R {
        match self.theme {
            ThemeKind::Colorful => f(&ColorfulTheme::default()),
            ThemeKind::Plain => f(&SimpleTheme),
        }
    }
}

impl TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let validators = config.validators;
        self.with_theme(|theme| -> Result<String> {
            Ok(Input::<String>::with_theme(theme)
                .with_prompt(config.prompt)
                .validate_with(move |input: &String| validators.check(input))
                .interact_text()?)
        })
    }

    fn validates_text(&self) -> bool {
        true
    }
}

impl ConfirmationPrompter for DialoguerPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        self.with_theme(|theme| -> Result<bool> {
            Confirm::with_theme(theme)
                .with_prompt(&config.prompt)
                .default(config.default)
                .show_default(true)
                .wait_for_newline(true)
                .interact_opt()?
                .ok_or(Error::Canceled)
        })
    }
}

impl SingleChoicePrompter for DialoguerPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        self.with_theme(|theme| -> Result<usize> {
            Select::with_theme(theme)
                .with_prompt(&config.prompt)
                .items(&config.choices)
                .default(0)
                .interact_opt()?
                .ok_or(Error::Canceled)
        })
    }
}
