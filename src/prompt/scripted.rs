//! Prompt provider that replays a script of replies
//!
//! Useful for automation and tests: no terminal is touched, each prompt
//! consumes the next reply in order.

use super::interface::*;
use crate::{
    constants::INTERRUPT_ANSWER,
    error::{Error, Result},
};
use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    io,
};

/// One scripted reaction to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Submit this text to a text prompt.
    Text(String),
    /// Answer a confirmation.
    Confirm(bool),
    /// Pick the option at this index.
    Choice(usize),
    /// Submit whatever the prompt pre-selected.
    AcceptDefault,
    /// The user pressed Ctrl+C.
    Interrupt,
    /// The terminal failed with this kind of I/O error.
    Fail(io::ErrorKind),
}

/// Kind of prompt a command-line answer is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Text,
    Confirmation,
    Choice,
}

impl Reply {
    /// Parse a raw answer as given on the command line.
    ///
    /// `^C` is an interrupt for every kind. Confirmations take `y`, `yes`,
    /// `true`, `n`, `no`, `false` or an empty string for the default.
    /// Choices take one of `labels`, or an index when no label matches.
    pub fn parse_for(kind: PromptKind, raw: &str, labels: &[String]) -> Result<Reply> {
        if raw == INTERRUPT_ANSWER {
            return Ok(Reply::Interrupt);
        }
        match kind {
            PromptKind::Text => Ok(Reply::Text(raw.to_string())),
            PromptKind::Confirmation => match raw.trim().to_lowercase().as_str() {
                "" => Ok(Reply::AcceptDefault),
                "y" | "yes" | "true" => Ok(Reply::Confirm(true)),
                "n" | "no" | "false" => Ok(Reply::Confirm(false)),
                _ => Err(Error::InvalidAnswer(raw.to_string())),
            },
            PromptKind::Choice => labels
                .iter()
                .position(|label| label == raw)
                .or_else(|| raw.parse::<usize>().ok())
                .map(Reply::Choice)
                .ok_or_else(|| Error::InvalidAnswer(raw.to_string())),
        }
    }
}

/// Prompt provider answering from a queue of [`Reply`] values
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: RefCell<VecDeque<Reply>>,
    prompts: RefCell<Vec<String>>,
    calls: Cell<usize>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_replies(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self { replies: RefCell::new(replies.into_iter().collect()), ..Self::default() }
    }

    /// Queue a reply after the ones already scripted
    pub fn with_reply(self, reply: Reply) -> Self {
        self.replies.borrow_mut().push_back(reply);
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.with_reply(Reply::Text(text.to_string()))
    }

    pub fn with_confirmation(self, answer: bool) -> Self {
        self.with_reply(Reply::Confirm(answer))
    }

    pub fn with_choice(self, index: usize) -> Self {
        self.with_reply(Reply::Choice(index))
    }

    pub fn with_interrupt(self) -> Self {
        self.with_reply(Reply::Interrupt)
    }

    /// Number of prompts served so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Messages of the prompts served so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    /// Replies not consumed yet.
    pub fn remaining(&self) -> usize {
        self.replies.borrow().len()
    }

    fn next_reply(&self, prompt: &str) -> Result<Reply> {
        self.calls.set(self.calls.get() + 1);
        self.prompts.borrow_mut().push(prompt.to_string());

        let reply = self.replies.borrow_mut().pop_front().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no scripted reply left for '{prompt}'"),
            )
        })?;
        log::debug!("Serving scripted reply #{} for '{prompt}'", self.calls.get());

        match reply {
            Reply::Interrupt => Err(Error::Canceled),
            Reply::Fail(kind) => Err(io::Error::new(kind, "scripted failure").into()),
            reply => Ok(reply),
        }
    }
}

fn mismatch(reply: &Reply, expected: &str) -> Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("scripted reply {reply:?} does not answer a {expected} prompt"),
    )
    .into()
}

impl TextPrompter for ScriptedPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        match self.next_reply(config.prompt)? {
            Reply::Text(text) => Ok(text),
            other => Err(mismatch(&other, "text")),
        }
    }
}

impl ConfirmationPrompter for ScriptedPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        match self.next_reply(&config.prompt)? {
            Reply::Confirm(answer) => Ok(answer),
            Reply::AcceptDefault => Ok(config.default),
            other => Err(mismatch(&other, "confirmation")),
        }
    }
}

impl SingleChoicePrompter for ScriptedPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        match self.next_reply(&config.prompt)? {
            Reply::Choice(index) => Ok(index),
            Reply::AcceptDefault => Ok(0),
            other => Err(mismatch(&other, "selection")),
        }
    }
}
