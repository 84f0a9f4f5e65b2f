use crate::constants::exit_codes;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The user interrupted the prompt, e.g. by pressing Ctrl+C.
    #[error("Canceled.")]
    Canceled,

    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A non-interactive answer that does not fit the prompt it was given to.
    #[error("Invalid answer '{0}'.")]
    InvalidAnswer(String),

    #[error("Failed to install the interrupt handler. Original error: {0}")]
    InterruptHandlerError(#[from] ctrlc::Error),
}

impl Error {
    /// Whether this error is the user aborting the prompt.
    pub fn is_canceled(&self) -> bool {
        matches!(self, Error::Canceled)
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
                Error::Canceled
            }
            dialoguer::Error::IO(e) => Error::IoError(e),
        }
    }
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Cancellation exits with [`exit_codes::CANCELED`], everything else with
/// [`exit_codes::FAILURE`]. A prompt interrupted mid-render may leave the
/// cursor hidden, so it is shown again before exiting.
pub fn default_error_handler(err: Error) {
    if err.is_canceled() {
        if let Err(e) = console::Term::stderr().show_cursor() {
            log::debug!("Failed to restore the cursor: {e}");
        }
    }
    eprintln!("{err}");
    std::process::exit(exit_code(&err));
}

/// Process exit code reported for `err`.
pub fn exit_code(err: &Error) -> i32 {
    if err.is_canceled() {
        exit_codes::CANCELED
    } else {
        exit_codes::FAILURE
    }
}

/// Keep Ctrl+C from terminating the process while a prompt is shown.
///
/// `console` raises SIGINT after reading Ctrl+C; with this no-op handler in
/// place the prompt returns its `Interrupted` error instead, which becomes
/// [`Error::Canceled`]. Installing twice is not an error.
pub fn install_interrupt_handler() -> Result<()> {
    match ctrlc::set_handler(|| log::debug!("Received SIGINT")) {
        Ok(()) | Err(ctrlc::Error::MultipleHandlers) => Ok(()),
        Err(e) => Err(e.into()),
    }
}
