//! Application error type for the `pwgen` shell.

use pwgen_core::GeneratorError;
use thiserror::Error;

/// Errors surfaced by the application layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// The generator rejected the current settings.
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    /// System clipboard write or clear failed.
    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// Preferences file is unusable (bad bounds, unreadable path).
    #[error("preferences error: {0}")]
    Preferences(String),

    /// A generate action asked for more passwords than one batch allows.
    #[error("batch of {requested} passwords exceeds the limit of {max}")]
    BatchTooLarge { requested: usize, max: usize },

    /// A generation task panicked or was cancelled.
    #[error("generation task failed: {0}")]
    Task(String),

    /// A copy request named a password that is not in the current list.
    #[error("no password at index {0}")]
    UnknownIndex(usize),

    /// Writing command output failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}
