//! Error types for `pwgen-core`.

use thiserror::Error;

/// Errors produced by password generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The caller supplied settings that cannot produce a password
    /// (non-positive length). Always a caller bug, never transient.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
