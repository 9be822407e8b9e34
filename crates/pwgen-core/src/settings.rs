//! Generation settings: the immutable input to every `generate` call.

use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

/// Default password length used when no length is configured.
pub const DEFAULT_PASSWORD_LENGTH: i32 = 8;

/// Configuration for one password generation request.
///
/// Letters (A-Z, a-z) are always part of the alphabet; the two flags
/// add digits and special characters on top of them.
///
/// `length` is signed so that callers forwarding raw user input can
/// hand over zero or negative values and get a proper
/// [`GeneratorError::InvalidArgument`] back instead of a silent wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordGenerationSettings {
    /// Desired number of characters. Must be positive.
    #[serde(default = "default_length")]
    pub length: i32,
    /// Include digits (0-9).
    #[serde(default)]
    pub digits_included: bool,
    /// Include the 32 ASCII punctuation characters.
    #[serde(default)]
    pub special_characters_included: bool,
}

const fn default_length() -> i32 {
    DEFAULT_PASSWORD_LENGTH
}

impl Default for PasswordGenerationSettings {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            digits_included: false,
            special_characters_included: false,
        }
    }
}

impl PasswordGenerationSettings {
    /// Create settings with every field spelled out.
    #[must_use]
    pub const fn new(
        length: i32,
        digits_included: bool,
        special_characters_included: bool,
    ) -> Self {
        Self {
            length,
            digits_included,
            special_characters_included,
        }
    }

    /// Copy of these settings with a different length.
    #[must_use]
    pub const fn with_length(self, length: i32) -> Self {
        Self { length, ..self }
    }

    /// Copy of these settings with digits toggled.
    #[must_use]
    pub const fn with_digits(self, digits_included: bool) -> Self {
        Self {
            digits_included,
            ..self
        }
    }

    /// Copy of these settings with special characters toggled.
    #[must_use]
    pub const fn with_special_characters(self, special_characters_included: bool) -> Self {
        Self {
            special_characters_included,
            ..self
        }
    }

    /// Validate `length` and return it as a `usize`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] if `length <= 0`.
    pub fn validated_length(&self) -> Result<usize, GeneratorError> {
        usize::try_from(self.length)
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| {
                GeneratorError::InvalidArgument(format!(
                    "length must be positive, got {}",
                    self.length
                ))
            })
    }
}
