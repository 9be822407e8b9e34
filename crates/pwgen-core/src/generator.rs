//! Random password generation.
//!
//! Every position is an independent uniform draw over the alphabet built
//! from the settings. No class is forced into the output and nothing is
//! shuffled afterwards, so a password can (rarely) miss an enabled class.

use crate::alphabet::Alphabet;
use crate::error::GeneratorError;
use crate::random::{OsRandom, RandomSource};
use crate::settings::PasswordGenerationSettings;

/// Produces one password per call.
///
/// Implementations take `&self` and hold no per-call state, so one
/// instance can serve any number of concurrent callers.
pub trait PasswordGenerator: Send + Sync {
    /// Generate a password for `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] if `settings.length <= 0`.
    fn generate(&self, settings: &PasswordGenerationSettings) -> Result<String, GeneratorError>;
}

/// Uniform per-character sampler over the settings alphabet.
#[derive(Debug, Clone, Default)]
pub struct RandomPasswordGenerator<R = OsRandom> {
    source: R,
}

impl<R: RandomSource> RandomPasswordGenerator<R> {
    /// Create a generator drawing from `source`.
    #[must_use]
    pub const fn new(source: R) -> Self {
        Self { source }
    }

    /// The random source this generator samples from.
    #[must_use]
    pub const fn source(&self) -> &R {
        &self.source
    }
}

impl<R: RandomSource> PasswordGenerator for RandomPasswordGenerator<R> {
    fn generate(&self, settings: &PasswordGenerationSettings) -> Result<String, GeneratorError> {
        // Validation comes first: nothing is allocated and the random
        // source is not touched for a rejected request.
        let length = settings.validated_length()?;

        let alphabet = Alphabet::for_settings(settings);
        let symbols = alphabet.as_bytes();

        let password = (0..length)
            .map(|_| char::from(symbols[self.source.next_index(symbols.len())]))
            .collect();

        Ok(password)
    }
}

/// Generate a password with the OS CSPRNG.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidArgument`] if `settings.length <= 0`.
pub fn generate_password(settings: &PasswordGenerationSettings) -> Result<String, GeneratorError> {
    RandomPasswordGenerator::<OsRandom>::default().generate(settings)
}
