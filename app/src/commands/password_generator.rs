//! Batch password generation.
//!
//! Fans out one generator call per requested password on tokio's blocking
//! pool and fans the results back in, in issue order.

use std::sync::Arc;

use pwgen_core::{GeneratorError, PasswordGenerationSettings, PasswordGenerator};

use crate::error::AppError;
use crate::preferences::Preferences;

/// Largest batch a single generate action may request.
pub const MAX_BATCH_SIZE: usize = 10_000;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Front-end request for a batch of passwords. Absent fields fall back
/// to the preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateBatchRequest {
    /// Password length.
    pub length: Option<i32>,
    /// Include digits.
    pub digits: Option<bool>,
    /// Include special characters.
    pub special_characters: Option<bool>,
    /// Number of passwords.
    pub count: Option<usize>,
}

impl GenerateBatchRequest {
    /// Resolve against `prefs` into concrete settings and a batch size.
    #[must_use]
    pub fn resolve(&self, prefs: &Preferences) -> (PasswordGenerationSettings, usize) {
        let settings = PasswordGenerationSettings::new(
            self.length.unwrap_or(prefs.default_length),
            self.digits.unwrap_or(prefs.digits_included),
            self.special_characters
                .unwrap_or(prefs.special_characters_included),
        );
        (settings, self.count.unwrap_or(prefs.passwords_count))
    }
}

// ---------------------------------------------------------------------------
// Batch generation
// ---------------------------------------------------------------------------

/// Generate `count` passwords concurrently.
///
/// Settings and batch size are validated before any task is spawned.
/// Results come back in the order the calls were issued, not completion
/// order. Generated values are never logged.
///
/// # Errors
///
/// - [`AppError::Generator`] if the settings are invalid or any call fails
///   (the earliest failing call in issue order wins).
/// - [`AppError::BatchTooLarge`] if `count` exceeds [`MAX_BATCH_SIZE`].
/// - [`AppError::Task`] if a generation task panics or is cancelled.
pub async fn generate_batch(
    generator: &Arc<dyn PasswordGenerator>,
    settings: PasswordGenerationSettings,
    count: usize,
) -> Result<Vec<String>, AppError> {
    settings.validated_length()?;
    if count > MAX_BATCH_SIZE {
        return Err(AppError::BatchTooLarge {
            requested: count,
            max: MAX_BATCH_SIZE,
        });
    }

    let generator = Arc::clone(generator);
    let passwords = fan_out(count, move |_| generator.generate(&settings)).await?;

    tracing::debug!(
        count,
        length = settings.length,
        digits = settings.digits_included,
        special = settings.special_characters_included,
        "Password batch generated"
    );

    Ok(passwords)
}

/// Run `task(0..count)` on the blocking pool and collect the results by
/// index.
async fn fan_out<T, F>(count: usize, task: F) -> Result<Vec<T>, AppError>
where
    T: Send + 'static,
    F: Fn(usize) -> Result<T, GeneratorError> + Send + Sync + 'static,
{
    let task = Arc::new(task);
    let handles: Vec<_> = (0..count)
        .map(|index| {
            let task = Arc::clone(&task);
            tokio::task::spawn_blocking(move || task(index))
        })
        .collect();

    let mut results = Vec::with_capacity(count);
    for handle in handles {
        let produced = handle.await.map_err(|e| AppError::Task(e.to_string()))?;
        results.push(produced?);
    }
    Ok(results)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
