//! PWGEN application shell.
//!
//! Wires `pwgen-core` to a front end: preferences, the screen state
//! store, batch generation, the clipboard sink and logging. The `pwgen`
//! binary is a thin command-line front end over [`run`].

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod platform;
pub mod preferences;
pub mod state;

use std::io::Write;
use std::sync::Arc;

use pwgen_core::{OsRandom, PasswordGenerator, RandomPasswordGenerator};
use zeroize::Zeroize;

use cli::Cli;
pub use error::AppError;
use platform::clipboard::ClipboardSink;
use preferences::Preferences;
use state::{MainState, MainStore};

/// Build a store seeded from `prefs`, using the OS CSPRNG generator.
#[must_use]
pub fn build_store(prefs: &Preferences, clipboard: Arc<dyn ClipboardSink>) -> MainStore {
    let generator: Arc<dyn PasswordGenerator> =
        Arc::new(RandomPasswordGenerator::<OsRandom>::default());
    MainStore::new(
        MainState::from_preferences(prefs),
        generator,
        clipboard,
        prefs.clipboard_auto_clear_ms,
    )
}

/// Run one command-line invocation: apply the arguments to a fresh
/// store, generate a batch, print it to `out`, and optionally copy one
/// entry and wait for the clipboard auto-clear.
///
/// # Errors
///
/// - [`AppError::Generator`] for a non-positive length.
/// - [`AppError::BatchTooLarge`] if the count exceeds the batch limit.
/// - [`AppError::UnknownIndex`] if `--copy` names a missing entry.
/// - [`AppError::Output`] if writing to `out` fails.
pub async fn run<W: Write>(
    cli: &Cli,
    prefs: &Preferences,
    clipboard: Arc<dyn ClipboardSink>,
    out: &mut W,
) -> Result<(), AppError> {
    let store = build_store(prefs, clipboard);

    let (settings, count) = cli.batch_request().resolve(prefs);
    store.change_password_length(settings.length);
    store.digits_checked(settings.digits_included);
    store.special_characters_checked(settings.special_characters_included);
    store.change_passwords_count(count);

    let mut passwords = store.generate().await?;

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &passwords)
            .map_err(|e| AppError::Output(e.into()))?;
        writeln!(out)?;
    } else {
        for password in &passwords {
            writeln!(out, "{password}")?;
        }
    }
    out.flush()?;
    passwords.zeroize();

    if let Some(index) = cli.copy {
        store.copy_password_at(index)?;
        tracing::info!(index, "Password copied to clipboard");
        store.wait_for_auto_clear().await;
    }

    Ok(())
}
