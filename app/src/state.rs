//! Screen state for the password generator.
//!
//! [`MainState`] is the value the front end renders: current settings,
//! the length control bounds, the batch size and the last generated
//! batch. [`MainStore`] owns it behind a `Mutex` and exposes one method
//! per user intent. The mutex is never held across an `.await`.
//!
//! Replaced password lists are zeroized before they are dropped.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use zeroize::Zeroize;

use pwgen_core::{PasswordGenerationSettings, PasswordGenerator};

use crate::commands;
use crate::error::AppError;
use crate::platform::clipboard::{self, ClipboardSink, ClipboardTimerState};
use crate::preferences::Preferences;

// ── Length bounds ──────────────────────────────────────────────────

/// Range offered by the length control. Display metadata only: the
/// store forwards whatever length it is given and the generator alone
/// decides what is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: i32,
    pub max: i32,
    pub step: i32,
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self {
            min: 6,
            max: 20,
            step: 1,
        }
    }
}

impl LengthBounds {
    /// Build bounds, rejecting empty or non-positive ranges.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Preferences`] if `min < 1`, `max < min` or
    /// `step < 1`.
    pub fn new(min: i32, max: i32, step: i32) -> Result<Self, AppError> {
        if min < 1 || max < min || step < 1 {
            return Err(AppError::Preferences(format!(
                "invalid length bounds: min {min}, max {max}, step {step}"
            )));
        }
        Ok(Self { min, max, step })
    }

    /// Distance between the two ends of the control.
    #[must_use]
    pub const fn delta(&self) -> i32 {
        self.max.saturating_sub(self.min)
    }

    /// Number of discrete positions the control can take.
    #[must_use]
    pub const fn steps(&self) -> i32 {
        match self.delta().checked_div(self.step) {
            Some(n) => n,
            None => 0,
        }
    }

    /// Whether `length` is one of the offered values.
    #[must_use]
    pub const fn contains(&self, length: i32) -> bool {
        length >= self.min && length <= self.max
    }
}

// ── Screen state ───────────────────────────────────────────────────

/// Everything the generator screen displays.
#[derive(Clone, PartialEq, Eq)]
pub struct MainState {
    pub settings: PasswordGenerationSettings,
    pub bounds: LengthBounds,
    pub passwords_count: usize,
    pub passwords: Vec<String>,
}

impl Default for MainState {
    fn default() -> Self {
        Self {
            settings: PasswordGenerationSettings::default(),
            bounds: LengthBounds::default(),
            passwords_count: 10,
            passwords: Vec::new(),
        }
    }
}

impl std::fmt::Debug for MainState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MainState")
            .field("settings", &self.settings)
            .field("bounds", &self.bounds)
            .field("passwords_count", &self.passwords_count)
            .field("passwords", &format_args!("[***; {}]", self.passwords.len()))
            .finish()
    }
}

impl MainState {
    /// Initial state seeded from preferences. Unusable bounds fall back
    /// to the defaults with a warning.
    #[must_use]
    pub fn from_preferences(prefs: &Preferences) -> Self {
        let bounds = LengthBounds::new(prefs.min_length, prefs.max_length, prefs.length_step)
            .unwrap_or_else(|e| {
                tracing::warn!("{e}; using default bounds");
                LengthBounds::default()
            });
        Self {
            settings: PasswordGenerationSettings::new(
                prefs.default_length,
                prefs.digits_included,
                prefs.special_characters_included,
            ),
            bounds,
            passwords_count: prefs.passwords_count,
            passwords: Vec::new(),
        }
    }
}

// ── Store ──────────────────────────────────────────────────────────

/// State container for the generator screen.
///
/// Collaborators are passed in at construction: the generator that
/// produces passwords and the sink that receives copies.
pub struct MainStore {
    state: Mutex<MainState>,
    generator: Arc<dyn PasswordGenerator>,
    clipboard: Arc<dyn ClipboardSink>,
    clipboard_timer: ClipboardTimerState,
    clipboard_auto_clear_ms: u32,
}

impl MainStore {
    /// Create a store with `initial` state.
    #[must_use]
    pub fn new(
        initial: MainState,
        generator: Arc<dyn PasswordGenerator>,
        clipboard: Arc<dyn ClipboardSink>,
        clipboard_auto_clear_ms: u32,
    ) -> Self {
        Self {
            state: Mutex::new(initial),
            generator,
            clipboard,
            clipboard_timer: Arc::new(Mutex::new(None)),
            clipboard_auto_clear_ms,
        }
    }

    fn lock(&self) -> MutexGuard<'_, MainState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> MainState {
        self.lock().clone()
    }

    /// Set the requested password length.
    pub fn change_password_length(&self, length: i32) {
        let mut state = self.lock();
        if !state.bounds.contains(length) {
            tracing::debug!(length, "Length outside control bounds");
        }
        state.settings = state.settings.with_length(length);
    }

    /// Toggle special characters.
    pub fn special_characters_checked(&self, checked: bool) {
        let mut state = self.lock();
        state.settings = state.settings.with_special_characters(checked);
    }

    /// Toggle digits.
    pub fn digits_checked(&self, checked: bool) {
        let mut state = self.lock();
        state.settings = state.settings.with_digits(checked);
    }

    /// Change how many passwords one generate action produces.
    pub fn change_passwords_count(&self, count: usize) {
        self.lock().passwords_count = count;
    }

    /// Generate a fresh batch with the current settings and replace the
    /// displayed list. The previous list is zeroized.
    ///
    /// On failure the displayed list is left untouched.
    ///
    /// # Errors
    ///
    /// See [`commands::password_generator::generate_batch`].
    pub async fn generate(&self) -> Result<Vec<String>, AppError> {
        let (settings, count) = {
            let state = self.lock();
            (state.settings, state.passwords_count)
        };

        let passwords =
            commands::password_generator::generate_batch(&self.generator, settings, count).await?;

        let mut previous = std::mem::replace(&mut self.lock().passwords, passwords.clone());
        previous.zeroize();
        Ok(passwords)
    }

    /// Copy `password` to the clipboard.
    ///
    /// Best-effort: a failing platform clipboard is logged and otherwise
    /// ignored.
    pub fn copy_password(&self, password: &str) {
        if let Err(e) = commands::clipboard::clipboard_write_concealed(
            &self.clipboard,
            &self.clipboard_timer,
            password,
            self.clipboard_auto_clear_ms,
        ) {
            tracing::warn!("Copy to clipboard failed: {e}");
        }
    }

    /// Copy the password at `index` in the displayed list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownIndex`] if the list has no such entry.
    pub fn copy_password_at(&self, index: usize) -> Result<(), AppError> {
        let mut password = self
            .lock()
            .passwords
            .get(index)
            .cloned()
            .ok_or(AppError::UnknownIndex(index))?;
        self.copy_password(&password);
        password.zeroize();
        Ok(())
    }

    /// Clear the clipboard now and cancel any pending auto-clear.
    ///
    /// Best-effort, like [`MainStore::copy_password`].
    pub fn clear_clipboard(&self) {
        if let Err(e) = commands::clipboard::clipboard_clear(&self.clipboard, &self.clipboard_timer)
        {
            tracing::warn!("Clipboard clear failed: {e}");
        }
    }

    /// Wait for a pending clipboard auto-clear, if one is scheduled.
    ///
    /// On Ctrl-C the timer is aborted and the clipboard cleared at once.
    pub async fn wait_for_auto_clear(&self) {
        let Some(mut handle) = clipboard::take_pending(&self.clipboard_timer) else {
            return;
        };

        tokio::select! {
            result = &mut handle => {
                if let Err(e) = result {
                    tracing::warn!("Clipboard auto-clear task failed: {e}");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, clearing clipboard now");
                handle.abort();
                self.clear_clipboard();
            }
        }
    }
}

impl Drop for MainStore {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        state.passwords.zeroize();
    }
}
