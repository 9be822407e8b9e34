//! Clipboard commands: concealed write with auto-clear timer.
//!
//! These delegate to `platform::clipboard` for the platform write and
//! manage the auto-clear timer so front ends don't track clipboard
//! lifetimes.

use std::sync::Arc;

use crate::error::AppError;
use crate::platform::clipboard::{self, ClipboardSink, ClipboardTimerState};

/// Write `text` to `sink` and schedule an auto-clear after
/// `auto_clear_ms` (`0` disables auto-clear).
///
/// If a previous timer is active, it is cancelled before starting the
/// new one. Scheduling needs a tokio runtime; without one the copy still
/// happens and auto-clear is skipped with a warning.
///
/// # Errors
///
/// Returns [`AppError::Clipboard`] if the clipboard write fails.
pub fn clipboard_write_concealed(
    sink: &Arc<dyn ClipboardSink>,
    timer_state: &ClipboardTimerState,
    text: &str,
    auto_clear_ms: u32,
) -> Result<(), AppError> {
    sink.copy(text)?;

    if auto_clear_ms == 0 {
        clipboard::cancel_auto_clear(timer_state);
        return Ok(());
    }

    if tokio::runtime::Handle::try_current().is_ok() {
        clipboard::schedule_auto_clear(timer_state, auto_clear_ms, Arc::clone(sink));
        tracing::debug!(auto_clear_ms, "Clipboard auto-clear scheduled");
    } else {
        tracing::warn!("No async runtime, clipboard auto-clear skipped");
    }

    Ok(())
}

/// Clear the clipboard and cancel any pending auto-clear timer.
///
/// # Errors
///
/// Returns [`AppError::Clipboard`] if the clipboard clear fails.
pub fn clipboard_clear(
    sink: &Arc<dyn ClipboardSink>,
    timer_state: &ClipboardTimerState,
) -> Result<(), AppError> {
    clipboard::cancel_auto_clear(timer_state);
    sink.clear()
}
