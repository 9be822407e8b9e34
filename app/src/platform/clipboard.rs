//! Clipboard sinks with concealment and auto-clear.
//!
//! - **macOS**: `NSPasteboard` with the `org.nspasteboard.ConcealedType`
//!   marker so clipboard managers skip the entry.
//! - **Windows**: `ExcludeClipboardContentFromMonitorProcessing` format to
//!   keep the entry out of clipboard history.
//! - **Linux / BSD**: `arboard` with the password-manager hint. The
//!   clipboard handle is kept alive for the lifetime of the sink because
//!   X11/Wayland serve contents from the owning process.
//!
//! The auto-clear timer is a tokio task so it outlives the call that
//! scheduled it.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::JoinHandle;

use crate::error::AppError;

// ── Sink abstraction ─────────────────────────────────────────────────

/// Destination for copy-to-clipboard requests.
pub trait ClipboardSink: Send + Sync {
    /// Replace the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Clipboard`] if the platform write fails.
    fn copy(&self, text: &str) -> Result<(), AppError>;

    /// Clear the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Clipboard`] if the platform clear fails.
    fn clear(&self) -> Result<(), AppError>;
}

// ── Auto-clear timer state ───────────────────────────────────────────

/// Handle to a spawned auto-clear task.
pub type ClipboardTimerState = Arc<Mutex<Option<JoinHandle<()>>>>;

/// Schedule a clear of `sink` after `timeout_ms` milliseconds.
///
/// Cancels any previously scheduled timer before starting a new one.
/// A timeout of `0` clears the clipboard immediately. Must be called
/// from within a tokio runtime.
pub fn schedule_auto_clear(
    timer_state: &ClipboardTimerState,
    timeout_ms: u32,
    sink: Arc<dyn ClipboardSink>,
) {
    cancel_auto_clear(timer_state);

    let handle = tokio::spawn(async move {
        if timeout_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(u64::from(timeout_ms))).await;
        }
        // Best-effort: another app may hold the clipboard.
        match sink.clear() {
            Ok(()) => tracing::debug!("Clipboard auto-cleared"),
            Err(e) => tracing::warn!("Clipboard auto-clear failed: {e}"),
        }
    });

    let mut guard = timer_state.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = Some(handle);
}

/// Cancel the currently scheduled auto-clear timer, if any.
pub fn cancel_auto_clear(timer_state: &ClipboardTimerState) {
    if let Some(handle) = take_pending(timer_state) {
        handle.abort();
    }
}

/// Take the pending auto-clear task out of `timer_state` so the caller
/// can await it.
#[must_use]
pub fn take_pending(timer_state: &ClipboardTimerState) -> Option<JoinHandle<()>> {
    timer_state
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
}

// ── In-memory sink ───────────────────────────────────────────────────

/// Process-local clipboard. Used headless and in tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    writes: Mutex<usize>,
}

impl MemoryClipboard {
    /// Current contents, `None` after a clear.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of successful `copy` calls.
    #[must_use]
    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ClipboardSink for MemoryClipboard {
    fn copy(&self, text: &str) -> Result<(), AppError> {
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_owned());
        let mut writes = self.writes.lock().unwrap_or_else(PoisonError::into_inner);
        *writes = writes.saturating_add(1);
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

// ── System sink ──────────────────────────────────────────────────────

/// The operating system clipboard, written with platform concealment.
#[derive(Default)]
pub struct SystemClipboard {
    #[cfg(all(
        unix,
        not(any(target_os = "macos", target_os = "ios", target_os = "android"))
    ))]
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard").finish_non_exhaustive()
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&self, text: &str) -> Result<(), AppError> {
        self.platform_write_concealed(text).map_err(AppError::Clipboard)
    }

    fn clear(&self) -> Result<(), AppError> {
        self.platform_clear().map_err(AppError::Clipboard)
    }
}

// ── macOS implementation ─────────────────────────────────────────────

#[cfg(target_os = "macos")]
impl SystemClipboard {
    #[allow(clippy::unused_self)]
    fn platform_write_concealed(&self, text: &str) -> Result<(), String> {
        use objc2_app_kit::NSPasteboard;
        use objc2_foundation::{NSData, NSString};

        let pasteboard = NSPasteboard::generalPasteboard();
        pasteboard.clearContents();

        let ns_text = NSString::from_str(text);
        let text_type = NSString::from_str("public.utf8-plain-text");
        if !pasteboard.setString_forType(&ns_text, &text_type) {
            return Err("Failed to write text to NSPasteboard".to_string());
        }

        // An empty data blob under the concealed type means "don't record this".
        let concealed_type = NSString::from_str("org.nspasteboard.ConcealedType");
        let empty_data = NSData::new();
        let _ = pasteboard.setData_forType(Some(&empty_data), &concealed_type);

        Ok(())
    }

    #[allow(clippy::unused_self, clippy::unnecessary_wraps)]
    fn platform_clear(&self) -> Result<(), String> {
        use objc2_app_kit::NSPasteboard;
        use objc2_foundation::NSString;

        let pasteboard = NSPasteboard::generalPasteboard();
        pasteboard.clearContents();

        // Paste after a clear yields an empty string, not stale data.
        let ns_empty = NSString::from_str("");
        let text_type = NSString::from_str("public.utf8-plain-text");
        let _ = pasteboard.setString_forType(&ns_empty, &text_type);

        Ok(())
    }
}

// ── Windows implementation ───────────────────────────────────────────

#[cfg(target_os = "windows")]
impl SystemClipboard {
    #[allow(clippy::unused_self)]
    fn platform_write_concealed(&self, text: &str) -> Result<(), String> {
        use clipboard_win::raw;

        let cf_exclude = raw::register_format("ExcludeClipboardContentFromMonitorProcessing")
            .ok_or("Failed to register clipboard exclusion format")?;

        // raw::close() must run on every path after open.
        raw::open().map_err(|e| format!("Failed to open clipboard: {e}"))?;

        let result = (|| -> Result<(), String> {
            let _ = raw::empty();

            // CF_UNICODETEXT = 13, NUL-terminated UTF-16.
            let wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();
            let bytes: Vec<u8> = wide.iter().flat_map(|w| w.to_le_bytes()).collect();
            raw::set_without_clear(13, &bytes)
                .map_err(|e| format!("Failed to write text to clipboard: {e}"))?;

            raw::set_without_clear(cf_exclude.get(), &[0u8])
                .map_err(|e| format!("Failed to set clipboard exclusion: {e}"))?;

            Ok(())
        })();

        raw::close();

        result
    }

    #[allow(clippy::unused_self)]
    fn platform_clear(&self) -> Result<(), String> {
        use clipboard_win::raw;

        raw::open().map_err(|e| format!("Failed to open clipboard: {e}"))?;
        let _ = raw::empty();
        raw::close();

        Ok(())
    }
}

// ── Linux / BSD implementation ───────────────────────────────────────

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "ios", target_os = "android"))
))]
impl SystemClipboard {
    fn with_handle<T>(
        &self,
        op: impl FnOnce(&mut arboard::Clipboard) -> Result<T, arboard::Error>,
    ) -> Result<T, String> {
        let mut guard = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
        if guard.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| format!("Clipboard unavailable: {e}"))?;
            *guard = Some(clipboard);
        }
        let Some(clipboard) = guard.as_mut() else {
            return Err("Clipboard unavailable".to_string());
        };
        op(clipboard).map_err(|e| format!("Clipboard operation failed: {e}"))
    }

    fn platform_write_concealed(&self, text: &str) -> Result<(), String> {
        use arboard::SetExtLinux;

        self.with_handle(|clipboard| {
            clipboard
                .set()
                .exclude_from_history()
                .text(text.to_owned())
        })
    }

    fn platform_clear(&self) -> Result<(), String> {
        self.with_handle(arboard::Clipboard::clear)
    }
}

// ── Other platforms ──────────────────────────────────────────────────

#[cfg(not(any(
    target_os = "macos",
    target_os = "windows",
    all(
        unix,
        not(any(target_os = "macos", target_os = "ios", target_os = "android"))
    )
)))]
impl SystemClipboard {
    #[allow(clippy::unused_self)]
    fn platform_write_concealed(&self, _text: &str) -> Result<(), String> {
        Err("no system clipboard on this platform".to_string())
    }

    #[allow(clippy::unused_self)]
    fn platform_clear(&self) -> Result<(), String> {
        Err("no system clipboard on this platform".to_string())
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn memory() -> Arc<MemoryClipboard> {
        Arc::new(MemoryClipboard::default())
    }

    #[test]
    fn timer_state_defaults_to_none() {
        let state: ClipboardTimerState = Arc::new(Mutex::new(None));
        assert!(state.lock().expect("lock").is_none());
    }

    #[test]
    fn cancel_on_empty_state_does_not_panic() {
        let state: ClipboardTimerState = Arc::new(Mutex::new(None));
        cancel_auto_clear(&state);
        assert!(state.lock().expect("lock").is_none());
    }

    #[test]
    fn memory_clipboard_copy_and_clear() {
        let clipboard = MemoryClipboard::default();
        clipboard.copy("hunter2").unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("hunter2"));
        assert_eq!(clipboard.writes(), 1);
        clipboard.clear().unwrap();
        assert_eq!(clipboard.contents(), None);
        assert_eq!(clipboard.writes(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn auto_clear_fires_after_timeout() {
        let clipboard = memory();
        let state: ClipboardTimerState = Arc::new(Mutex::new(None));
        clipboard.copy("secret").unwrap();

        schedule_auto_clear(&state, 30_000, clipboard.clone());

        tokio::time::sleep(Duration::from_secs(29)).await;
        assert_eq!(clipboard.contents().as_deref(), Some("secret"));

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(clipboard.contents(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_timeout_clears_immediately() {
        let clipboard = memory();
        let state: ClipboardTimerState = Arc::new(Mutex::new(None));
        clipboard.copy("secret").unwrap();

        schedule_auto_clear(&state, 0, clipboard.clone());
        let handle = take_pending(&state).expect("pending timer");
        handle.await.unwrap();

        assert_eq!(clipboard.contents(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_clear() {
        let clipboard = memory();
        let state: ClipboardTimerState = Arc::new(Mutex::new(None));
        clipboard.copy("keep").unwrap();

        schedule_auto_clear(&state, 1_000, clipboard.clone());
        cancel_auto_clear(&state);
        assert!(state.lock().expect("lock").is_none());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(clipboard.contents().as_deref(), Some("keep"));
    }

    #[tokio::test(start_paused = true)]
    async fn rescheduling_replaces_previous_timer() {
        let clipboard = memory();
        let state: ClipboardTimerState = Arc::new(Mutex::new(None));
        clipboard.copy("first").unwrap();
        schedule_auto_clear(&state, 1_000, clipboard.clone());

        tokio::time::sleep(Duration::from_millis(500)).await;
        clipboard.copy("second").unwrap();
        schedule_auto_clear(&state, 1_000, clipboard.clone());

        // The first timer would have fired at 1000ms.
        tokio::time::sleep(Duration::from_millis(700)).await;
        assert_eq!(clipboard.contents().as_deref(), Some("second"));

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(clipboard.contents(), None);
    }
}
