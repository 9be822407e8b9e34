//! User preferences: plain JSON, read once at startup.
//!
//! The file seeds the screen state (default length, slider bounds, batch
//! size, class toggles) and the ambient settings (clipboard auto-clear,
//! log level). The application never writes it back.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use pwgen_core::DEFAULT_PASSWORD_LENGTH;

/// File name inside the per-user config directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

// ── Top-level preferences ──────────────────────────────────────────

/// Application preferences.
///
/// Every field has a default, so a partial file only overrides what it
/// names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Length selected when the screen opens.
    #[serde(default = "default_length")]
    pub default_length: i32,

    /// Smallest length offered by the length control.
    #[serde(default = "default_min_length")]
    pub min_length: i32,

    /// Largest length offered by the length control.
    #[serde(default = "default_max_length")]
    pub max_length: i32,

    /// Increment of the length control.
    #[serde(default = "default_length_step")]
    pub length_step: i32,

    /// Number of passwords produced per generate action.
    #[serde(default = "default_passwords_count")]
    pub passwords_count: usize,

    /// Whether digits start enabled.
    #[serde(default)]
    pub digits_included: bool,

    /// Whether special characters start enabled.
    #[serde(default)]
    pub special_characters_included: bool,

    /// Milliseconds before a copied password is cleared from the
    /// clipboard. `0` disables auto-clear.
    #[serde(default = "default_clipboard_auto_clear")]
    pub clipboard_auto_clear_ms: u32,

    /// Default `tracing` filter directive (`RUST_LOG` overrides it).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            default_length: default_length(),
            min_length: default_min_length(),
            max_length: default_max_length(),
            length_step: default_length_step(),
            passwords_count: default_passwords_count(),
            digits_included: false,
            special_characters_included: false,
            clipboard_auto_clear_ms: default_clipboard_auto_clear(),
            log_level: default_log_level(),
        }
    }
}

const fn default_length() -> i32 {
    DEFAULT_PASSWORD_LENGTH
}
const fn default_min_length() -> i32 {
    6
}
const fn default_max_length() -> i32 {
    20
}
const fn default_length_step() -> i32 {
    1
}
const fn default_passwords_count() -> usize {
    10
}
const fn default_clipboard_auto_clear() -> u32 {
    30_000
}
fn default_log_level() -> String {
    "info".into()
}

// ── File I/O ───────────────────────────────────────────────────────

impl Preferences {
    /// Per-user location of the preferences file, e.g.
    /// `~/.config/pwgen/preferences.json` on Linux.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "pwgen").map(|dirs| dirs.config_dir().join(PREFERENCES_FILE))
    }

    /// Load preferences from `path`.
    ///
    /// Returns [`Default::default()`] when the file is missing or
    /// contains invalid JSON (corrupt-file recovery).
    #[must_use]
    pub fn load(path: &Path) -> Self {
        fs::read_to_string(path).map_or_else(
            |_| Self::default(),
            |contents| serde_json::from_str(&contents).unwrap_or_default(),
        )
    }

    /// Load from [`Preferences::default_path`], or defaults when no
    /// config directory can be resolved.
    #[must_use]
    pub fn load_default() -> Self {
        Self::default_path().map_or_else(Self::default, |path| Self::load(&path))
    }
}

// ── Tests ──────────────────────────────────────────────────────────
