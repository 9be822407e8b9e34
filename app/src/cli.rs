//! Command-line arguments for the `pwgen` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::password_generator::GenerateBatchRequest;

/// Generate a batch of random passwords.
///
/// Letters (A-Z, a-z) are always used; digits and special characters are
/// switched on or off per run. Unset options fall back to the preferences
/// file.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "pwgen", version, about, allow_negative_numbers = true)]
pub struct Cli {
    /// Password length.
    #[arg(short, long)]
    pub length: Option<i32>,

    /// Include digits (0-9).
    #[arg(short, long, overrides_with = "no_digits")]
    pub digits: bool,

    /// Leave digits out, even if the preferences include them.
    #[arg(long, overrides_with = "digits")]
    pub no_digits: bool,

    /// Include special characters (ASCII punctuation).
    #[arg(short, long, overrides_with = "no_special")]
    pub special: bool,

    /// Leave special characters out, even if the preferences include them.
    #[arg(long, overrides_with = "special")]
    pub no_special: bool,

    /// Number of passwords to generate.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Copy the password at this zero-based index to the clipboard.
    #[arg(short, long, value_name = "INDEX")]
    pub copy: Option<usize>,

    /// Preferences file to use instead of the per-user default.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the batch as a JSON array.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// The generation part of the arguments. A class left unmentioned
    /// defers to preferences.
    #[must_use]
    pub fn batch_request(&self) -> GenerateBatchRequest {
        GenerateBatchRequest {
            length: self.length,
            digits: toggle(self.digits, self.no_digits),
            special_characters: toggle(self.special, self.no_special),
            count: self.count,
        }
    }
}

/// Collapse an `--x` / `--no-x` pair. clap keeps only the last one given.
const fn toggle(on: bool, off: bool) -> Option<bool> {
    if on {
        Some(true)
    } else if off {
        Some(false)
    } else {
        None
    }
}
