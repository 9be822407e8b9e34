//! `pwgen`: generate random passwords from the command line.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use pwgen::cli::Cli;
use pwgen::platform::clipboard::SystemClipboard;
use pwgen::preferences::Preferences;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let prefs = cli
        .config
        .as_deref()
        .map_or_else(Preferences::load_default, Preferences::load);

    let _log_guard = pwgen::logging::init(&prefs.log_level);

    tracing::debug!(
        passwords_count = prefs.passwords_count,
        auto_clear_ms = prefs.clipboard_auto_clear_ms,
        "Starting pwgen"
    );

    let mut stdout = std::io::stdout().lock();
    match pwgen::run(&cli, &prefs, Arc::new(SystemClipboard::default()), &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("pwgen: {e}");
            ExitCode::FAILURE
        }
    }
}
