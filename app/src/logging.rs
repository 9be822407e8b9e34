//! `tracing` subscriber setup.
//!
//! Logs go to stderr through a non-blocking writer so stdout carries
//! only generated passwords. `RUST_LOG` overrides the configured level.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Fallback directive when neither `RUST_LOG` nor the preference parses.
const FALLBACK_DIRECTIVE: &str = "info";

/// Build the filter: `env` (the `RUST_LOG` value) wins over `configured`.
#[must_use]
pub fn build_filter(env: Option<&str>, configured: &str) -> EnvFilter {
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_DIRECTIVE))
}

/// Install the global subscriber.
///
/// The returned guard flushes buffered records on drop; keep it alive
/// for the lifetime of `main`. A second call leaves the first subscriber
/// in place.
#[must_use]
pub fn init(configured_level: &str) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(env.as_deref(), configured_level))
        .with_writer(writer)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::debug!("Global subscriber already installed");
    }

    guard
}
