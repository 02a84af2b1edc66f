//! Diagnostic logging to stderr.

use crate::config::LogLevel;

/// Install the process-wide tracing subscriber.
///
/// Safe to call more than once; only the first call takes effect.
pub fn init(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
