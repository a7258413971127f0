//! Logging bootstrap.

use tracing::Level;

/// Install the global tracing subscriber at the configured level.
///
/// Unknown level strings fall back to `info`. Safe to call more than once;
/// later calls are no-ops.
pub fn init(log_level: &str) {
    let level: Level = log_level.parse().unwrap_or(Level::INFO);
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}
