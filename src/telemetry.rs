//! Diagnostic logging.
//!
//! Narration goes to stdout through [`crate::console`]; `tracing` events go
//! to stderr so the two never interleave on the same stream.

use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::EnvFilter;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Builds the filter from `level`, falling back to `warn` on a bad directive.
pub fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(level: &str) -> bool {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return false;
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Maps `-v` counts from the CLI onto a level, keeping the configured one at zero.
pub fn level_for_verbosity(configured: &str, verbose: u8) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}
