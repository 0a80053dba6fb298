//! Logging setup and the tracing-backed validation observer.
//!
//! The core library is log-free by design; this module is where its observer
//! events become log lines.

use schemacheck::{InputKind, ValidationObserver};
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise verbosity flags map to
/// warn (default), debug (`-v`), or trace (`-vv`). Logs go to stderr so
/// stdout stays machine-readable.
pub fn init(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Observer that forwards validation lifecycle events to `tracing`.
pub struct TracingObserver;

impl ValidationObserver for TracingObserver {
    fn schema_initialized(&self, resource_id: &str) {
        tracing::debug!(resource_id, "schema loaded and compiled");
    }

    fn input_classified(&self, input: &str, kind: InputKind) {
        tracing::debug!(input, ?kind, "input classified");
    }

    fn conformance_failure(&self, details: &str) {
        tracing::debug!(details, "document does not conform");
    }

    fn outcome(&self, valid: bool) {
        tracing::info!(valid, "validation finished");
    }
}
