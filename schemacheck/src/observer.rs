//! Injected diagnostics sink.
//!
//! The classifier, loaders, and coordinator are log-free; callers that want
//! diagnostics inject an observer into the validator instead. Every hook is
//! fire-and-forget and never affects control flow.

use crate::classify::InputKind;

/// Receives validation lifecycle events.
///
/// All hooks default to no-ops so implementors subscribe only to what they
/// care about.
pub trait ValidationObserver {
    /// A schema was loaded and compiled.
    fn schema_initialized(&self, _resource_id: &str) {}

    /// An input was classified, before any loading happened.
    fn input_classified(&self, _input: &str, _kind: InputKind) {}

    /// A document was resolved and parsed but does not conform.
    fn conformance_failure(&self, _details: &str) {}

    /// Final outcome of a validation run.
    fn outcome(&self, _valid: bool) {}
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ValidationObserver for NoopObserver {}
