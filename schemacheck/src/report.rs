//! Validation outcome report.

use serde::Serialize;

use crate::classify::InputKind;

/// Result of one validation run.
///
/// Only exists for inputs that were successfully resolved and checked;
/// retrieval failures surface as errors, never as an `Outcome`.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct Outcome {
    /// How the input was classified.
    pub input_kind: InputKind,
    /// Whether the document conforms to the schema.
    pub valid: bool,
    /// Engine description of the first violation, when `valid` is false.
    pub failure: Option<String>,
}

impl Outcome {
    /// Format the outcome for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        if self.valid {
            "valid".to_owned()
        } else {
            match &self.failure {
                Some(details) => format!("invalid: {details}"),
                None => "invalid".to_owned(),
            }
        }
    }
}
