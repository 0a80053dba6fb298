//! Input classification.
//!
//! A raw input string is ambiguous until classified: it may be JSON text
//! supplied inline, an absolute path to a file on disk, or the identifier of
//! a resource embedded in the binary. Classification is a total function
//! into [`InputKind`] with a fixed priority order; the predicates themselves
//! are pure and order-independent.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::bundle::ResourceBundle;

/// The source category of a raw input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// The string itself is a JSON document.
    InlineJson,
    /// The string is an absolute filesystem path (existence not checked).
    AbsoluteFilePath,
    /// The string names a resource present in the bundle.
    BundledResource,
    /// None of the above.
    Unrecognized,
}

/// Whether the string parses as JSON.
///
/// Uses the same parser as the loaders, so classification and loading can
/// never disagree about what counts as JSON.
#[must_use]
pub fn is_inline_json(input: &str) -> bool {
    serde_json::from_str::<Value>(input).is_ok()
}

/// Whether the string, read as a path, is absolute under host OS rules.
///
/// Shape check only — the file may not exist.
#[must_use]
pub fn is_absolute_path(input: &str) -> bool {
    Path::new(input).is_absolute()
}

/// Whether a resource with this identifier exists in the bundle.
#[must_use]
pub fn is_bundled_resource(input: &str, bundle: &dyn ResourceBundle) -> bool {
    bundle.contains(input)
}

/// Classify a raw input string.
///
/// Priority is fixed: inline JSON, then absolute path, then bundled
/// resource. The ordering is a policy choice, not a correctness requirement:
/// the in-memory parse probe is cheaper than touching the filesystem, and
/// the path-shape check resolves absolute-looking resource identifiers
/// deterministically (they go to the filesystem, never the bundle). A string
/// that is simultaneously valid JSON and something else — `"123"` is a valid
/// JSON number — classifies as inline JSON.
#[must_use]
pub fn classify(input: &str, bundle: &dyn ResourceBundle) -> InputKind {
    if is_inline_json(input) {
        InputKind::InlineJson
    } else if is_absolute_path(input) {
        InputKind::AbsoluteFilePath
    } else if is_bundled_resource(input, bundle) {
        InputKind::BundledResource
    } else {
        InputKind::Unrecognized
    }
}
