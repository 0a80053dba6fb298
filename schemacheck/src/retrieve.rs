//! Retrieval coordination: classify an input, then load it from the
//! matching source.

use serde_json::Value;

use crate::bundle::ResourceBundle;
use crate::classify::{self, InputKind};
use crate::error::RetrievalError;
use crate::source;

/// Resolve a raw input string to a parsed JSON document.
///
/// Classification priority (inline JSON, then absolute path, then bundled
/// resource) is documented on [`classify::classify`].
///
/// # Errors
///
/// Returns [`RetrievalError::Unrecognized`] if the input matches no
/// category, otherwise whatever the matching loader reports.
pub fn resolve(input: &str, bundle: &dyn ResourceBundle) -> Result<Value, RetrievalError> {
    load(classify::classify(input, bundle), input, bundle)
}

/// Load an input that has already been classified.
///
/// Lets callers classify once (for diagnostics) and dispatch without
/// recomputing the category.
///
/// # Errors
///
/// Returns the matching loader's error, or [`RetrievalError::Unrecognized`]
/// for [`InputKind::Unrecognized`].
pub fn load(
    kind: InputKind,
    input: &str,
    bundle: &dyn ResourceBundle,
) -> Result<Value, RetrievalError> {
    match kind {
        InputKind::InlineJson => source::load_inline(input),
        InputKind::AbsoluteFilePath => source::load_file(input),
        InputKind::BundledResource => source::load_resource(input, bundle),
        InputKind::Unrecognized => Err(RetrievalError::Unrecognized {
            input: input.to_owned(),
        }),
    }
}

/// Resolve a bundled resource directly, bypassing classification.
///
/// For inputs that are known to be resource identifiers — in practice the
/// schema document itself, which must never be mistaken for inline JSON or
/// a file path.
///
/// # Errors
///
/// Returns [`RetrievalError::NotFound`] if the resource is absent and
/// [`RetrievalError::Parse`] if its content is not valid JSON.
pub fn resolve_bundled(
    resource_id: &str,
    bundle: &dyn ResourceBundle,
) -> Result<Value, RetrievalError> {
    source::load_resource(resource_id, bundle)
}
