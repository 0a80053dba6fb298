//! Error types for content retrieval and schema validation.

use thiserror::Error;

/// Errors from classifying and loading JSON content.
///
/// "Source absent" ([`RetrievalError::NotFound`]) and "source present but
/// malformed" ([`RetrievalError::Parse`]) are deliberately distinct kinds:
/// the CLI collapses both into a failure exit, but callers diagnosing a bad
/// input need to know which one happened.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// The named file or bundled resource does not exist.
    #[error("source not found: {source_id}")]
    NotFound {
        /// File path or resource identifier that failed to resolve.
        source_id: String,
    },

    /// The source exists but could not be read.
    #[error("I/O error reading {source_id}")]
    Io {
        /// File path that failed to read.
        source_id: String,
        #[source]
        source: std::io::Error,
    },

    /// The source was read but its content is not valid JSON.
    #[error("invalid JSON in {source_id}")]
    Parse {
        /// File path, resource identifier, or `<inline>` for direct input.
        source_id: String,
        #[source]
        source: serde_json::Error,
    },

    /// The input matched none of the known source categories.
    #[error("input is not inline JSON, an absolute file path, or a bundled resource: {input}")]
    Unrecognized {
        /// The raw input string as supplied.
        input: String,
    },
}

/// Errors from the schema validator.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// The schema resource could not be loaded, parsed, or compiled.
    #[error("failed to load schema from {resource_id}: {cause}")]
    SchemaLoad {
        /// Bundled resource identifier of the schema document.
        resource_id: String,
        /// Human-readable description of the underlying failure.
        cause: String,
    },

    /// `validate` was called before `initialize_schema` succeeded.
    ///
    /// A programming-contract violation, not a data error: the caller asked
    /// for validation without giving the validator a schema first.
    #[error("schema not initialized; call initialize_schema before validate")]
    NotInitialized,

    /// The input could not be resolved to a JSON document at all.
    ///
    /// Distinct from a `false` validation result: nothing was checked
    /// against the schema because nothing could be obtained or parsed.
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
}
