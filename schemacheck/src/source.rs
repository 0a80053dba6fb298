//! Content loaders, one per input category.
//!
//! Each loader produces a parsed [`Value`] or a [`RetrievalError`]. File and
//! resource loaders report a missing source as [`RetrievalError::NotFound`]
//! and malformed content as [`RetrievalError::Parse`] — never the one for
//! the other.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use crate::bundle::ResourceBundle;
use crate::error::RetrievalError;

/// Source identifier used for inline content in error messages.
const INLINE_SOURCE_ID: &str = "<inline>";

/// Parse inline JSON text.
///
/// # Errors
///
/// Returns [`RetrievalError::Parse`] if the string is not valid JSON.
pub fn load_inline(input: &str) -> Result<Value, RetrievalError> {
    serde_json::from_str(input).map_err(|e| RetrievalError::Parse {
        source_id: INLINE_SOURCE_ID.to_owned(),
        source: e,
    })
}

/// Load and parse a JSON file from an absolute path.
///
/// The file handle is scoped to the read and released on every exit path.
///
/// # Errors
///
/// Returns [`RetrievalError::NotFound`] if the path does not exist,
/// [`RetrievalError::Io`] if it exists but cannot be read, and
/// [`RetrievalError::Parse`] if its content is not valid JSON.
pub fn load_file(path: &str) -> Result<Value, RetrievalError> {
    if !Path::new(path).exists() {
        return Err(RetrievalError::NotFound {
            source_id: path.to_owned(),
        });
    }

    let bytes = fs::read(path).map_err(|e| {
        // The file can disappear between the existence check and the read.
        if e.kind() == ErrorKind::NotFound {
            RetrievalError::NotFound {
                source_id: path.to_owned(),
            }
        } else {
            RetrievalError::Io {
                source_id: path.to_owned(),
                source: e,
            }
        }
    })?;

    serde_json::from_slice(&bytes).map_err(|e| RetrievalError::Parse {
        source_id: path.to_owned(),
        source: e,
    })
}

/// Load and parse a JSON resource from the bundle.
///
/// # Errors
///
/// Returns [`RetrievalError::NotFound`] if no resource has this identifier
/// and [`RetrievalError::Parse`] if its content is not valid JSON.
pub fn load_resource(
    resource_id: &str,
    bundle: &dyn ResourceBundle,
) -> Result<Value, RetrievalError> {
    let Some(bytes) = bundle.get(resource_id) else {
        return Err(RetrievalError::NotFound {
            source_id: resource_id.to_owned(),
        });
    };

    serde_json::from_slice(bytes).map_err(|e| RetrievalError::Parse {
        source_id: resource_id.to_owned(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::bundle::{StaticBundle, embedded};

    #[test]
    fn test_load_inline_valid() {
        let value = load_inline(r#"{"key": "value"}"#).unwrap();
        assert_eq!(value["key"], "value");
    }

    #[test]
    fn test_load_inline_malformed() {
        let err = load_inline("{not json").unwrap_err();
        assert!(matches!(err, RetrievalError::Parse { .. }), "got: {err}");
        assert!(err.to_string().contains("<inline>"));
    }

    #[test]
    fn test_load_file_valid() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("doc.json");
        fs::write(&path, r#"{"n": 42}"#).unwrap();

        let value = load_file(path.to_str().unwrap()).unwrap();
        assert_eq!(value["n"], 42);
    }

    #[test]
    fn test_load_file_missing_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.json");

        let err = load_file(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, RetrievalError::NotFound { .. }), "got: {err}");
    }

    #[test]
    fn test_load_file_unreadable_is_io_error() {
        // A directory exists but cannot be read as a file, so the failure
        // is an I/O error, not NotFound.
        let tmp = TempDir::new().unwrap();

        let err = load_file(tmp.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, RetrievalError::Io { .. }), "got: {err}");
    }

    #[test]
    fn test_load_file_malformed_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_file(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, RetrievalError::Parse { .. }), "got: {err}");
    }

    #[test]
    fn test_load_resource_valid() {
        let value = load_resource("/schema.json", embedded()).unwrap();
        assert!(value.is_object());
    }

    #[test]
    fn test_load_resource_missing_is_not_found() {
        let err = load_resource("/absent.json", embedded()).unwrap_err();
        assert!(matches!(err, RetrievalError::NotFound { .. }), "got: {err}");
    }

    #[test]
    fn test_load_resource_malformed_is_parse_error() {
        const BROKEN: StaticBundle = StaticBundle::new(&[("broken.json", b"{not json")]);

        let err = load_resource("broken.json", &BROKEN).unwrap_err();
        assert!(matches!(err, RetrievalError::Parse { .. }), "got: {err}");
    }
}
