//! # schemacheck
//!
//! Validates JSON content against a JSON Schema shipped inside the binary.
//!
//! Content may arrive in one of three forms — an inline JSON string, an
//! absolute filesystem path, or the identifier of a resource embedded in the
//! binary. Telling those apart and loading from the right source is the core
//! of this crate; JSON Schema semantics are delegated to the `jsonschema`
//! crate behind a narrow [`SchemaEngine`] seam.
//!
//! ## Quick Start
//!
//! ```rust
//! use schemacheck::{SchemaValidator, bundle, SCHEMA_RESOURCE_ID};
//!
//! let mut validator = SchemaValidator::new(bundle::embedded());
//! validator.initialize_schema(SCHEMA_RESOURCE_ID).unwrap();
//!
//! assert!(validator.validate("policies/valid_policy.json").unwrap());
//! assert!(!validator.validate("policies/invalid_policy.json").unwrap());
//! ```

pub mod bundle;
mod classify;
mod engine;
mod error;
mod observer;
mod report;
mod retrieve;
mod source;
mod validator;

pub use classify::{InputKind, classify, is_absolute_path, is_bundled_resource, is_inline_json};
pub use engine::{CompileError, CompiledSchema, ConformanceFailure, JsonSchemaEngine, SchemaEngine};
pub use error::{RetrievalError, ValidatorError};
pub use observer::{NoopObserver, ValidationObserver};
pub use report::Outcome;
pub use retrieve::{load, resolve, resolve_bundled};
pub use validator::SchemaValidator;

/// Resource identifier of the schema document shipped with the binary.
///
/// Loaded through the resource-only retrieval path ([`resolve_bundled`]), so
/// the leading slash never collides with the absolute-path input category.
pub const SCHEMA_RESOURCE_ID: &str = "/schema.json";
