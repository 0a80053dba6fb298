//! Schema-engine abstraction.
//!
//! The external JSON Schema engine sits behind a two-method seam (`compile`,
//! `check`) so the classifier, loaders, and coordinator never depend on a
//! particular schema library. [`JsonSchemaEngine`] is the shipped
//! implementation, backed by the `jsonschema` crate.

use serde_json::Value;
use thiserror::Error;

/// The schema document was rejected by the engine.
#[derive(Debug, Error)]
#[error("schema compilation failed: {0}")]
pub struct CompileError(pub String);

/// A document was checked and does not conform to the schema.
///
/// Carries a human-readable description only. Callers report it; they do not
/// match on its content.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ConformanceFailure(pub String);

/// A compiled schema, ready to check documents.
pub trait CompiledSchema {
    /// Check a document against this schema.
    ///
    /// # Errors
    ///
    /// Returns a [`ConformanceFailure`] describing the first violation when
    /// the document does not conform.
    fn check(&self, document: &Value) -> Result<(), ConformanceFailure>;
}

/// Compiles parsed schema documents.
pub trait SchemaEngine {
    /// Compile a parsed schema document.
    ///
    /// # Errors
    ///
    /// Returns a [`CompileError`] if the engine rejects the schema.
    fn compile(&self, schema: &Value) -> Result<Box<dyn CompiledSchema>, CompileError>;
}

/// [`SchemaEngine`] backed by the `jsonschema` crate.
///
/// Draft selection follows the document's `$schema` keyword.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSchemaEngine;

struct CompiledJsonSchema {
    validator: jsonschema::Validator,
}

impl SchemaEngine for JsonSchemaEngine {
    fn compile(&self, schema: &Value) -> Result<Box<dyn CompiledSchema>, CompileError> {
        let validator =
            jsonschema::validator_for(schema).map_err(|e| CompileError(e.to_string()))?;
        Ok(Box::new(CompiledJsonSchema { validator }))
    }
}

impl CompiledSchema for CompiledJsonSchema {
    fn check(&self, document: &Value) -> Result<(), ConformanceFailure> {
        self.validator
            .validate(document)
            .map_err(|e| ConformanceFailure(e.to_string()))
    }
}
