//! Schema validator: holds one compiled schema and checks documents
//! resolved from any of the three input sources.

use crate::bundle::ResourceBundle;
use crate::classify;
use crate::engine::{CompiledSchema, JsonSchemaEngine, SchemaEngine};
use crate::error::ValidatorError;
use crate::observer::{NoopObserver, ValidationObserver};
use crate::report::Outcome;
use crate::retrieve;

/// Validates JSON content against a schema loaded from the bundle.
///
/// Two states: uninitialized (no compiled schema) and ready. Calling
/// [`validate`](Self::validate) before [`initialize_schema`](Self::initialize_schema)
/// is a contract violation reported as [`ValidatorError::NotInitialized`],
/// never a boolean.
///
/// The one subtle contract: a document that resolves and parses but fails
/// schema conformance is `Ok(false)`; a document that cannot be obtained or
/// parsed at all is a hard error. Callers can always tell "invalid content"
/// apart from "could not even attempt validation".
pub struct SchemaValidator<'b> {
    bundle: &'b dyn ResourceBundle,
    engine: Box<dyn SchemaEngine>,
    observer: Box<dyn ValidationObserver>,
    compiled: Option<Box<dyn CompiledSchema>>,
}

impl<'b> SchemaValidator<'b> {
    /// Validator over the default engine (the `jsonschema` crate).
    #[must_use]
    pub fn new(bundle: &'b dyn ResourceBundle) -> Self {
        Self::with_engine(bundle, Box::new(JsonSchemaEngine))
    }

    /// Validator over a caller-supplied schema engine.
    #[must_use]
    pub fn with_engine(bundle: &'b dyn ResourceBundle, engine: Box<dyn SchemaEngine>) -> Self {
        Self {
            bundle,
            engine,
            observer: Box::new(NoopObserver),
            compiled: None,
        }
    }

    /// Replace the diagnostics sink.
    #[must_use]
    pub fn with_observer(mut self, observer: Box<dyn ValidationObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Whether a schema has been loaded and compiled.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.compiled.is_some()
    }

    /// Load and compile the schema from a bundled resource.
    ///
    /// Goes through the resource-only retrieval path deliberately: the
    /// schema identifier must never be classified as inline JSON or a file
    /// path. Re-initialization replaces the compiled schema; on failure the
    /// validator is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::SchemaLoad`] wrapping the not-found, parse,
    /// or compile cause.
    pub fn initialize_schema(&mut self, resource_id: &str) -> Result<(), ValidatorError> {
        let schema = retrieve::resolve_bundled(resource_id, self.bundle).map_err(|e| {
            ValidatorError::SchemaLoad {
                resource_id: resource_id.to_owned(),
                cause: e.to_string(),
            }
        })?;

        let compiled =
            self.engine
                .compile(&schema)
                .map_err(|e| ValidatorError::SchemaLoad {
                    resource_id: resource_id.to_owned(),
                    cause: e.to_string(),
                })?;

        self.compiled = Some(compiled);
        self.observer.schema_initialized(resource_id);
        Ok(())
    }

    /// Validate content from any supported source.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::NotInitialized`] before a successful
    /// [`initialize_schema`](Self::initialize_schema), and
    /// [`ValidatorError::Retrieval`] when the input cannot be resolved to a
    /// JSON document.
    pub fn validate(&self, input: &str) -> Result<bool, ValidatorError> {
        self.validate_detailed(input).map(|outcome| outcome.valid)
    }

    /// Validate content and return the full outcome report.
    ///
    /// # Errors
    ///
    /// Same contract as [`validate`](Self::validate).
    pub fn validate_detailed(&self, input: &str) -> Result<Outcome, ValidatorError> {
        let Some(compiled) = self.compiled.as_ref() else {
            return Err(ValidatorError::NotInitialized);
        };

        let kind = classify::classify(input, self.bundle);
        self.observer.input_classified(input, kind);

        let document = retrieve::load(kind, input, self.bundle)?;

        let outcome = match compiled.check(&document) {
            Ok(()) => Outcome {
                input_kind: kind,
                valid: true,
                failure: None,
            },
            Err(failure) => {
                self.observer.conformance_failure(&failure.0);
                Outcome {
                    input_kind: kind,
                    valid: false,
                    failure: Some(failure.0),
                }
            }
        };

        self.observer.outcome(outcome.valid);
        Ok(outcome)
    }
}
