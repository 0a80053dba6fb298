//! Argument parsing, validation driving, and exit-code mapping.

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use schemacheck::{SCHEMA_RESOURCE_ID, SchemaValidator, bundle};

use crate::logging;

/// Content conformed to the schema.
const EXIT_VALID: i32 = 0;
/// Content did not conform, or the invocation itself was wrong.
const EXIT_INVALID_OR_USAGE: i32 = 1;
/// Validation could not be attempted (schema load or retrieval failure).
const EXIT_FAILURE: i32 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "schemacheck",
    version,
    about = "Validate JSON content against the bundled JSON Schema"
)]
pub struct Cli {
    /// Inline JSON, an absolute file path, or a bundled resource identifier.
    input: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

/// Parse arguments, run validation, and return the process exit code.
pub fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap renders its own help/usage text.
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_VALID,
                _ => EXIT_INVALID_OR_USAGE,
            };
        }
    };

    logging::init(cli.verbose);

    match execute(&cli) {
        Ok(true) => EXIT_VALID,
        Ok(false) => EXIT_INVALID_OR_USAGE,
        Err(e) => {
            tracing::error!(error = %e, "validation could not be attempted");
            eprintln!("schemacheck: {e:#}");
            EXIT_FAILURE
        }
    }
}

/// Initialize the validator, validate the input, and print the outcome.
///
/// `Ok(bool)` is the conformance verdict; `Err` means validation could not
/// be attempted at all (schema failed to load, or the input could not be
/// resolved to a JSON document).
fn execute(cli: &Cli) -> anyhow::Result<bool> {
    let mut validator = SchemaValidator::new(bundle::embedded())
        .with_observer(Box::new(logging::TracingObserver));

    validator
        .initialize_schema(SCHEMA_RESOURCE_ID)
        .context("schema initialization failed")?;

    let outcome = validator
        .validate_detailed(&cli.input)
        .with_context(|| format!("cannot validate input: {}", cli.input))?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Human => println!("{}", outcome.format_human_readable()),
    }

    Ok(outcome.valid)
}
