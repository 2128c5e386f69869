//! Classify command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use uuidcol_codec::{classify, Classification};

use crate::output::print_output;

use super::CommandContext;

/// Classify raw column types for the selected backend.
#[derive(Debug, Args)]
pub struct ClassifyCommand {
    /// Raw column types, as reported by the database (e.g. "binary(16)").
    #[arg(required = true)]
    raw_types: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct ClassifyRow {
    #[tabled(rename = "RAW TYPE")]
    raw_type: String,
    #[tabled(rename = "BACKEND")]
    backend: String,
    #[tabled(rename = "CLASSIFICATION")]
    classification: Classification,
}

impl ClassifyCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let backend = ctx.require_backend()?;

        let rows: Vec<ClassifyRow> = self
            .raw_types
            .into_iter()
            .map(|raw_type| ClassifyRow {
                classification: classify(backend, &raw_type),
                backend: backend.to_string(),
                raw_type,
            })
            .collect();

        print_output(&rows, ctx.format);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_context;
    use crate::error::CliError;
    use uuidcol_codec::UuidError;

    fn command(raw: &[&str]) -> ClassifyCommand {
        ClassifyCommand {
            raw_types: raw.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_run_classifies() {
        let result = command(&["binary(16)", "int(11)"]).run(&test_context(Some("mysql2")));
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_unsupported_backend() {
        let err = command(&["uuid"]).run(&test_context(Some("oracle"))).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Codec(UuidError::UnsupportedBackend(_)))
        ));
    }

    #[test]
    fn test_run_no_backend() {
        let err = command(&["uuid"]).run(&test_context(None)).unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::NoBackend)));
    }
}
