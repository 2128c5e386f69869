//! Generate command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use uuidcol_codec::{encode_for_backend, NaturalKey, UuidValue};

use crate::output::print_output;

use super::CommandContext;

/// Generate UUIDs.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Derive a deterministic UUID from these natural-key parts (joined with '-').
    #[arg(long = "natural-key", value_name = "PART")]
    natural_key: Vec<String>,

    /// Namespace UUID for natural-key derivation (defaults to the OID namespace).
    #[arg(long, requires = "natural_key")]
    namespace: Option<String>,

    /// Number of random UUIDs to generate.
    #[arg(long, short = 'n', default_value_t = 1, conflicts_with = "natural_key")]
    count: usize,
}

#[derive(Debug, Serialize, tabled::Tabled)]
struct GeneratedRow {
    #[tabled(rename = "UUID")]
    uuid: UuidValue,
    #[tabled(rename = "WIRE")]
    wire: String,
}

impl GenerateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        // Show the wire form only when a backend is named; a named but
        // unsupported backend is an error.
        let backend = match ctx.resolve_backend_name() {
            Some(_) => Some(ctx.require_backend()?),
            None => None,
        };

        let values: Vec<UuidValue> = if self.natural_key.is_empty() {
            (0..self.count).map(|_| UuidValue::generate()).collect()
        } else {
            vec![self.derive()?]
        };

        let rows = values
            .into_iter()
            .map(|uuid| -> Result<GeneratedRow> {
                let wire = match backend {
                    Some(b) => encode_for_backend(&uuid, b)?.to_string(),
                    None => "-".to_string(),
                };
                Ok(GeneratedRow { uuid, wire })
            })
            .collect::<Result<Vec<_>>>()?;

        print_output(&rows, ctx.format);
        Ok(())
    }

    fn derive(&self) -> Result<UuidValue> {
        let key = match &self.namespace {
            Some(ns) => {
                let namespace: UuidValue = ns
                    .parse()
                    .with_context(|| format!("Invalid namespace UUID: {ns}"))?;
                NaturalKey::with_namespace(namespace)
            }
            None => NaturalKey::new(),
        };
        Ok(key.derive(&self.natural_key))
    }
}
