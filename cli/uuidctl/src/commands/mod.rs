//! CLI commands.

mod backends;
mod classify;
mod ddl;
mod generate;
mod value;

use anyhow::Result;
use clap::{Parser, Subcommand};
use uuidcol_codec::Backend;

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// uuidctl - classify UUID column types and convert UUID values per backend.
#[derive(Debug, Parser)]
#[command(name = "uuidctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Backend descriptor (native-uuid, binary) or adapter name (postgresql, mysql2, ...).
    #[arg(long, short, global = true, env = "UUIDCTL_BACKEND")]
    backend: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify raw column types reported by schema introspection.
    Classify(classify::ClassifyCommand),

    /// Print the DDL type for a UUID column.
    Ddl(ddl::DdlCommand),

    /// Encode a UUID into the backend's wire form.
    Encode(value::EncodeCommand),

    /// Decode a stored UUID (text or hex bytes) into canonical form.
    Decode(value::DecodeCommand),

    /// Render a UUID as a SQL literal for the backend.
    Literal(value::LiteralCommand),

    /// Generate a new UUID or derive one from a natural key.
    Generate(generate::GenerateCommand),

    /// List supported backends and their UUID representation.
    Backends,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext {
            config,
            format: self.format,
            backend: self.backend,
        };

        match self.command {
            Commands::Classify(cmd) => cmd.run(&ctx),
            Commands::Ddl(cmd) => cmd.run(&ctx),
            Commands::Encode(cmd) => cmd.run(&ctx),
            Commands::Decode(cmd) => cmd.run(&ctx),
            Commands::Literal(cmd) => cmd.run(&ctx),
            Commands::Generate(cmd) => cmd.run(&ctx),
            Commands::Backends => backends::run(&ctx),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
    pub backend: Option<String>,
}

impl CommandContext {
    /// Resolve the backend name, preferring flag over config.
    pub fn resolve_backend_name(&self) -> Option<&str> {
        self.backend.as_deref().or(self.config.backend.as_deref())
    }

    /// Require a backend to be specified and supported.
    pub fn require_backend(&self) -> Result<Backend, CliError> {
        let name = self.resolve_backend_name().ok_or(CliError::NoBackend)?;
        let backend = name.parse::<Backend>()?;
        tracing::debug!(name, backend = %backend, "Resolved backend");
        Ok(backend)
    }
}

#[cfg(test)]
pub(crate) fn test_context(backend: Option<&str>) -> CommandContext {
    CommandContext {
        config: Config::default(),
        format: OutputFormat::Json,
        backend: backend.map(str::to_string),
    }
}
