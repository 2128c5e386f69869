//! DDL command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use uuidcol_codec::{storage_type_for, ColumnOptions};

use crate::error::CliError;
use crate::output::print_single;

use super::CommandContext;

/// Print the DDL type fragment declaring a UUID column.
#[derive(Debug, Args)]
pub struct DdlCommand {
    /// Mark the column as the primary key.
    #[arg(long)]
    primary_key: bool,

    /// Column name to prefix the type with.
    #[arg(long)]
    column: Option<String>,
}

#[derive(Debug, Serialize)]
struct DdlView<'a> {
    backend: &'a str,
    column: Option<&'a str>,
    ddl: &'a str,
}

impl DdlCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let name = ctx.resolve_backend_name().ok_or(CliError::NoBackend)?;
        let options = ColumnOptions {
            primary_key: self.primary_key,
        };
        let ddl = storage_type_for(name, options).map_err(CliError::from)?;

        let plain = match &self.column {
            Some(column) => format!("{column} {ddl}"),
            None => ddl.clone(),
        };
        let view = DdlView {
            backend: name,
            column: self.column.as_deref(),
            ddl: &ddl,
        };

        print_single(&view, &plain, ctx.format);
        Ok(())
    }
}
