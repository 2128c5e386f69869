//! Backends command.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;
use uuidcol_codec::{Backend, ColumnOptions};

use crate::output::print_output;

use super::CommandContext;

#[derive(Debug, Serialize, Tabled)]
struct BackendRow {
    #[tabled(rename = "BACKEND")]
    backend: Backend,
    #[tabled(rename = "NATIVE UUID")]
    native_uuid: bool,
    #[tabled(rename = "REPR")]
    repr: String,
    #[tabled(rename = "RECOGNIZED TYPES")]
    recognized_types: String,
    #[tabled(rename = "DDL")]
    ddl: String,
}

impl From<Backend> for BackendRow {
    fn from(backend: Backend) -> Self {
        let profile = backend.profile();
        Self {
            backend,
            native_uuid: profile.native_uuid,
            repr: format!("{:?}", profile.repr).to_lowercase(),
            recognized_types: profile.recognized_types.join(", "),
            ddl: backend.storage_type(ColumnOptions::default()),
        }
    }
}

pub fn run(ctx: &CommandContext) -> Result<()> {
    let rows: Vec<BackendRow> = Backend::ALL.into_iter().map(BackendRow::from).collect();
    print_output(&rows, ctx.format);
    Ok(())
}
