//! Value conversion commands: encode, decode and literal.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use uuidcol_codec::{
    encode_for_backend, marshal_nullable, parse, Direction, Marshalled, UuidRepr, UuidValue,
};

use crate::error::CliError;
use crate::output::print_single;

use super::CommandContext;

/// Encode a UUID into the selected backend's wire form.
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// UUID in hyphenated form.
    value: String,
}

#[derive(Debug, Serialize)]
struct EncodeView {
    backend: String,
    repr: UuidRepr,
    /// Text as-is, binary as lowercase hex.
    wire: String,
}

impl EncodeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let backend = ctx.require_backend()?;
        let wire = encode_for_backend(self.value.as_str(), backend).map_err(CliError::from)?;

        let view = EncodeView {
            backend: backend.to_string(),
            repr: wire.repr(),
            wire: wire.to_string(),
        };
        print_single(&view, &view.wire, ctx.format);
        Ok(())
    }
}

/// Decode a stored UUID into canonical form.
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// Stored value: hyphenated text, or hex bytes with --hex.
    value: String,

    /// Interpret the value as hex-encoded raw bytes (e.g. from a binary(16) column).
    #[arg(long)]
    hex: bool,
}

#[derive(Debug, Serialize)]
struct DecodeView {
    uuid: UuidValue,
    hex: String,
    version: usize,
}

impl DecodeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let value = decode_input(&self.value, self.hex)?;

        let view = DecodeView {
            uuid: value,
            hex: hex::encode(value.to_binary()),
            version: value.as_uuid().get_version_num(),
        };
        print_single(&view, &value.to_text(), ctx.format);
        Ok(())
    }
}

fn decode_input(input: &str, is_hex: bool) -> Result<UuidValue, CliError> {
    if is_hex {
        let bytes = hex::decode(input.trim())?;
        Ok(parse(&bytes)?)
    } else {
        Ok(parse(input.trim())?)
    }
}

/// Render a UUID as a SQL literal for the selected backend.
#[derive(Debug, Args)]
pub struct LiteralCommand {
    /// UUID in hyphenated form. Omit to render NULL.
    value: Option<String>,
}

#[derive(Debug, Serialize)]
struct LiteralView {
    backend: String,
    literal: String,
}

impl LiteralCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let backend = ctx.require_backend()?;
        let marshalled = marshal_nullable(self.value.as_deref(), backend, Direction::ToSqlLiteral)
            .map_err(CliError::from)?;

        let literal = match marshalled {
            Some(Marshalled::Literal(literal)) => literal,
            other => anyhow::bail!("unexpected marshalling result: {other:?}"),
        };

        let view = LiteralView {
            backend: backend.to_string(),
            literal,
        };
        print_single(&view, &view.literal, ctx.format);
        Ok(())
    }
}
