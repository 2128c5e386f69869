//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;
use uuidcol_codec::UuidError;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("No backend specified. Use --backend, UUIDCTL_BACKEND, or set one in the config file.")]
    NoBackend,

    #[error("Invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error(transparent)]
    Codec(#[from] UuidError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", hint.yellow());
    }
}

fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    let codec_err = err.downcast_ref::<UuidError>().or_else(|| {
        err.downcast_ref::<CliError>().and_then(|e| match e {
            CliError::Codec(inner) => Some(inner),
            _ => None,
        })
    });

    match codec_err {
        Some(UuidError::UnsupportedBackend(_)) => Some(
            "Hint: use `native-uuid`, `binary`, or an adapter name such as postgresql, mysql2 or sqlite3. Run `uuidctl backends` to list them.",
        ),
        Some(UuidError::InvalidFormat { .. }) => Some(
            "Hint: UUIDs are 36-character hyphenated strings (8-4-4-4-12) or, with --hex, exactly 32 hex digits.",
        ),
        _ => match err.downcast_ref::<CliError>() {
            Some(CliError::NoBackend) => Some("Hint: try `--backend postgresql` or `--backend mysql2`."),
            _ => None,
        },
    }
}
