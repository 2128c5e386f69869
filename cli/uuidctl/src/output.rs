//! Output formatting for CLI commands.

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

/// Print rows in the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => println!("{}", format_json(data, "[]")),
    }
}

/// Print a single item.
///
/// In table mode, `plain` is printed bare so the output can be piped.
pub fn print_single<T: Serialize>(data: &T, plain: &str, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", plain),
        OutputFormat::Json => println!("{}", format_json(data, "{}")),
    }
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Tabled)]
    struct Row {
        name: &'static str,
    }

    #[test]
    fn test_format_json_rows() {
        let rows = [Row { name: "uuid" }];
        let json = format_json(&rows[..], "[]");
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], "uuid");
    }

    #[test]
    fn test_table_contains_header() {
        let rows = [Row { name: "uuid" }];
        let table = Table::new(&rows).to_string();
        assert!(table.contains("name"));
        assert!(table.contains("uuid"));
    }
}
