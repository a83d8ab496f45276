//! # Commands
//!
//! One module per screen family. Each `run` takes the parsed subcommand
//! and the shared [`Context`].

pub mod orders;
pub mod schedules;

use anyhow::Result;
use chrono::NaiveDate;

use singa_api::Backend;
use singa_core::document::Table;
use singa_core::render::{table_lines, DocumentRenderer, TextRenderer};
use singa_core::validation::validate_delivery_date;
use singa_core::{DocumentSettings, OrderDocument};

/// Shared state for a single CLI invocation.
pub struct Context {
    pub backend: Backend,
    pub settings: DocumentSettings,
}

/// clap value parser for `YYYY-MM-DD` arguments.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    validate_delivery_date(value).map_err(|e| e.to_string())
}

/// Prints a document as pretty JSON, or as plain text with `as_text`.
pub fn print_document(document: &OrderDocument, as_text: bool) -> Result<()> {
    if as_text {
        print!("{}", TextRenderer::default().render(document));
    } else {
        println!("{}", serde_json::to_string_pretty(document)?);
    }
    Ok(())
}

/// Prints a list table, or `empty_message` when there are no rows.
pub fn print_table(columns: &[&str], rows: Vec<Vec<String>>, empty_message: &str) {
    if rows.is_empty() {
        println!("{empty_message}");
        return;
    }

    let table = Table {
        columns: columns.iter().map(|c| c.to_string()).collect(),
        rows,
    };
    for line in table_lines(&table) {
        println!("{line}");
    }
}
