//! Output formatters for fetched columns.

use clap::ValueEnum;
use colchip_core::{Catalog, Column};
use comfy_table::Table;

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Indented tree
    Tree,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Tree => write!(f, "tree"),
        }
    }
}

/// Trait for formatting output.
pub trait Formatter: Send + Sync {
    /// Format the fetched columns.
    fn format_columns(&self, catalog: &Catalog) -> String;

    /// Format an error message.
    fn format_error(&self, error: &str) -> String;
}

/// Create a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Tree => Box::new(TreeFormatter),
    }
}

/// Table formatter using comfy-table.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_columns(&self, catalog: &Catalog) -> String {
        if catalog.is_empty() {
            return "No columns".to_string();
        }

        let mut table = Table::new();
        table.set_header(vec!["Path", "Name", "Type"]);
        for (path, column) in rows(catalog) {
            table.add_row(vec![path, column.name.clone(), column.column_type.to_string()]);
        }
        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_columns(&self, catalog: &Catalog) -> String {
        serde_json::to_string_pretty(catalog).unwrap_or_else(|_| "[]".to_string())
    }

    fn format_error(&self, error: &str) -> String {
        serde_json::json!({
            "error": error
        })
        .to_string()
    }
}

/// CSV formatter.
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format_columns(&self, catalog: &Catalog) -> String {
        let mut output = String::from("path,name,type\n");
        for (path, column) in rows(catalog) {
            output.push_str(&format!(
                "{},\"{}\",{}\n",
                path,
                escape_csv(&column.name),
                column.column_type
            ));
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("error\n\"{}\"", escape_csv(error))
    }
}

/// Indented tree formatter.
pub struct TreeFormatter;

impl Formatter for TreeFormatter {
    fn format_columns(&self, catalog: &Catalog) -> String {
        let mut output = String::new();
        for column in catalog {
            write_tree(&mut output, column, 0);
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

fn write_tree(output: &mut String, column: &Column, depth: usize) {
    output.push_str(&format!(
        "{}{} [{}] ({})\n",
        "  ".repeat(depth),
        column.name,
        column.column_type,
        column.id
    ));
    for child in column.sub_columns() {
        write_tree(output, child, depth + 1);
    }
}

/// Every column with its dotted chip path, depth first.
fn rows(catalog: &Catalog) -> Vec<(String, &Column)> {
    catalog
        .walk()
        .map(|column| {
            let path = catalog
                .path_of(&column.id)
                .unwrap_or_else(|| column.id.clone());
            (path, column)
        })
        .collect()
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"")
}
