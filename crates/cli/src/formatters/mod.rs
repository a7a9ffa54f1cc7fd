//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide table and JSON renderings of search results.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//! - Backup file serialization (see `crate::backup::writer`).
//!
//! Invariants:
//! - Tables use tab-separation for consistent alignment in standard terminals.
//! - Missing values render as `N/A` in tables and `null`/absent in JSON.
//! - Empty results: JSON prints `[]`, table prints a human message.

use anyhow::Result;
use clap::ValueEnum;
use grafana_client::ResourceDescriptor;

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Placeholder for missing values in human-facing output.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Formats command results for stdout.
pub trait Formatter {
    /// Render search results.
    fn format_descriptors(&self, descriptors: &[ResourceDescriptor]) -> Result<String>;
}

/// Get a formatter for the given output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptors() -> Vec<ResourceDescriptor> {
        vec![
            ResourceDescriptor {
                uri: "db/cpu-overview".to_string(),
                title: Some("CPU Overview".to_string()),
                kind: Some("dash-db".to_string()),
                folder_title: Some("Operations".to_string()),
                ..ResourceDescriptor::default()
            },
            ResourceDescriptor::from_uri("db/bare"),
        ]
    }

    #[test]
    fn test_table_lists_every_descriptor() {
        let output = get_formatter(OutputFormat::Table)
            .format_descriptors(&descriptors())
            .unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "URI\tTYPE\tTITLE\tFOLDER");
        assert_eq!(lines[1], "db/cpu-overview\tdash-db\tCPU Overview\tOperations");
        assert_eq!(lines[2], "db/bare\tN/A\tN/A\tN/A");
    }

    #[test]
    fn test_table_empty_state() {
        let output = TableFormatter.format_descriptors(&[]).unwrap();
        assert_eq!(output, "No dashboards found.\n");
    }

    #[test]
    fn test_json_output_is_parseable() {
        let output = get_formatter(OutputFormat::Json)
            .format_descriptors(&descriptors())
            .unwrap();
        let parsed: Vec<ResourceDescriptor> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, descriptors());
    }

    #[test]
    fn test_json_empty_state() {
        let output = JsonFormatter.format_descriptors(&[]).unwrap();
        assert_eq!(output.trim(), "[]");
    }
}
