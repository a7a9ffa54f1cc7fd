//! Table formatter implementation.

use anyhow::Result;
use grafana_client::ResourceDescriptor;

use crate::formatters::{DEFAULT_MISSING_VALUE, Formatter};

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_descriptors(&self, descriptors: &[ResourceDescriptor]) -> Result<String> {
        if descriptors.is_empty() {
            return Ok("No dashboards found.\n".to_string());
        }

        let mut output = String::from("URI\tTYPE\tTITLE\tFOLDER\n");
        for descriptor in descriptors {
            let row = [
                descriptor.uri.as_str(),
                descriptor.kind.as_deref().unwrap_or(DEFAULT_MISSING_VALUE),
                descriptor.title.as_deref().unwrap_or(DEFAULT_MISSING_VALUE),
                descriptor
                    .folder_title
                    .as_deref()
                    .unwrap_or(DEFAULT_MISSING_VALUE),
            ];
            output.push_str(&row.join("\t"));
            output.push('\n');
        }

        Ok(output)
    }
}
