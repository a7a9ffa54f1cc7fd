//! JSON formatter implementation.

use anyhow::Result;
use grafana_client::ResourceDescriptor;

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_descriptors(&self, descriptors: &[ResourceDescriptor]) -> Result<String> {
        let mut output = serde_json::to_string_pretty(descriptors)?;
        output.push('\n');
        Ok(output)
    }
}
