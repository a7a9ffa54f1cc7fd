//! Search command implementation.
//!
//! Lists the descriptors `/api/search` returns without fetching any dashboard.

use anyhow::{Context, Result};
use grafana_client::SearchOptions;
use grafana_config::Config;
use tracing::info;

use crate::args::SearchFilterArgs;
use crate::cancellation::CancellationToken;
use crate::formatters::{OutputFormat, get_formatter};
use crate::progress::Spinner;

pub async fn run(
    config: Config,
    filters: SearchFilterArgs,
    output_format: OutputFormat,
    quiet: bool,
    metrics_enabled: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = super::build_client_from_config(&config, metrics_enabled)?;
    let options = SearchOptions::from(filters);

    info!("Connecting to {}", client.base_url());

    let spinner = Spinner::new(!quiet, "Searching dashboards");
    let descriptors = cancellable!(client.search(&options), cancel).context("Search failed")?;
    spinner.finish();

    info!(count = descriptors.len(), "Search complete");

    let formatter = get_formatter(output_format);
    let output = formatter.format_descriptors(&descriptors)?;
    print!("{}", output);

    Ok(())
}
