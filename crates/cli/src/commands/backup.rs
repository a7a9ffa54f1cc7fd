//! Backup command implementation.
//!
//! Responsibilities:
//! - Search for resources, then hand them to the [`BackupRunner`].
//! - Print a one-line summary to stdout.
//!
//! Invariants:
//! - A run with failed resources ends in [`PartialFailure`] after every
//!   other resource has been written.

use anyhow::{Context, Result};
use grafana_client::SearchOptions;
use grafana_config::Config;
use tracing::info;

use crate::args::SearchFilterArgs;
use crate::backup::{BackupRunner, BackupSettings};
use crate::cancellation::CancellationToken;
use crate::error::PartialFailure;
use crate::progress::{BackupProgress, Spinner};

pub async fn run(
    config: Config,
    filters: SearchFilterArgs,
    quiet: bool,
    metrics_enabled: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = super::build_client_from_config(&config, metrics_enabled)?;
    let settings = BackupSettings::from(&config.backup);
    let options = SearchOptions::from(filters);

    info!(base_url = %client.base_url(), "Searching dashboards");

    let spinner = Spinner::new(!quiet, "Searching dashboards");
    let descriptors = cancellable!(client.search(&options), cancel).context("Search failed")?;
    spinner.finish();

    let total = descriptors.len();
    let folders = descriptors.iter().filter(|d| d.is_folder()).count();
    info!(count = total, folders, "Search complete");

    std::fs::create_dir_all(&settings.dir).with_context(|| {
        format!(
            "Failed to create backup directory: {}",
            settings.dir.display()
        )
    })?;

    let dir = settings.dir.clone();
    let progress = BackupProgress::new(!quiet, total);
    let runner = BackupRunner::new(client, settings);
    let report = runner.run(descriptors, &progress, cancel).await?;
    progress.finish();

    info!(
        written = report.written.len(),
        failed = report.failed.len(),
        "Backup finished"
    );
    println!(
        "Wrote {} of {} dashboards to {}",
        report.written.len(),
        total,
        dir.display()
    );

    if !report.is_complete() {
        for (uri, error) in &report.failed {
            eprintln!("  {uri}: {error}");
        }
        return Err(PartialFailure {
            failed: report.failed.len(),
            total,
        }
        .into());
    }

    Ok(())
}
