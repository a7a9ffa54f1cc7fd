//! Bounded concurrent backup runner.
//!
//! Keeps up to `concurrency` resources in flight at once; when one finishes,
//! the next descriptor is started until none remain. Every task is joined
//! before `run` returns.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use grafana_client::{GrafanaClient, ResourceDescriptor};
use grafana_config::{BackupConfig, BackupMode, ResetScope};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use super::{BackupError, backup_path, serialize_document, write_atomic};
use crate::cancellation::{CancellationToken, Cancelled};
use crate::progress::BackupProgress;

/// Per-run backup settings, resolved from [`BackupConfig`].
#[derive(Debug, Clone)]
pub(crate) struct BackupSettings {
    pub dir: PathBuf,
    pub mode: BackupMode,
    pub reset_scope: ResetScope,
    pub concurrency: usize,
    pub pretty: bool,
}

impl From<&BackupConfig> for BackupSettings {
    fn from(config: &BackupConfig) -> Self {
        Self {
            dir: config.backup_dir.clone(),
            mode: config.mode,
            reset_scope: config.reset_scope,
            concurrency: config.concurrency,
            pretty: config.pretty,
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub(crate) struct BackupReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(String, BackupError)>,
}

impl BackupReport {
    pub(crate) fn total(&self) -> usize {
        self.written.len() + self.failed.len()
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

pub(crate) struct BackupRunner {
    client: Arc<GrafanaClient>,
    settings: Arc<BackupSettings>,
}

impl BackupRunner {
    pub(crate) fn new(client: GrafanaClient, settings: BackupSettings) -> Self {
        Self {
            client: Arc::new(client),
            settings: Arc::new(settings),
        }
    }

    /// Back up every descriptor and wait for all of them.
    ///
    /// Per-resource failures land in the report. The only error returned is
    /// [`Cancelled`], after aborting whatever is still in flight.
    pub(crate) async fn run(
        &self,
        descriptors: Vec<ResourceDescriptor>,
        progress: &BackupProgress,
        cancel: &CancellationToken,
    ) -> Result<BackupReport> {
        let max_concurrent = self.settings.concurrency.max(1);
        let mut pending = descriptors.into_iter();
        let mut join_set = JoinSet::new();
        let mut in_flight: HashMap<tokio::task::Id, String> = HashMap::new();
        let mut report = BackupReport::default();

        loop {
            while join_set.len() < max_concurrent {
                let Some(descriptor) = pending.next() else {
                    break;
                };
                let uri = descriptor.uri.clone();
                let client = Arc::clone(&self.client);
                let settings = Arc::clone(&self.settings);
                let handle = join_set
                    .spawn(async move { backup_one(&client, &settings, &descriptor).await });
                in_flight.insert(handle.id(), uri);
            }

            if join_set.is_empty() {
                break;
            }

            let joined = tokio::select! {
                joined = join_set.join_next_with_id() => joined,
                _ = cancel.cancelled() => {
                    join_set.abort_all();
                    return Err(anyhow::Error::new(Cancelled));
                }
            };
            let Some(joined) = joined else {
                break;
            };

            let (uri, outcome) = match joined {
                Ok((id, outcome)) => (in_flight.remove(&id).unwrap_or_default(), outcome),
                Err(join_err) => (
                    in_flight.remove(&join_err.id()).unwrap_or_default(),
                    Err(BackupError::Task(join_err.to_string())),
                ),
            };
            self.record(&mut report, uri, outcome);
            progress.inc();
        }

        Ok(report)
    }

    fn record(
        &self,
        report: &mut BackupReport,
        uri: String,
        outcome: Result<PathBuf, BackupError>,
    ) {
        let metrics = self.client.metrics();
        match outcome {
            Ok(path) => {
                info!(uri = %uri, path = %path.display(), "Backed up dashboard");
                if let Some(m) = metrics {
                    m.record_dashboard_written();
                }
                report.written.push(path);
            }
            Err(e) => {
                warn!(uri = %uri, error = %e, "Failed to back up dashboard");
                if let Some(m) = metrics {
                    m.record_dashboard_failed();
                }
                report.failed.push((uri, e));
            }
        }
    }
}

/// Fetch, transform and write one resource.
async fn backup_one(
    client: &GrafanaClient,
    settings: &BackupSettings,
    descriptor: &ResourceDescriptor,
) -> Result<PathBuf, BackupError> {
    let path = backup_path(&settings.dir, descriptor)
        .ok_or_else(|| BackupError::InvalidUri(descriptor.uri.clone()))?;

    let document = client.get_dashboard(&descriptor.uri).await?;
    if document.is_folder() {
        debug!(uri = %descriptor.uri, "Folder document, skipping template reset");
    }

    let backup = document.into_backup(settings.mode, settings.reset_scope);
    let bytes = serialize_document(&backup, settings.pretty)?;
    write_atomic(&path, &bytes)?;

    Ok(path)
}
