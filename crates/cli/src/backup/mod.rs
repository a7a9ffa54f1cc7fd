//! Dashboard backup pipeline.
//!
//! Responsibilities:
//! - Turn search results into files: fetch, transform, serialize, write.
//! - Run per-resource work concurrently with a bounded number of tasks.
//! - Report how many resources were written and which failed.
//!
//! Does NOT handle:
//! - HTTP details or the template-variable reset (see `grafana_client`).
//! - Exit code selection (see `crate::error`).
//!
//! Invariants:
//! - A failed resource never aborts the others and is never retried.
//! - A failed resource leaves any existing output file untouched.

mod naming;
mod runner;
mod writer;

use std::path::PathBuf;

use grafana_client::ClientError;
use thiserror::Error;

pub(crate) use naming::backup_path;
pub(crate) use runner::{BackupRunner, BackupSettings};
pub(crate) use writer::{serialize_document, write_atomic};

/// Why a single resource could not be backed up.
#[derive(Debug, Error)]
pub(crate) enum BackupError {
    #[error("Resource URI '{0}' has no usable file name segment")]
    InvalidUri(String),

    #[error(transparent)]
    Fetch(#[from] ClientError),

    #[error("Failed to serialize dashboard: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Backup task failed: {0}")]
    Task(String),
}
