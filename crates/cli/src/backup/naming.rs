//! Output file naming.

use std::path::{Path, PathBuf};

use grafana_client::ResourceDescriptor;
use grafana_config::constants::BACKUP_FILE_EXTENSION;

/// Path the descriptor is written to: `<dir>/<second-uri-segment>.json`.
///
/// Returns `None` when the URI has no safe second segment.
pub(crate) fn backup_path(dir: &Path, descriptor: &ResourceDescriptor) -> Option<PathBuf> {
    let name = descriptor.backup_name()?;
    Some(dir.join(format!("{name}.{BACKUP_FILE_EXTENSION}")))
}
